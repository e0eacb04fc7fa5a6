//! Checkable items.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

struct ItemData {
    text: String,
    payload: Option<Box<dyn Any>>,
    checked: Cell<bool>,
}

/// A list entry carrying an independent checked flag.
///
/// `CheckableItem` is a shared handle: cloning it yields another handle to
/// the same entity, and equality is identity. Two items constructed with the
/// same text are distinct.
///
/// The text and payload are fixed at construction. The checked flag is the
/// only mutable state and may be changed by the owning model or directly
/// through [`set_selected`](Self::set_selected).
///
/// # Example
///
/// ```
/// use multicombo::CheckableItem;
///
/// let a = CheckableItem::new("Apple");
/// let also_a = a.clone();
/// let other = CheckableItem::new("Apple");
///
/// assert_eq!(a, also_a);
/// assert_ne!(a, other);
///
/// also_a.set_selected(true);
/// assert!(a.is_selected());
/// ```
#[derive(Clone)]
pub struct CheckableItem {
    inner: Rc<ItemData>,
}

impl CheckableItem {
    /// Create an unchecked item with no payload.
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), None, false)
    }

    /// Create an item with an initial checked state.
    pub fn with_checked(text: impl Into<String>, checked: bool) -> Self {
        Self::build(text.into(), None, checked)
    }

    /// Create an unchecked item carrying an opaque payload.
    pub fn with_payload<T: Any>(text: impl Into<String>, payload: T) -> Self {
        Self::build(text.into(), Some(Box::new(payload)), false)
    }

    /// Create an item with both a payload and an initial checked state.
    pub fn with_payload_checked<T: Any>(
        text: impl Into<String>,
        payload: T,
        checked: bool,
    ) -> Self {
        Self::build(text.into(), Some(Box::new(payload)), checked)
    }

    fn build(text: String, payload: Option<Box<dyn Any>>, checked: bool) -> Self {
        Self {
            inner: Rc::new(ItemData {
                text,
                payload,
                checked: Cell::new(checked),
            }),
        }
    }

    /// The display text.
    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// The caller-supplied payload, if any.
    pub fn payload(&self) -> Option<&dyn Any> {
        self.inner.payload.as_deref()
    }

    /// The payload downcast to `T`, or `None` if absent or of another type.
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload().and_then(|p| p.downcast_ref::<T>())
    }

    /// Whether the item is checked.
    pub fn is_selected(&self) -> bool {
        self.inner.checked.get()
    }

    /// Set the checked flag directly.
    ///
    /// This bypasses the selection limit. The owning model picks the change
    /// up on its next recount.
    pub fn set_selected(&self, selected: bool) {
        self.inner.checked.set(selected);
    }

    /// Whether two handles refer to the same item.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for CheckableItem {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for CheckableItem {}

impl fmt::Display for CheckableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.text)
    }
}

impl fmt::Debug for CheckableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckableItem")
            .field("text", &self.inner.text)
            .field("has_payload", &self.inner.payload.is_some())
            .field("checked", &self.inner.checked.get())
            .finish()
    }
}

impl From<&str> for CheckableItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CheckableItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
