//! The multi-select list model and its soft-limit policy.

use multicombo_core::logging::targets;

use super::item::CheckableItem;
use super::ledger::SelectionLedger;

/// The result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item went from unchecked to checked.
    Checked,
    /// The item went from checked to unchecked.
    Unchecked,
    /// The item was unchecked and the limit was already reached; nothing changed.
    LimitReached,
    /// The popup was closed, so the commit followed single-select semantics.
    PopupClosed,
}

impl ToggleOutcome {
    /// Whether the toggle flipped the item.
    pub fn changed(self) -> bool {
        matches!(self, Self::Checked | Self::Unchecked)
    }
}

/// An ordered list of [`CheckableItem`]s with a soft selection limit.
///
/// Items keep their insertion order, which is the display order. The limit
/// is soft: a toggle that would exceed it is silently ignored, and lowering
/// the limit never unchecks anything.
///
/// # Example
///
/// ```
/// use multicombo::{MultiSelectModel, ToggleOutcome};
///
/// let mut model = MultiSelectModel::from(["A", "B", "C"]).with_limit(1);
///
/// assert_eq!(model.toggle(0), ToggleOutcome::Checked);
/// assert_eq!(model.toggle(1), ToggleOutcome::LimitReached);
/// assert_eq!(model.toggle(0), ToggleOutcome::Unchecked);
/// ```
#[derive(Debug, Default)]
pub struct MultiSelectModel {
    items: Vec<CheckableItem>,
    ledger: SelectionLedger,
}

impl MultiSelectModel {
    /// Create a model with an unlimited selection and the default separator.
    pub fn new(items: impl IntoIterator<Item = CheckableItem>) -> Self {
        let mut model = Self {
            items: items.into_iter().collect(),
            ledger: SelectionLedger::new(),
        };
        model.recount();
        model
    }

    /// Create an empty model.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the limit using builder pattern.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.set_limit(limit);
        self
    }

    /// Set the separator using builder pattern.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the model has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` if out of range.
    pub fn item(&self, index: usize) -> Option<&CheckableItem> {
        self.items.get(index)
    }

    /// All items in display order.
    pub fn items(&self) -> &[CheckableItem] {
        &self.items
    }

    /// Find the row of an item by identity.
    pub fn index_of(&self, item: &CheckableItem) -> Option<usize> {
        self.items.iter().position(|i| i.ptr_eq(item))
    }

    /// Append an item.
    pub fn add_item(&mut self, item: impl Into<CheckableItem>) {
        self.items.push(item.into());
        self.recount();
    }

    /// Insert an item at `index`. Out-of-range indices are ignored.
    pub fn insert_item(&mut self, index: usize, item: impl Into<CheckableItem>) {
        if index <= self.items.len() {
            self.items.insert(index, item.into());
            self.recount();
        }
    }

    /// Remove and return the item at `index`. Out-of-range indices return `None`.
    pub fn remove_item(&mut self, index: usize) -> Option<CheckableItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.recount();
        Some(removed)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recount();
    }

    // =========================================================================
    // Limit and separator
    // =========================================================================

    /// The ledger holding this model's counters.
    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// The selection limit. `0` means unlimited.
    pub fn limit(&self) -> usize {
        self.ledger.limit()
    }

    /// Replace the selection limit.
    ///
    /// A limit below the current selection does not uncheck anything; it
    /// only blocks new checks until the selection drops below it.
    pub fn set_limit(&mut self, limit: usize) {
        self.ledger.set_limit(limit);
    }

    /// The summary separator.
    pub fn separator(&self) -> &str {
        self.ledger.separator()
    }

    /// Replace the summary separator.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.ledger.set_separator(separator);
    }

    /// The cached number of checked items.
    pub fn selected_count(&self) -> usize {
        self.ledger.selected_count()
    }

    /// Rescan every item and refresh the cached count.
    pub fn recount(&mut self) -> usize {
        self.ledger.recount(&self.items)
    }

    // =========================================================================
    // Toggle
    // =========================================================================

    /// Flip the checked flag of the item at `index`, subject to the limit.
    ///
    /// Unchecking always succeeds. Checking succeeds when the limit is `0`
    /// or fewer than `limit` items are checked; otherwise the call is a
    /// silent no-op returning [`ToggleOutcome::LimitReached`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> ToggleOutcome {
        let len = self.items.len();
        assert!(
            index < len,
            "toggle index {index} out of range for a model with {len} items"
        );

        // Items may have been flipped externally since the last toggle.
        self.recount();

        let item = &self.items[index];
        let was_checked = item.is_selected();
        if !was_checked && !self.ledger.can_check_more() {
            return ToggleOutcome::LimitReached;
        }

        item.set_selected(!was_checked);
        let selected_count = self.recount();

        tracing::debug!(
            target: targets::MODEL,
            index,
            checked = !was_checked,
            selected_count,
            "item toggled"
        );

        if was_checked {
            ToggleOutcome::Unchecked
        } else {
            ToggleOutcome::Checked
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Iterate over the checked items in display order.
    ///
    /// The iterator is lazy and reads the current flags each time it is
    /// created, so calling this again after a toggle sees the new state.
    pub fn selected_items(&self) -> impl Iterator<Item = &CheckableItem> + '_ {
        self.items.iter().filter(|i| i.is_selected())
    }

    /// Collect the checked items in display order.
    pub fn all_selected_items(&self) -> Vec<CheckableItem> {
        self.selected_items().cloned().collect()
    }

    /// Rows of the checked items in display order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.is_selected())
            .map(|(row, _)| row)
            .collect()
    }
}

impl From<Vec<CheckableItem>> for MultiSelectModel {
    fn from(items: Vec<CheckableItem>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for MultiSelectModel {
    fn from(texts: Vec<&str>) -> Self {
        Self::new(texts.into_iter().map(CheckableItem::new))
    }
}

impl<const N: usize> From<[&str; N]> for MultiSelectModel {
    fn from(texts: [&str; N]) -> Self {
        Self::new(texts.into_iter().map(CheckableItem::new))
    }
}

impl FromIterator<CheckableItem> for MultiSelectModel {
    fn from_iter<I: IntoIterator<Item = CheckableItem>>(iter: I) -> Self {
        Self::new(iter)
    }
}
