//! Per-control selection counters.

use super::item::CheckableItem;

/// Separator used between item texts in the summary caption.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Selection limit, cached selected count and summary separator for one
/// control.
///
/// The toggle handler, the summary formatter and the renderer all read the
/// count from here instead of rescanning the list on every paint. A ledger
/// is owned by exactly one model and is never shared between controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLedger {
    limit: usize,
    selected_count: usize,
    separator: String,
}

impl Default for SelectionLedger {
    fn default() -> Self {
        Self {
            limit: 0,
            selected_count: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SelectionLedger {
    /// Create a ledger with an unlimited selection and the default separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection limit. `0` means unlimited.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Replace the selection limit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Whether the selection is unlimited.
    pub fn is_unlimited(&self) -> bool {
        self.limit == 0
    }

    /// The cached number of checked items.
    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    /// The summary separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Replace the summary separator.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Whether checking one more item is allowed.
    pub fn can_check_more(&self) -> bool {
        self.is_unlimited() || self.selected_count < self.limit
    }

    /// Whether the cached count is within what the limit allows.
    pub fn within_limit(&self) -> bool {
        self.is_unlimited() || self.limit >= self.selected_count
    }

    /// Recompute the selected count by scanning every item.
    ///
    /// Returns the new count.
    pub fn recount<'a>(&mut self, items: impl IntoIterator<Item = &'a CheckableItem>) -> usize {
        self.selected_count = items.into_iter().filter(|i| i.is_selected()).count();
        self.selected_count
    }
}
