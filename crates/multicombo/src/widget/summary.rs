//! Closed-state caption of the control.

use crate::model::{CheckableItem, MultiSelectModel};

/// Caption shown when nothing is checked, so the control keeps its height.
pub const EMPTY_PLACEHOLDER: &str = " ";

/// Builds the caption shown in the closed control.
///
/// The caption is the text of every checked item, sorted lexicographically
/// and joined with the model's separator. Sorting makes the caption depend
/// only on which items are checked, not on the order they were checked in.
///
/// The formatter caches the last caption. While the selection is above the
/// model's limit, [`refresh`](Self::refresh) holds back items checked past
/// the limit and keeps the previous caption. Unchecking always refreshes it,
/// so the caption never lists an item that is no longer checked.
#[derive(Debug, Clone)]
pub struct SummaryLabelFormatter {
    caption: String,
    placeholder: String,
    /// Items listed by `caption`.
    shown: Vec<CheckableItem>,
}

impl Default for SummaryLabelFormatter {
    fn default() -> Self {
        Self {
            caption: EMPTY_PLACEHOLDER.to_string(),
            placeholder: EMPTY_PLACEHOLDER.to_string(),
            shown: Vec::new(),
        }
    }
}

impl SummaryLabelFormatter {
    /// Create a formatter with the blank placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different placeholder for an empty selection.
    ///
    /// An empty string is replaced with [`EMPTY_PLACEHOLDER`].
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.placeholder = if placeholder.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            placeholder
        };
        self.caption = self.placeholder.clone();
        self.shown.clear();
        self
    }

    /// The placeholder used for an empty selection.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The last computed caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Compute the caption for the model's current selection.
    pub fn format(&self, model: &MultiSelectModel) -> String {
        let mut texts: Vec<String> = model.selected_items().map(ToString::to_string).collect();
        if texts.is_empty() {
            return self.placeholder.clone();
        }
        texts.sort();
        texts.join(model.separator())
    }

    /// Rescan the model and recompute the cached caption.
    ///
    /// Above the limit, the caption is kept as long as every item it lists
    /// is still checked. Returns `true` if the caption changed.
    pub fn refresh(&mut self, model: &mut MultiSelectModel) -> bool {
        model.recount();

        let only_grew = self
            .shown
            .iter()
            .all(|item| item.is_selected() && model.index_of(item).is_some());
        if !model.ledger().within_limit() && only_grew {
            return false;
        }

        self.shown = model.all_selected_items();
        let caption = self.format(model);

        if caption == self.caption {
            false
        } else {
            self.caption = caption;
            true
        }
    }
}
