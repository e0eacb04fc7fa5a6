//! Popup state machine of the multi-select dropdown.
//!
//! In an ordinary single-select dropdown, clicking a popup row selects it
//! and closes the popup. [`DropdownController`] redirects that commit into a
//! toggle of the row's checked flag and swallows the close attempt that
//! follows, so the user can check several rows in one visit.
//!
//! # Example
//!
//! ```
//! use multicombo::{CheckBoxRenderer, ComboEvent, DropdownController, MultiSelectModel};
//!
//! let model = MultiSelectModel::from(["Apple", "Banana", "Cherry"]).with_limit(2);
//! let mut combo = DropdownController::new(model);
//!
//! combo.selection_changed.connect(|count| {
//!     println!("{count} selected");
//! });
//!
//! combo.handle_event(&ComboEvent::DisplayClicked);
//! combo.handle_event(&ComboEvent::RowClicked(2));
//! combo.handle_event(&ComboEvent::RowClicked(0));
//!
//! assert!(combo.is_popup_visible());
//! assert_eq!(combo.summary_text(), "Apple, Cherry");
//!
//! let pass = combo.paint(&mut CheckBoxRenderer::new());
//! assert_eq!(pass.rows.len(), 3);
//! ```

use std::ops::Range;

use multicombo_core::Signal;
use multicombo_core::logging::{span_names, targets};

use crate::config::ComboConfig;
use crate::error::Result;
use crate::model::{CheckableItem, MultiSelectModel, ToggleOutcome};
use crate::render::{ItemRenderer, ListPalette};

use super::events::{ComboEvent, CommitSource, Key};
use super::summary::SummaryLabelFormatter;

/// Default number of rows shown in the popup before it scrolls.
pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 10;

/// Visibility of the popup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    /// Only the summary is shown.
    #[default]
    Closed,
    /// The popup list is shown.
    Open,
}

/// Visuals produced by one paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintPass<V> {
    /// The closed-state summary.
    pub summary: V,
    /// One visual per visible popup row, with its row index. Empty while closed.
    pub rows: Vec<(usize, V)>,
}

/// A multi-select dropdown: the selection model plus popup behaviour.
///
/// # Signals
///
/// - `item_toggled((usize, bool))`: a row's checked flag flipped
/// - `selection_changed(usize)`: the number of checked items after a toggle
/// - `popup_visibility_changed(bool)`: the popup opened or closed
/// - `current_index_changed(Option<usize>)`: the current row changed
/// - `summary_changed(String)`: the closed-state caption changed
pub struct DropdownController {
    model: MultiSelectModel,
    summary: SummaryLabelFormatter,
    palette: ListPalette,

    popup: PopupState,
    /// Swallows exactly one close attempt after a commit.
    keep_open_once: bool,

    current_index: Option<usize>,
    highlighted_index: Option<usize>,
    max_visible_items: usize,
    scroll_offset: usize,

    // Signals
    /// Signal emitted when a row's checked flag flips.
    pub item_toggled: Signal<(usize, bool)>,
    /// Signal emitted with the selected count after a successful toggle.
    pub selection_changed: Signal<usize>,
    /// Signal emitted when the popup opens or closes.
    pub popup_visibility_changed: Signal<bool>,
    /// Signal emitted when the current row changes.
    pub current_index_changed: Signal<Option<usize>>,
    /// Signal emitted when the summary caption changes.
    pub summary_changed: Signal<String>,
}

// Items are `Rc` handles; the control must stay on the sequence that built it.
static_assertions::assert_not_impl_any!(DropdownController: Send, Sync);

impl std::fmt::Debug for DropdownController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownController")
            .field("model", &self.model)
            .field("popup", &self.popup)
            .field("keep_open_once", &self.keep_open_once)
            .field("current_index", &self.current_index)
            .field("highlighted_index", &self.highlighted_index)
            .field("caption", &self.summary.caption())
            .finish_non_exhaustive()
    }
}

impl DropdownController {
    /// Create a closed control around a model.
    pub fn new(model: MultiSelectModel) -> Self {
        let mut controller = Self {
            model,
            summary: SummaryLabelFormatter::new(),
            palette: ListPalette::default(),
            popup: PopupState::Closed,
            keep_open_once: false,
            current_index: None,
            highlighted_index: None,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            scroll_offset: 0,
            item_toggled: Signal::new(),
            selection_changed: Signal::new(),
            popup_visibility_changed: Signal::new(),
            current_index_changed: Signal::new(),
            summary_changed: Signal::new(),
        };
        controller.summary.refresh(&mut controller.model);
        controller
    }

    /// Create a control from items and a configuration.
    pub fn from_config(
        items: impl IntoIterator<Item = CheckableItem>,
        config: &ComboConfig,
    ) -> Result<Self> {
        config.validate()?;

        let model = MultiSelectModel::new(items)
            .with_limit(config.limit)
            .with_separator(config.separator.clone());

        Ok(Self::new(model)
            .with_placeholder(config.placeholder.clone())
            .with_palette(config.palette)
            .with_max_visible_items(config.max_visible_items))
    }

    /// Set the row palette using builder pattern.
    pub fn with_palette(mut self, palette: ListPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the empty-selection placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.summary = SummaryLabelFormatter::new().with_placeholder(placeholder);
        self.summary.refresh(&mut self.model);
        self
    }

    /// Set max visible items using builder pattern.
    pub fn with_max_visible_items(mut self, count: usize) -> Self {
        self.set_max_visible_items(count);
        self
    }

    // =========================================================================
    // Model access
    // =========================================================================

    /// The selection model.
    pub fn model(&self) -> &MultiSelectModel {
        &self.model
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.model.len()
    }

    /// The checked items in display order.
    pub fn all_selected_items(&self) -> Vec<CheckableItem> {
        self.model.all_selected_items()
    }

    /// The selection limit. `0` means unlimited.
    pub fn limit(&self) -> usize {
        self.model.limit()
    }

    /// Replace the selection limit. Already checked items stay checked.
    pub fn set_limit(&mut self, limit: usize) {
        self.model.set_limit(limit);
    }

    /// Replace the summary separator and refresh the caption.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.model.set_separator(separator);
        self.refresh_summary();
    }

    /// Append a row.
    pub fn add_item(&mut self, item: impl Into<CheckableItem>) {
        self.model.add_item(item);
        self.refresh_summary();
    }

    /// Remove a row, keeping the current and highlighted rows pointing at
    /// the same items where possible.
    pub fn remove_item(&mut self, index: usize) -> Option<CheckableItem> {
        let removed = self.model.remove_item(index)?;

        let shift = |row: Option<usize>| match row {
            Some(r) if r == index => None,
            Some(r) if r > index => Some(r - 1),
            other => other,
        };
        self.highlighted_index = shift(self.highlighted_index);
        let current = shift(self.current_index);
        if current != self.current_index {
            self.current_index = current;
            self.current_index_changed.emit(current);
        }

        if self.model.is_empty() {
            self.hide_popup();
        }
        self.clamp_scroll_offset();
        self.refresh_summary();
        Some(removed)
    }

    // =========================================================================
    // Current and highlighted rows
    // =========================================================================

    /// The current row, set by the last commit.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The current item.
    pub fn current_item(&self) -> Option<&CheckableItem> {
        self.current_index.and_then(|i| self.model.item(i))
    }

    /// Set the current row. Out-of-range rows clear it. Never toggles.
    pub fn set_current_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.model.len());
        if self.current_index != index {
            self.current_index = index;
            self.current_index_changed.emit(index);
        }
    }

    /// The row under the mouse or keyboard cursor.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Move the highlight. Out-of-range rows clear it.
    pub fn set_highlighted_index(&mut self, index: Option<usize>) {
        self.highlighted_index = index.filter(|&i| i < self.model.len());
        self.ensure_highlighted_visible();
    }

    // =========================================================================
    // Popup
    // =========================================================================

    /// The popup state.
    pub fn popup_state(&self) -> PopupState {
        self.popup
    }

    /// Whether the popup is open.
    pub fn is_popup_visible(&self) -> bool {
        self.popup == PopupState::Open
    }

    /// Whether the next close attempt will be swallowed.
    pub fn is_close_suppressed(&self) -> bool {
        self.keep_open_once
    }

    /// Open the popup. Does nothing without rows or when already open.
    pub fn show_popup(&mut self) {
        if self.popup == PopupState::Open || self.model.is_empty() {
            return;
        }

        self.popup = PopupState::Open;
        self.highlighted_index = Some(self.current_index.unwrap_or(0));
        self.ensure_highlighted_visible();

        tracing::debug!(target: targets::POPUP, highlighted = ?self.highlighted_index, "popup opened");
        self.popup_visibility_changed.emit(true);
    }

    /// Ask the popup to close.
    ///
    /// If a commit just armed the suppression flag, this attempt is consumed
    /// and the popup stays open. Returns `true` if the popup actually closed.
    pub fn request_close(&mut self) -> bool {
        if self.popup == PopupState::Closed {
            return false;
        }

        if self.keep_open_once {
            self.keep_open_once = false;
            tracing::debug!(target: targets::POPUP, "close suppressed after commit");
            return false;
        }

        self.hide_popup();
        true
    }

    /// Toggle the popup visibility. Closing goes through [`request_close`](Self::request_close).
    pub fn toggle_popup(&mut self) {
        if self.is_popup_visible() {
            self.request_close();
        } else {
            self.show_popup();
        }
    }

    fn hide_popup(&mut self) {
        if self.popup == PopupState::Open {
            self.popup = PopupState::Closed;
            self.keep_open_once = false;
            self.highlighted_index = None;
            tracing::debug!(target: targets::POPUP, "popup closed");
            self.popup_visibility_changed.emit(false);
        }
    }

    // =========================================================================
    // Toggle and commit
    // =========================================================================

    /// Toggle a row's checked flag, subject to the limit.
    ///
    /// While the popup is closed this does nothing and returns
    /// [`ToggleOutcome::PopupClosed`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> ToggleOutcome {
        if self.popup == PopupState::Closed {
            return ToggleOutcome::PopupClosed;
        }

        let outcome = self.model.toggle(index);
        if outcome.changed() {
            self.set_current_index(Some(index));
            self.item_toggled
                .emit((index, outcome == ToggleOutcome::Checked));
            self.selection_changed.emit(self.model.selected_count());
            self.refresh_summary();
        }
        outcome
    }

    /// Handle a commit event (a click on a row or keyboard activation).
    ///
    /// While open, the commit arms the close suppression, toggles the row
    /// and then lets the default close attempt run, which the suppression
    /// swallows: the popup stays open. Mouse and keyboard commits behave
    /// identically.
    ///
    /// While closed, the commit follows single-select semantics: the row
    /// becomes current, nothing is toggled and the popup stays closed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn commit(&mut self, index: usize, source: CommitSource) -> ToggleOutcome {
        let len = self.model.len();
        assert!(
            index < len,
            "commit row {index} out of range for a control with {len} rows"
        );

        let span = tracing::debug_span!(target: targets::POPUP, span_names::COMMIT, index, ?source);
        let _enter = span.enter();

        if self.popup == PopupState::Closed {
            self.set_current_index(Some(index));
            return ToggleOutcome::PopupClosed;
        }

        self.keep_open_once = true;
        let outcome = self.toggle(index);
        self.request_close();
        outcome
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch an input event. Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &ComboEvent) -> bool {
        match *event {
            ComboEvent::DisplayClicked => {
                self.toggle_popup();
                true
            }
            ComboEvent::RowHovered(row) => {
                if self.is_popup_visible() && row < self.model.len() {
                    self.set_highlighted_index(Some(row));
                    true
                } else {
                    false
                }
            }
            ComboEvent::RowClicked(row) => {
                if self.is_popup_visible() && row < self.model.len() {
                    self.set_highlighted_index(Some(row));
                    self.commit(row, CommitSource::Mouse);
                    true
                } else {
                    false
                }
            }
            ComboEvent::KeyPressed(Key::Space) => {
                // Closed: single-select semantics on the current row, never opens.
                let row = if self.is_popup_visible() {
                    self.highlighted_index
                } else {
                    self.current_index
                };
                match row {
                    Some(row) => {
                        self.commit(row, CommitSource::Keyboard);
                        true
                    }
                    None => false,
                }
            }
            ComboEvent::KeyPressed(Key::Escape) => self.request_close(),
            ComboEvent::KeyPressed(Key::Other) => false,
            ComboEvent::ClickedOutside | ComboEvent::FocusLost => self.request_close(),
        }
    }

    // =========================================================================
    // Summary and painting
    // =========================================================================

    /// The closed-state caption.
    pub fn summary_text(&self) -> &str {
        self.summary.caption()
    }

    /// The row palette.
    pub fn palette(&self) -> &ListPalette {
        &self.palette
    }

    /// Replace the row palette.
    pub fn set_palette(&mut self, palette: ListPalette) {
        self.palette = palette;
    }

    fn refresh_summary(&mut self) {
        if self.summary.refresh(&mut self.model) {
            self.summary_changed.emit(self.summary.caption().to_string());
        }
    }

    /// Maximum number of rows rendered at once.
    pub fn max_visible_items(&self) -> usize {
        self.max_visible_items
    }

    /// Set the maximum number of rows rendered at once (at least 1).
    pub fn set_max_visible_items(&mut self, count: usize) {
        self.max_visible_items = count.max(1);
        self.clamp_scroll_offset();
        self.ensure_highlighted_visible();
    }

    /// First row rendered in the popup.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows rendered by the next paint pass while the popup is open.
    pub fn visible_rows(&self) -> Range<usize> {
        let end = (self.scroll_offset + self.max_visible_items).min(self.model.len());
        self.scroll_offset.min(end)..end
    }

    fn ensure_highlighted_visible(&mut self) {
        let Some(idx) = self.highlighted_index else {
            return;
        };

        if idx < self.scroll_offset {
            self.scroll_offset = idx;
        } else if idx >= self.scroll_offset + self.max_visible_items {
            self.scroll_offset = idx + 1 - self.max_visible_items;
        }
    }

    fn clamp_scroll_offset(&mut self) {
        let max_scroll = self.model.len().saturating_sub(self.max_visible_items);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// Run a paint pass.
    ///
    /// The summary is refreshed (picking up checked flags changed outside
    /// the control) and requested from the renderer once; then, while open,
    /// each visible row is requested once.
    pub fn paint<R: ItemRenderer>(&mut self, renderer: &mut R) -> PaintPass<R::Visual> {
        let span = tracing::trace_span!(target: targets::RENDER, span_names::PAINT);
        let _enter = span.enter();

        self.refresh_summary();
        let summary = renderer.render_summary(self.summary.caption(), &self.palette);

        let mut rows = Vec::new();
        if self.is_popup_visible() {
            for row in self.visible_rows() {
                if let Some(item) = self.model.item(row) {
                    let highlighted = self.highlighted_index == Some(row);
                    tracing::trace!(target: targets::RENDER, row, highlighted, "render row");
                    rows.push((row, renderer.render_item(item, row, highlighted, &self.palette)));
                }
            }
        }

        PaintPass { summary, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CellVisual, CheckBoxRenderer};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn combo(texts: &[&str], limit: usize) -> DropdownController {
        let model = MultiSelectModel::new(texts.iter().map(|t| CheckableItem::new(*t)))
            .with_limit(limit);
        DropdownController::new(model)
    }

    #[test]
    fn test_controller_creation() {
        let c = combo(&["A", "B"], 0);
        assert_eq!(c.popup_state(), PopupState::Closed);
        assert!(!c.is_close_suppressed());
        assert_eq!(c.current_index(), None);
        assert_eq!(c.summary_text(), " ");
    }

    #[test]
    fn test_commit_keeps_popup_open_once() {
        let mut c = combo(&["A", "B", "C"], 0);
        c.show_popup();

        assert_eq!(c.commit(1, CommitSource::Mouse), ToggleOutcome::Checked);
        assert!(c.is_popup_visible());
        assert!(!c.is_close_suppressed());

        // The next unrelated close request is honored.
        assert!(c.request_close());
        assert!(!c.is_popup_visible());
    }

    #[test]
    fn test_commit_while_closed_selects_without_toggling() {
        let mut c = combo(&["A", "B"], 0);
        assert_eq!(c.commit(1, CommitSource::Mouse), ToggleOutcome::PopupClosed);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.model().selected_count(), 0);
        assert!(!c.is_popup_visible());
    }

    #[test]
    fn test_toggle_while_closed_is_noop() {
        let mut c = combo(&["A"], 0);
        assert_eq!(c.toggle(0), ToggleOutcome::PopupClosed);
        assert!(!c.model().items()[0].is_selected());
    }

    #[test]
    fn test_limit_rejection_still_keeps_popup_open() {
        let mut c = combo(&["A", "B"], 1);
        c.show_popup();
        c.commit(0, CommitSource::Mouse);

        assert_eq!(c.commit(1, CommitSource::Mouse), ToggleOutcome::LimitReached);
        assert!(c.is_popup_visible());
        assert_eq!(c.current_index(), Some(0));
    }

    #[test]
    fn test_mouse_and_keyboard_commits_are_equivalent() {
        let mut mouse = combo(&["A", "B", "C"], 2);
        let mut keys = combo(&["A", "B", "C"], 2);

        mouse.handle_event(&ComboEvent::DisplayClicked);
        keys.handle_event(&ComboEvent::DisplayClicked);

        for row in [2, 0, 1, 2] {
            mouse.handle_event(&ComboEvent::RowClicked(row));

            keys.handle_event(&ComboEvent::RowHovered(row));
            keys.handle_event(&ComboEvent::KeyPressed(Key::Space));

            assert_eq!(mouse.popup_state(), keys.popup_state());
            assert_eq!(mouse.is_close_suppressed(), keys.is_close_suppressed());
            assert_eq!(mouse.current_index(), keys.current_index());
            assert_eq!(mouse.summary_text(), keys.summary_text());
        }
        assert_eq!(mouse.summary_text(), "A");
    }

    #[test]
    fn test_escape_and_outside_click_close() {
        let mut c = combo(&["A"], 0);
        c.show_popup();
        assert!(c.handle_event(&ComboEvent::KeyPressed(Key::Escape)));
        assert!(!c.is_popup_visible());

        c.show_popup();
        c.handle_event(&ComboEvent::RowClicked(0));
        assert!(c.handle_event(&ComboEvent::ClickedOutside));
        assert!(!c.is_popup_visible());

        assert!(!c.handle_event(&ComboEvent::FocusLost));
        assert!(!c.handle_event(&ComboEvent::RowClicked(0)));
        assert!(!c.handle_event(&ComboEvent::KeyPressed(Key::Other)));
    }

    #[test]
    fn test_space_while_closed_never_opens_or_toggles() {
        let mut c = combo(&["A", "B"], 0);
        assert!(!c.handle_event(&ComboEvent::KeyPressed(Key::Space)));
        assert!(!c.is_popup_visible());

        c.commit(1, CommitSource::Mouse);
        assert!(c.handle_event(&ComboEvent::KeyPressed(Key::Space)));
        assert!(!c.is_popup_visible());
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.model().selected_count(), 0);
        assert_eq!(c.summary_text(), " ");
    }

    #[test]
    fn test_empty_control_does_not_open() {
        let mut c = combo(&[], 0);
        c.handle_event(&ComboEvent::DisplayClicked);
        assert!(!c.is_popup_visible());
    }

    #[test]
    fn test_signals_emitted() {
        let mut c = combo(&["A", "B"], 0);
        let toggles = Arc::new(AtomicUsize::new(0));
        let visibility = Arc::new(AtomicUsize::new(0));
        let captions = Arc::new(Mutex::new(Vec::new()));

        let t = toggles.clone();
        c.item_toggled.connect(move |_| {
            t.fetch_add(1, Ordering::SeqCst);
        });
        let v = visibility.clone();
        c.popup_visibility_changed.connect(move |_| {
            v.fetch_add(1, Ordering::SeqCst);
        });
        let cap = captions.clone();
        c.summary_changed
            .connect(move |s| cap.lock().unwrap().push(s.clone()));

        c.show_popup();
        c.commit(1, CommitSource::Mouse);
        c.commit(0, CommitSource::Keyboard);
        c.request_close();

        assert_eq!(toggles.load(Ordering::SeqCst), 2);
        assert_eq!(visibility.load(Ordering::SeqCst), 2);
        assert_eq!(*captions.lock().unwrap(), vec!["B", "A, B"]);
    }

    #[test]
    fn test_paint_requests_summary_and_visible_rows() {
        let mut c = combo(&["A", "B", "C", "D"], 0).with_max_visible_items(2);
        let mut renderer = CheckBoxRenderer::new();

        let closed = c.paint(&mut renderer);
        assert!(closed.rows.is_empty());
        assert_eq!(closed.summary.text(), " ");

        c.show_popup();
        c.set_highlighted_index(Some(3));
        assert_eq!(c.visible_rows(), 2..4);

        c.commit(3, CommitSource::Keyboard);
        let open = c.paint(&mut renderer);
        assert_eq!(open.summary.text(), "D");
        let rows: Vec<usize> = open.rows.iter().map(|(r, _)| *r).collect();
        assert_eq!(rows, vec![2, 3]);
        match &open.rows[1].1 {
            CellVisual::CheckBox(v) => assert!(v.checked),
            CellVisual::Label(_) => panic!("expected a checkbox"),
        }
    }

    #[test]
    fn test_paint_picks_up_external_changes() {
        let mut c = combo(&["A", "B"], 0);
        c.model().items()[1].set_selected(true);

        let pass = c.paint(&mut CheckBoxRenderer::new());
        assert_eq!(pass.summary.text(), "B");
        assert_eq!(c.model().selected_count(), 1);
    }

    #[test]
    fn test_remove_item_adjusts_rows() {
        let mut c = combo(&["A", "B", "C"], 0);
        c.show_popup();
        c.commit(2, CommitSource::Mouse);
        assert_eq!(c.current_index(), Some(2));

        c.remove_item(0);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.current_item().map(|i| i.text()), Some("C"));

        c.remove_item(1);
        assert_eq!(c.current_index(), None);
        assert_eq!(c.summary_text(), " ");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_commit_out_of_range_panics() {
        let mut c = combo(&["A"], 0);
        c.show_popup();
        c.commit(5, CommitSource::Mouse);
    }
}
