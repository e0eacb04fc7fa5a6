//! Toolkit-independent input events.
//!
//! A host toolkit translates its own mouse and keyboard events into
//! [`ComboEvent`]s and forwards them to
//! [`DropdownController::handle_event`](super::DropdownController::handle_event).

/// Keys the control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Commits the highlighted row while open. While closed it commits the
    /// current row with single-select semantics and never opens the popup.
    Space,
    /// Closes the popup.
    Escape,
    /// Any other key; ignored.
    Other,
}

/// Where a commit event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitSource {
    /// A mouse click on a popup row.
    Mouse,
    /// Keyboard activation of the highlighted row.
    Keyboard,
}

/// An input event forwarded by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboEvent {
    /// Click on the closed control's display area or arrow.
    DisplayClicked,
    /// The pointer moved over a popup row.
    RowHovered(usize),
    /// Click on a popup row.
    RowClicked(usize),
    /// A key press while the control has focus.
    KeyPressed(Key),
    /// Click anywhere outside the control and its popup.
    ClickedOutside,
    /// The control lost keyboard focus.
    FocusLost,
}
