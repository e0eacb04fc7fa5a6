//! Tests for multi-selection through the dropdown control.

use std::sync::{Arc, Mutex};

use multicombo::prelude::*;

fn open_combo(texts: &[&str], limit: usize) -> DropdownController {
    let model = MultiSelectModel::new(texts.iter().map(|t| CheckableItem::new(*t)))
        .with_limit(limit);
    let mut combo = DropdownController::new(model);
    combo.handle_event(&ComboEvent::DisplayClicked);
    assert!(combo.is_popup_visible());
    combo
}

fn checked_texts(combo: &DropdownController) -> Vec<String> {
    combo
        .all_selected_items()
        .iter()
        .map(|item| item.text().to_string())
        .collect()
}

#[test]
fn test_limit_of_two_walkthrough() {
    let mut combo = open_combo(&["A", "B", "C"], 2);

    combo.handle_event(&ComboEvent::RowClicked(0));
    assert_eq!(checked_texts(&combo), ["A"]);
    assert_eq!(combo.summary_text(), "A");

    combo.handle_event(&ComboEvent::RowClicked(1));
    assert_eq!(checked_texts(&combo), ["A", "B"]);
    assert_eq!(combo.summary_text(), "A, B");

    // At the limit: checking C is silently ignored.
    combo.handle_event(&ComboEvent::RowClicked(2));
    assert_eq!(checked_texts(&combo), ["A", "B"]);
    assert_eq!(combo.summary_text(), "A, B");
    assert_eq!(combo.model().selected_count(), 2);

    combo.handle_event(&ComboEvent::RowClicked(0));
    assert_eq!(checked_texts(&combo), ["B"]);
    assert_eq!(combo.summary_text(), "B");

    combo.handle_event(&ComboEvent::RowClicked(2));
    assert_eq!(checked_texts(&combo), ["B", "C"]);
    assert_eq!(combo.summary_text(), "B, C");

    assert!(combo.is_popup_visible());
}

#[test]
fn test_unlimited_summary_is_sorted() {
    let mut combo = open_combo(&["A", "B", "C"], 0);

    for row in [2, 0, 1] {
        combo.handle_event(&ComboEvent::RowClicked(row));
    }

    assert_eq!(combo.model().selected_count(), 3);
    assert_eq!(combo.summary_text(), "A, B, C");
}

#[test]
fn test_popup_survives_commit_then_closes_on_outside_click() {
    let mut combo = open_combo(&["A", "B"], 0);

    combo.handle_event(&ComboEvent::RowClicked(1));
    assert!(combo.is_popup_visible());
    assert!(!combo.is_close_suppressed());

    assert!(combo.handle_event(&ComboEvent::ClickedOutside));
    assert!(!combo.is_popup_visible());
    assert_eq!(combo.summary_text(), "B");
}

#[test]
fn test_reading_selection_twice_is_stable() {
    let mut combo = open_combo(&["Beta", "Alpha"], 0);
    combo.handle_event(&ComboEvent::RowClicked(0));
    combo.handle_event(&ComboEvent::RowClicked(1));

    let first = combo.all_selected_items();
    let second = combo.all_selected_items();
    assert_eq!(first, second);
    assert_eq!(combo.model().selected_count(), 2);

    // Display order, not caption order.
    assert_eq!(first[0].text(), "Beta");
    assert_eq!(combo.summary_text(), "Alpha, Beta");
}

#[test]
fn test_items_are_shared_with_the_caller() {
    let item = CheckableItem::with_payload("Tokyo", 13_960_000u32);
    let mut combo = DropdownController::new(MultiSelectModel::new([item.clone()]));

    combo.show_popup();
    combo.commit(0, CommitSource::Mouse);

    assert!(item.is_selected());
    assert_eq!(combo.all_selected_items()[0].payload_as::<u32>(), Some(&13_960_000));
}

#[test]
fn test_selection_signal_counts() {
    let mut combo = open_combo(&["A", "B", "C"], 2);
    let counts = Arc::new(Mutex::new(Vec::new()));

    let c = counts.clone();
    combo.selection_changed.connect(move |count| c.lock().unwrap().push(*count));

    for row in [0, 1, 2, 1] {
        combo.handle_event(&ComboEvent::RowClicked(row));
    }

    // The rejected click on row 2 emits nothing.
    assert_eq!(*counts.lock().unwrap(), vec![1, 2, 1]);
}

#[test]
fn test_lowering_limit_keeps_existing_selection() {
    let mut combo = open_combo(&["A", "B", "C"], 0);
    for row in 0..3 {
        combo.handle_event(&ComboEvent::RowClicked(row));
    }

    combo.set_limit(1);
    assert_eq!(combo.model().selected_count(), 3);

    // Un-checking works above the limit, and the caption follows.
    combo.handle_event(&ComboEvent::RowClicked(2));
    assert_eq!(checked_texts(&combo), ["A", "B"]);
    assert_eq!(combo.summary_text(), "A, B");

    let pass = combo.paint(&mut CheckBoxRenderer::new());
    assert_eq!(pass.summary.text(), "A, B");

    combo.handle_event(&ComboEvent::RowClicked(1));
    assert_eq!(checked_texts(&combo), ["A"]);
    assert_eq!(combo.summary_text(), "A");

    // At the limit again, re-checking is blocked.
    combo.handle_event(&ComboEvent::RowClicked(1));
    assert_eq!(checked_texts(&combo), ["A"]);
    assert_eq!(combo.summary_text(), "A");
}

#[test]
fn test_keyboard_navigation_and_commit() {
    let model = MultiSelectModel::from(["A", "B", "C"]);
    let mut combo = DropdownController::new(model);

    // Space on a closed control with no current row does nothing.
    assert!(!combo.handle_event(&ComboEvent::KeyPressed(Key::Space)));
    assert!(!combo.is_popup_visible());

    combo.handle_event(&ComboEvent::DisplayClicked);
    assert_eq!(combo.highlighted_index(), Some(0));

    combo.handle_event(&ComboEvent::KeyPressed(Key::Space));
    combo.handle_event(&ComboEvent::RowHovered(2));
    combo.handle_event(&ComboEvent::KeyPressed(Key::Space));

    assert!(combo.is_popup_visible());
    assert_eq!(combo.summary_text(), "A, C");

    combo.handle_event(&ComboEvent::KeyPressed(Key::Escape));
    assert!(!combo.is_popup_visible());
    assert_eq!(combo.current_index(), Some(2));

    // Closed again: space keeps the popup closed and the selection intact.
    assert!(combo.handle_event(&ComboEvent::KeyPressed(Key::Space)));
    assert!(!combo.is_popup_visible());
    assert_eq!(combo.summary_text(), "A, C");
}
