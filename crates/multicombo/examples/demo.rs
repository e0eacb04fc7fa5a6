//! Multicombo console demo
//!
//! Drives a dropdown with a scripted sequence of input events and prints the
//! visuals each paint pass produces. Set `RUST_LOG=multicombo=debug` to see
//! popup and toggle events.
//!
//! Run with: cargo run -p multicombo --example demo [config.toml]

use multicombo::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_pass(label: &str, pass: &multicombo::PaintPass<CellVisual>) {
    println!("== {label}");
    println!("   [{}]", pass.summary.text());
    for (row, visual) in &pass.rows {
        if let CellVisual::CheckBox(v) = visual {
            let mark = if v.checked { 'x' } else { ' ' };
            println!("   {row}: [{mark}] {:<10} bg {}", v.text, v.background.to_hex());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ComboConfig::load(path)?,
        None => ComboConfig {
            limit: 2,
            ..ComboConfig::default()
        },
    };

    let items = ["Espresso", "Americano", "Latte", "Mocha"].map(CheckableItem::new);
    let mut combo = DropdownController::from_config(items, &config)?;

    combo.selection_changed.connect(|count| {
        println!("   -> {count} selected");
    });
    combo.popup_visibility_changed.connect(|open| {
        println!("   -> popup {}", if *open { "opened" } else { "closed" });
    });

    let mut renderer = CheckBoxRenderer::new();
    print_pass("initial", &combo.paint(&mut renderer));

    let script = [
        ComboEvent::DisplayClicked,
        ComboEvent::RowClicked(2),
        ComboEvent::RowClicked(0),
        ComboEvent::RowClicked(3),
        ComboEvent::RowHovered(1),
        ComboEvent::KeyPressed(Key::Space),
        ComboEvent::RowClicked(2),
        ComboEvent::KeyPressed(Key::Space),
        ComboEvent::ClickedOutside,
    ];

    for event in &script {
        combo.handle_event(event);
        print_pass(&format!("{event:?}"), &combo.paint(&mut renderer));
    }

    let selected: Vec<String> = combo
        .all_selected_items()
        .iter()
        .map(|item| item.text().to_string())
        .collect();
    println!("selected: {selected:?}");

    Ok(())
}
