//! Drives an autocomplete against the in-memory document and prints what a
//! user would see.
//!
//! Run with `RUST_LOG=horizon_autocomplete=debug` to watch the controller's
//! lifecycle logs.

use std::sync::Arc;
use std::time::Duration;

use horizon_autocomplete::dom::{Document, DomEvent, ElementId, Key, MemoryDocument};
use horizon_autocomplete::geometry::Rect;
use horizon_autocomplete::{Autocomplete, Candidate, LookupStrategy};
use horizon_autocomplete_core::ManualClock;
use tracing_subscriber::EnvFilter;

const CITIES: &[(&str, &str)] = &[
    ("Amsterdam", "Netherlands"),
    ("Antwerp", "Belgium"),
    ("Athens", "Greece"),
    ("Barcelona", "Spain"),
    ("Berlin", "Germany"),
    ("Bern", "Switzerland"),
    ("Bratislava", "Slovakia"),
];

fn print_rows(doc: &MemoryDocument, ac: &Autocomplete<MemoryDocument>) {
    let Some(container) = ac.rows_container() else {
        return;
    };
    for (i, row) in doc.find_by_class(container, "ac-row").into_iter().enumerate() {
        let marker = if ac.selected_index() == Some(i) { '>' } else { ' ' };
        println!("  {marker} {}", describe(doc, row));
    }
}

fn describe(doc: &MemoryDocument, row: ElementId) -> String {
    let primary = doc
        .find_by_class(row, "ac-primary")
        .first()
        .map(|&id| doc.text_content(id))
        .unwrap_or_default();
    match doc.find_by_class(row, "ac-secondary").first() {
        Some(&id) => format!("{primary} ({})", doc.text_content(id)),
        None => primary,
    }
}

fn main() -> horizon_autocomplete::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::new(40.0, 40.0, 320.0, 32.0));
    let clock = ManualClock::new();

    let mut ac = Autocomplete::builder(doc.clone(), input)
        .clock(Arc::new(clock.clone()))
        .lookup(LookupStrategy::custom(|request| {
            let query = request.query.to_lowercase();
            let matches = CITIES
                .iter()
                .filter(|(city, _)| !query.is_empty() && city.to_lowercase().contains(&query))
                .map(|(city, country)| {
                    Candidate::new()
                        .with("title", *city)
                        .with("subtitle", *country)
                })
                .collect();
            request.responder.resolve(matches);
        }))
        .build()?;

    ac.selected.connect(|selected| {
        println!(
            "selected #{}: {}",
            selected.index,
            selected.candidate.text("title").unwrap_or_default()
        );
    });

    ac.handle_event(&doc.focus(input));
    for prefix in ["b", "be", "ber"] {
        ac.handle_event(&doc.type_text(input, prefix));
        clock.advance(Duration::from_millis(120));
        ac.poll();
    }
    clock.advance(ac.time_until_next().unwrap_or_default());
    ac.poll();

    println!("results for {:?}:", ac.value());
    print_rows(&doc, &ac);

    ac.handle_event(&DomEvent::key(Key::ArrowDown));
    ac.handle_event(&DomEvent::key(Key::ArrowDown));
    print_rows(&doc, &ac);

    ac.handle_event(&DomEvent::key(Key::Enter));
    println!("input now reads {:?}", doc.value(input));
    Ok(())
}
