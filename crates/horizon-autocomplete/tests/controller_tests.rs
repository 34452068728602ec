//! Integration tests for the autocomplete controller.
//!
//! Every test runs against the in-memory document with a manual clock, so
//! debounce timing is exact and no network is involved. Remote lookups go
//! through a recording transport whose requests the test answers by hand, in
//! any order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use horizon_autocomplete::dom::{
    Document, DomEvent, ElementId, EventKind, EventResponse, Key, MemoryDocument,
};
use horizon_autocomplete::geometry::Rect;
use horizon_autocomplete::{
    Autocomplete, AutocompleteConfig, AutocompleteError, Candidate, InFlight, LookupStrategy,
    RemoteLookup, Responder, ResultParser, Transport,
};
use horizon_autocomplete_core::ManualClock;
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

/// One request seen by [`RecordingTransport`].
struct Recorded {
    url: String,
    responder: Option<Responder>,
    cancelled: Rc<Cell<bool>>,
}

/// A transport that records requests and lets the test answer them.
#[derive(Clone, Default)]
struct RecordingTransport {
    requests: Rc<RefCell<Vec<Recorded>>>,
}

impl RecordingTransport {
    fn count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn url(&self, index: usize) -> String {
        self.requests.borrow()[index].url.clone()
    }

    fn was_cancelled(&self, index: usize) -> bool {
        self.requests.borrow()[index].cancelled.get()
    }

    fn respond(&self, index: usize, status: u16, body: &str) {
        let responder = self.requests.borrow_mut()[index]
            .responder
            .take()
            .expect("request already answered");
        responder.respond(status, body);
    }

    fn fail(&self, index: usize, message: &str) {
        let responder = self.requests.borrow_mut()[index]
            .responder
            .take()
            .expect("request already answered");
        responder.fail(AutocompleteError::transport(message));
    }
}

struct RecordedInFlight(Rc<Cell<bool>>);

impl InFlight for RecordedInFlight {
    fn cancel(&mut self) {
        self.0.set(true);
    }

    fn is_pending(&self) -> bool {
        !self.0.get()
    }
}

impl Transport for RecordingTransport {
    fn get(
        &mut self,
        url: &str,
        responder: Responder,
    ) -> horizon_autocomplete::Result<Box<dyn InFlight>> {
        let cancelled = Rc::new(Cell::new(false));
        self.requests.borrow_mut().push(Recorded {
            url: url.to_string(),
            responder: Some(responder),
            cancelled: cancelled.clone(),
        });
        Ok(Box::new(RecordedInFlight(cancelled)))
    }
}

struct OfflineTransport;

impl Transport for OfflineTransport {
    fn get(
        &mut self,
        _url: &str,
        _responder: Responder,
    ) -> horizon_autocomplete::Result<Box<dyn InFlight>> {
        Err(AutocompleteError::transport("offline"))
    }
}

struct Harness {
    doc: MemoryDocument,
    input: ElementId,
    clock: ManualClock,
    transport: RecordingTransport,
    ac: Autocomplete<MemoryDocument>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(AutocompleteConfig::default())
    }

    fn with_config(config: AutocompleteConfig) -> Self {
        let doc = MemoryDocument::new();
        let input = doc.create_input(Rect::new(20.0, 100.0, 300.0, 30.0));
        let clock = ManualClock::new();
        let transport = RecordingTransport::default();
        let ac = Autocomplete::builder(doc.clone(), input)
            .config(config)
            .clock(Arc::new(clock.clone()))
            .remote(|q| format!("/cities?q={q}"), transport.clone())
            .build()
            .unwrap();
        Self {
            doc,
            input,
            clock,
            transport,
            ac,
        }
    }

    fn focus(&mut self) -> EventResponse {
        let event = self.doc.focus(self.input);
        self.ac.handle_event(&event)
    }

    fn type_text(&mut self, text: &str) {
        let event = self.doc.type_text(self.input, text);
        self.ac.handle_event(&event);
    }

    fn key(&mut self, key: Key) -> EventResponse {
        self.ac.handle_event(&DomEvent::key(key))
    }

    fn wait_debounce(&mut self) -> usize {
        self.clock.advance(Duration::from_millis(300));
        self.ac.poll()
    }

    /// Type `text`, let the debounce fire and answer the request with `body`.
    fn search(&mut self, text: &str, body: &str) {
        self.type_text(text);
        self.wait_debounce();
        let last = self.transport.count() - 1;
        self.transport.respond(last, 200, body);
        self.ac.poll();
    }

    fn rows(&self) -> Vec<ElementId> {
        let container = self.ac.rows_container().expect("overlay not created");
        self.doc.find_by_class(container, "ac-row")
    }
}

const CITIES: &str = r#"[
    {"title": "London", "subtitle": "United Kingdom"},
    {"title": "Londrina", "subtitle": "Brazil"},
    {"title": "Long Beach"}
]"#;

const ANDROID_UA: &str =
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";

fn counter<T: 'static>(signal: &horizon_autocomplete_core::Signal<T>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    signal.connect(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    count
}

// ============================================================================
// Mount / unmount
// ============================================================================

#[test]
fn test_focus_mounts() {
    let mut h = Harness::new();
    assert!(!h.ac.is_mounted());
    assert_eq!(h.doc.listener_count(), 1);

    assert!(h.focus().is_handled());
    assert!(h.ac.is_mounted());

    let overlay = h.ac.overlay().unwrap();
    assert_eq!(h.doc.parent(overlay), Some(h.doc.body()));
    assert_eq!(h.doc.style(overlay, "display").as_deref(), Some("block"));
    assert_eq!(h.doc.style(overlay, "top").as_deref(), Some("130px"));
    assert!(h.doc.has_listener(EventKind::KeyDown));
    assert!(h.doc.has_listener(EventKind::Input));
    assert!(h.doc.has_listener(EventKind::Click));
    assert!(h.doc.has_listener(EventKind::Resize));
}

#[test]
fn test_mount_unmount_idempotent() {
    let mut h = Harness::new();

    h.ac.mount();
    let listeners = h.doc.listener_count();
    let overlay = h.ac.overlay();
    h.ac.mount();
    h.focus();
    assert_eq!(h.doc.listener_count(), listeners);
    assert_eq!(h.ac.overlay(), overlay);

    h.ac.unmount();
    h.ac.unmount();
    assert!(!h.ac.is_mounted());
    assert_eq!(h.doc.listener_count(), 1);
    assert_eq!(
        h.doc.style(overlay.unwrap(), "display").as_deref(),
        Some("none")
    );
}

#[test]
fn test_unmount_releases_listeners_and_blurs() {
    let mut h = Harness::new();
    h.focus();
    assert_eq!(h.doc.focused(), Some(h.input));

    h.ac.unmount();
    assert_eq!(h.doc.focused(), None);
    assert!(!h.doc.has_listener(EventKind::KeyDown));
    assert!(!h.doc.has_listener(EventKind::Click));
    assert!(h.doc.has_listener(EventKind::Focus));

    assert_eq!(h.key(Key::ArrowDown), EventResponse::Ignored);
}

#[test]
fn test_deactivate_detaches_completely() {
    let mut h = Harness::new();
    h.focus();
    let overlay = h.ac.overlay().unwrap();

    h.ac.deactivate();
    assert_eq!(h.doc.listener_count(), 0);
    assert!(!h.doc.contains(overlay));
    assert_eq!(h.focus(), EventResponse::Ignored);
    assert!(!h.ac.is_mounted());
}

#[test]
fn test_controllers_keep_separate_listeners() {
    let doc = MemoryDocument::new();
    let first = doc.create_input(Rect::new(0.0, 0.0, 100.0, 20.0));
    let second = doc.create_input(Rect::new(0.0, 50.0, 100.0, 20.0));

    let mut a = Autocomplete::builder(doc.clone(), first)
        .lookup(LookupStrategy::custom(|_| {}))
        .build()
        .unwrap();
    let mut b = Autocomplete::builder(doc.clone(), second)
        .lookup(LookupStrategy::custom(|_| {}))
        .build()
        .unwrap();

    a.mount();
    b.mount();
    let both = doc.listener_count();

    a.deactivate();
    assert!(b.is_mounted());
    assert!(doc.listener_count() < both);
    assert!(doc.has_listener(EventKind::KeyDown));

    drop(b);
    assert_eq!(doc.listener_count(), 0);
}

/// Two mounted controllers on one page, each showing a single result.
struct TwoWidgets {
    doc: MemoryDocument,
    first: ElementId,
    second: ElementId,
    a: Autocomplete<MemoryDocument>,
    b: Autocomplete<MemoryDocument>,
}

impl TwoWidgets {
    fn new() -> Self {
        let doc = MemoryDocument::new();
        let first = doc.create_input(Rect::new(0.0, 0.0, 200.0, 20.0));
        let second = doc.create_input(Rect::new(0.0, 80.0, 200.0, 20.0));

        let mut a = Autocomplete::builder(doc.clone(), first)
            .lookup(LookupStrategy::custom(|_| {}))
            .build()
            .unwrap();
        let mut b = Autocomplete::builder(doc.clone(), second)
            .lookup(LookupStrategy::custom(|_| {}))
            .build()
            .unwrap();

        // Focus moves from A to B without a click, so both stay mounted.
        a.handle_event(&doc.focus(first));
        let focus_b = doc.focus(second);
        assert_eq!(a.handle_event(&focus_b), EventResponse::Ignored);
        b.handle_event(&focus_b);

        a.set_results(vec![Candidate::new().with("title", "Apple")]);
        b.set_results(vec![Candidate::new().with("title", "Banana")]);
        assert!(a.is_mounted() && b.is_mounted());

        Self {
            doc,
            first,
            second,
            a,
            b,
        }
    }

    fn rows(&self, ac: &Autocomplete<MemoryDocument>) -> Vec<ElementId> {
        self.doc.find_by_class(ac.rows_container().unwrap(), "ac-row")
    }
}

#[test]
fn test_click_on_other_widgets_row_selects_only_there() {
    let mut w = TwoWidgets::new();
    let a_picks = counter(&w.a.selected);
    let b_picks = Arc::new(Mutex::new(Vec::new()));
    let sink = b_picks.clone();
    w.b.selected.connect(move |selected| {
        sink.lock().unwrap().push(selected.candidate.text("title"));
    });

    let b_row = w.rows(&w.b)[0];
    let click = DomEvent::click(b_row);
    w.a.handle_event(&click);
    w.b.handle_event(&click);

    assert_eq!(a_picks.load(Ordering::SeqCst), 0);
    assert_eq!(w.doc.value(w.first), "");
    assert!(!w.a.is_mounted());

    assert_eq!(*b_picks.lock().unwrap(), vec![Some("Banana".to_string())]);
    assert_eq!(w.doc.value(w.second), "Banana");
}

#[test]
fn test_click_on_own_row_leaves_other_widget_dismissed_only() {
    let mut w = TwoWidgets::new();
    let b_picks = counter(&w.b.selected);

    let a_row = w.rows(&w.a)[0];
    let click = DomEvent::click(a_row);
    w.a.handle_event(&click);
    w.b.handle_event(&click);

    assert_eq!(w.doc.value(w.first), "Apple");
    assert_eq!(b_picks.load(Ordering::SeqCst), 0);
    assert_eq!(w.doc.value(w.second), "");
    assert!(!w.b.is_mounted());
}

#[test]
fn test_keys_and_input_stay_with_their_widget() {
    let mut w = TwoWidgets::new();
    let a_picks = counter(&w.a.selected);
    let b_moves = counter(&w.b.highlighted);

    w.a.handle_event(&DomEvent::key(Key::ArrowDown));
    assert_eq!(w.a.selected_index(), Some(0));
    assert_eq!(w.b.selected_index(), None);
    assert_eq!(b_moves.load(Ordering::SeqCst), 0);

    let typed = w.doc.type_text(w.second, "ban");
    assert_eq!(w.a.handle_event(&typed), EventResponse::Ignored);
    assert_eq!(w.a.value(), "");
    assert!(!w.a.has_pending_lookup());
    w.b.handle_event(&typed);
    assert_eq!(w.b.value(), "ban");

    w.a.handle_event(&DomEvent::key(Key::Enter));
    assert_eq!(a_picks.load(Ordering::SeqCst), 1);
    assert_eq!(w.doc.value(w.first), "Apple");
    assert_eq!(w.doc.value(w.second), "ban");
    assert!(w.b.is_mounted());
}

// ============================================================================
// Debounce and requests
// ============================================================================

#[test]
fn test_keystrokes_coalesce_into_one_lookup() {
    let mut h = Harness::new();
    h.focus();

    h.type_text("a");
    h.clock.advance(Duration::from_millis(100));
    h.ac.poll();
    h.type_text("ab");
    h.clock.advance(Duration::from_millis(100));
    h.ac.poll();
    h.type_text("abc");
    assert!(h.ac.has_pending_lookup());
    h.clock.advance(Duration::from_millis(299));
    assert_eq!(h.ac.poll(), 0);
    assert_eq!(h.transport.count(), 0);

    h.clock.advance(Duration::from_millis(1));
    assert_eq!(h.ac.poll(), 1);
    assert_eq!(h.transport.count(), 1);
    assert_eq!(h.transport.url(0), "/cities?q=abc");
    assert!(!h.ac.has_pending_lookup());
}

#[test]
fn test_time_until_next_tracks_debounce() {
    let mut h = Harness::with_config(AutocompleteConfig::default().with_debounce_ms(150));
    h.focus();
    assert_eq!(h.ac.time_until_next(), None);

    h.type_text("p");
    assert_eq!(h.ac.time_until_next(), Some(Duration::from_millis(150)));
    h.clock.advance(Duration::from_millis(100));
    assert_eq!(h.ac.time_until_next(), Some(Duration::from_millis(50)));
}

#[test]
fn test_results_render_with_highlight() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    assert_eq!(h.ac.results().len(), 3);
    let rows = h.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(h.doc.attribute(rows[2], "data-index").as_deref(), Some("2"));

    let matches = h.doc.find_by_class(rows[0], "ac-match");
    assert_eq!(matches.len(), 1);
    assert_eq!(h.doc.text_content(matches[0]), "Lon");

    let secondary = h.doc.find_by_class(rows[0], "ac-secondary");
    assert_eq!(h.doc.text_content(secondary[0]), "United Kingdom");
    assert!(h.doc.find_by_class(rows[2], "ac-secondary").is_empty());
}

#[test]
fn test_stale_response_is_dropped() {
    let mut h = Harness::new();
    h.focus();

    h.type_text("lo");
    h.wait_debounce();
    h.type_text("lon");
    h.wait_debounce();
    assert_eq!(h.transport.count(), 2);
    assert!(h.transport.was_cancelled(0));

    let renders = counter(&h.ac.rendered);

    h.transport.respond(1, 200, r#"[{"title": "London"}]"#);
    h.transport.respond(0, 200, r#"[{"title": "Lome"}, {"title": "Lorca"}]"#);
    h.ac.poll();

    assert_eq!(renders.load(Ordering::SeqCst), 1);
    assert_eq!(h.ac.results().len(), 1);
    assert_eq!(h.ac.results()[0].text("title").as_deref(), Some("London"));
}

#[test]
fn test_late_response_after_unmount_is_dropped() {
    let mut h = Harness::new();
    h.focus();
    h.type_text("par");
    h.wait_debounce();

    h.ac.unmount();
    assert!(h.transport.was_cancelled(0));

    h.transport.respond(0, 200, CITIES);
    h.ac.poll();
    assert!(h.ac.results().is_empty());
}

#[test]
fn test_unmount_cancels_pending_debounce() {
    let mut h = Harness::new();
    h.focus();
    h.type_text("par");
    h.key(Key::Escape);

    h.wait_debounce();
    assert_eq!(h.transport.count(), 0);
}

#[test]
fn test_non_200_keeps_results() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    let failures = Arc::new(Mutex::new(Vec::new()));
    let f = failures.clone();
    h.ac.lookup_failed.connect(move |failure| {
        f.lock().unwrap().push((failure.query.clone(), failure.error.to_string()));
    });

    h.type_text("lond");
    h.wait_debounce();
    h.transport.respond(1, 503, "unavailable");
    h.ac.poll();

    assert_eq!(h.ac.results().len(), 3);
    assert_eq!(h.rows().len(), 3);
    let failures = failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "lond");
    assert!(failures[0].1.contains("503"));
}

#[test]
fn test_transport_failure_keeps_results() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let failures = counter(&h.ac.lookup_failed);

    h.type_text("lond");
    h.wait_debounce();
    h.transport.fail(1, "connection reset");
    h.ac.poll();

    assert_eq!(h.ac.results().len(), 3);
    assert_eq!(failures.load(Ordering::SeqCst), 1);
}

#[test]
fn test_parse_failure_clears_results() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let failures = counter(&h.ac.lookup_failed);

    h.search("lond", "<html>oops</html>");
    assert!(h.ac.results().is_empty());
    assert!(h.rows().is_empty());
    assert_eq!(failures.load(Ordering::SeqCst), 1);
}

#[test]
fn test_null_body_is_empty() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    h.search("lonx", "null");
    assert!(h.ac.results().is_empty());
}

#[test]
fn test_custom_parser() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let clock = ManualClock::new();
    let transport = RecordingTransport::default();
    let lookup = RemoteLookup::new(|q| format!("/plain?q={q}"), transport.clone()).with_parser(
        ResultParser::from_fn(|body| {
            Ok(body
                .split(',')
                .map(|name| Candidate::new().with("title", name.trim()))
                .collect())
        }),
    );
    let mut ac = Autocomplete::builder(doc.clone(), input)
        .clock(Arc::new(clock.clone()))
        .lookup(lookup)
        .build()
        .unwrap();

    ac.handle_event(&doc.focus(input));
    ac.handle_event(&doc.type_text(input, "ly"));
    clock.advance(Duration::from_millis(300));
    ac.poll();
    transport.respond(0, 200, "Lyon, Lyngby");
    ac.poll();

    assert_eq!(ac.results().len(), 2);
    assert_eq!(ac.results()[1].text("title").as_deref(), Some("Lyngby"));
}

#[test]
fn test_dispatch_error_is_reported() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let mut ac = Autocomplete::builder(doc.clone(), input)
        .remote(|q| q.to_string(), OfflineTransport)
        .build()
        .unwrap();
    let failures = counter(&ac.lookup_failed);

    ac.mount();
    ac.set_value("x");
    ac.lookup_now();
    assert_eq!(failures.load(Ordering::SeqCst), 1);
    assert!(ac.results().is_empty());
}

#[test]
fn test_min_length_suppresses_remote_lookup() {
    let mut h = Harness::with_config(AutocompleteConfig::default().with_min_length(3));
    h.focus();
    h.search("lon", CITIES);
    assert_eq!(h.transport.count(), 1);

    h.type_text("lo");
    h.wait_debounce();
    assert_eq!(h.transport.count(), 1);
    assert!(h.ac.results().is_empty());
}

#[test]
fn test_min_length_counts_characters() {
    let mut h = Harness::with_config(AutocompleteConfig::default().with_min_length(2));
    h.focus();
    h.type_text("é");
    h.wait_debounce();
    assert_eq!(h.transport.count(), 0);
}

#[test]
fn test_custom_lookup_ignores_min_length() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let clock = ManualClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();

    let mut ac = Autocomplete::builder(doc.clone(), input)
        .config(AutocompleteConfig::default().with_min_length(5))
        .clock(Arc::new(clock.clone()))
        .lookup(LookupStrategy::custom(move |request| {
            s.borrow_mut().push(request.query.clone());
            request
                .responder
                .resolve(vec![Candidate::new().with("title", request.query.to_uppercase())]);
        }))
        .build()
        .unwrap();

    ac.handle_event(&doc.focus(input));
    ac.handle_event(&doc.type_text(input, ""));
    clock.advance(Duration::from_millis(300));
    ac.poll();

    assert_eq!(*seen.borrow(), vec![String::new()]);
    assert_eq!(ac.results().len(), 1);
}

#[test]
fn test_custom_lookup_answers_from_another_thread() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let workers = Rc::new(RefCell::new(Vec::new()));
    let w = workers.clone();

    let mut ac = Autocomplete::builder(doc.clone(), input)
        .lookup(LookupStrategy::custom(move |request| {
            w.borrow_mut().push(std::thread::spawn(move || {
                let rows = vec![Candidate::new().with("title", format!("{} Road", request.query))];
                request.responder.resolve(rows);
            }));
        }))
        .build()
        .unwrap();

    ac.mount();
    ac.set_value("Abbey");
    ac.lookup_now();
    for worker in workers.borrow_mut().drain(..) {
        worker.join().unwrap();
    }
    ac.poll();

    assert_eq!(ac.results()[0].text("title").as_deref(), Some("Abbey Road"));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_arrow_keys_move_selection() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    let highlighted = Arc::new(Mutex::new(Vec::new()));
    let hl = highlighted.clone();
    h.ac.highlighted.connect(move |i| hl.lock().unwrap().push(*i));

    assert_eq!(h.key(Key::ArrowDown), EventResponse::PreventDefault);
    assert_eq!(h.ac.selected_index(), Some(0));
    let rows = h.rows();
    assert!(h.doc.classes(rows[0]).contains(&"ac-selected".to_string()));

    h.key(Key::ArrowUp);
    assert_eq!(h.ac.selected_index(), Some(2));
    h.key(Key::ArrowDown);
    assert_eq!(h.ac.selected_index(), Some(0));

    assert_eq!(*highlighted.lock().unwrap(), vec![0, 2, 0]);
}

#[test]
fn test_arrow_keys_with_no_results() {
    let mut h = Harness::new();
    h.focus();
    assert_eq!(h.key(Key::ArrowDown), EventResponse::Ignored);
    assert_eq!(h.ac.selected_index(), None);
}

#[test]
fn test_new_results_clear_selection() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    h.key(Key::ArrowDown);
    h.search("lond", CITIES);
    assert_eq!(h.ac.selected_index(), None);
}

#[test]
fn test_enter_selects() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    let picks = Arc::new(Mutex::new(Vec::new()));
    let p = picks.clone();
    h.ac.selected.connect(move |s| {
        p.lock()
            .unwrap()
            .push((s.index, s.candidate.text("title"), s.event.clone()));
    });

    h.key(Key::ArrowDown);
    h.key(Key::ArrowDown);
    assert_eq!(h.key(Key::Enter), EventResponse::PreventDefault);

    let picks = picks.lock().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].0, 1);
    assert_eq!(picks[0].1.as_deref(), Some("Londrina"));
    assert_eq!(picks[0].2, DomEvent::key(Key::Enter));
    assert_eq!(h.doc.value(h.input), "Londrina");
    assert!(!h.ac.is_mounted());
}

#[test]
fn test_enter_without_selection_is_ignored() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let picks = counter(&h.ac.selected);

    assert_eq!(h.key(Key::Enter), EventResponse::Ignored);
    assert_eq!(picks.load(Ordering::SeqCst), 0);
    assert!(h.ac.is_mounted());
}

#[test]
fn test_escape_dismisses_without_selecting() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let picks = counter(&h.ac.selected);

    h.key(Key::ArrowDown);
    assert!(h.key(Key::Escape).is_handled());
    assert!(!h.ac.is_mounted());
    assert_eq!(picks.load(Ordering::SeqCst), 0);
    assert_eq!(h.doc.value(h.input), "lon");
    assert_eq!(h.ac.selected_index(), None);
}

#[test]
fn test_complete_mode_previews_into_input() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    h.key(Key::ArrowDown);
    assert!(h.key(Key::ArrowRight).is_handled());
    assert_eq!(h.doc.value(h.input), "London");

    h.key(Key::ArrowDown);
    assert_eq!(h.doc.value(h.input), "Londrina");
    assert_eq!(h.ac.value(), "lon");

    let matches = h.doc.find_by_class(h.rows()[1], "ac-match");
    assert_eq!(h.doc.text_content(matches[0]), "Lon");
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_click_on_row_descendant_selects() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let picks = counter(&h.ac.selected);

    let row = h.rows()[2];
    let inner = h.doc.find_by_class(row, "ac-match")[0];
    assert!(h.ac.handle_event(&DomEvent::click(inner)).is_handled());

    assert_eq!(picks.load(Ordering::SeqCst), 1);
    assert_eq!(h.doc.value(h.input), "Long Beach");
    assert!(!h.ac.is_mounted());
}

#[test]
fn test_click_on_input_is_dead_zone() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);

    assert_eq!(h.ac.handle_event(&DomEvent::click(h.input)), EventResponse::Ignored);
    let overlay = h.ac.overlay().unwrap();
    assert_eq!(h.ac.handle_event(&DomEvent::click(overlay)), EventResponse::Ignored);
    assert!(h.ac.is_mounted());
}

#[test]
fn test_click_outside_dismisses() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let picks = counter(&h.ac.selected);

    let elsewhere = h.doc.create_div(None);
    assert!(h.ac.handle_event(&DomEvent::click(elsewhere)).is_handled());
    assert!(!h.ac.is_mounted());
    assert_eq!(picks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_click_without_target_dismisses() {
    let mut h = Harness::new();
    h.focus();
    h.ac.handle_event(&DomEvent::Pointer {
        kind: EventKind::Click,
        target: None,
    });
    assert!(!h.ac.is_mounted());
}

#[test]
fn test_malformed_row_index_dismisses() {
    let mut h = Harness::new();
    h.focus();
    h.search("lon", CITIES);
    let picks = counter(&h.ac.selected);

    let row = h.rows()[0];
    let mut doc = h.doc.clone();
    doc.set_attribute(row, "data-index", "first");

    h.ac.handle_event(&DomEvent::click(row));
    assert!(!h.ac.is_mounted());
    assert_eq!(picks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_mobile_listens_for_touch_end() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let mut ac = Autocomplete::builder(doc.clone(), input)
        .lookup(LookupStrategy::custom(|_| {}))
        .user_agent(ANDROID_UA)
        .build()
        .unwrap();
    assert_eq!(ac.pointer_event(), EventKind::TouchEnd);

    ac.mount();
    assert!(doc.has_listener(EventKind::TouchEnd));
    assert!(!doc.has_listener(EventKind::Click));

    let elsewhere = doc.create_div(None);
    assert_eq!(ac.handle_event(&DomEvent::click(elsewhere)), EventResponse::Ignored);
    assert!(ac.is_mounted());
    assert!(ac.handle_event(&DomEvent::touch_end(elsewhere)).is_handled());
    assert!(!ac.is_mounted());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_custom_fields() {
    let mut h = Harness::with_config(AutocompleteConfig::default().with_fields("name", "country"));
    h.focus();
    h.search("par", r#"[{"name": "Paris", "country": "France"}]"#);

    let rows = h.rows();
    let secondary = h.doc.find_by_class(rows[0], "ac-secondary");
    assert_eq!(h.doc.text_content(secondary[0]), "France");

    h.key(Key::ArrowDown);
    h.key(Key::Enter);
    assert_eq!(h.doc.value(h.input), "Paris");
}

#[test]
fn test_custom_row_renderer() {
    let doc = MemoryDocument::new();
    let input = doc.create_input(Rect::ZERO);
    let mut ac = Autocomplete::builder(doc.clone(), input)
        .lookup(LookupStrategy::custom(|_| {}))
        .row_renderer(|c| {
            horizon_autocomplete::dom::Node::element("span")
                .class("flag")
                .child(horizon_autocomplete::dom::Node::text(
                    c.text("code").unwrap_or_default(),
                ))
        })
        .build()
        .unwrap();

    ac.mount();
    ac.set_results(vec![Candidate::new().with("code", "FR").with("title", "France")]);

    let rows = doc.find_by_class(ac.rows_container().unwrap(), "ac-row");
    assert_eq!(rows.len(), 1);
    assert_eq!(doc.tag(rows[0]).as_deref(), Some("span"));
    assert_eq!(doc.text_content(rows[0]), "FR");

    ac.handle_event(&DomEvent::click(rows[0]));
    assert_eq!(doc.value(input), "France");
}

#[test]
fn test_render_is_batched() {
    let mut h = Harness::new();
    h.focus();
    let before = h.doc.batch_update_count();
    h.search("lon", CITIES);
    assert_eq!(h.doc.batch_update_count(), before + 1);
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Nav {
    Up,
    Down,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Up), Just(Nav::Down)]
}

proptest! {
    #[test]
    fn prop_selection_wraps_within_results(
        count in 1usize..12,
        moves in prop::collection::vec(nav(), 1..40),
    ) {
        let doc = MemoryDocument::new();
        let input = doc.create_input(Rect::ZERO);
        let mut ac = Autocomplete::builder(doc, input)
            .lookup(LookupStrategy::custom(|_| {}))
            .build()
            .unwrap();
        ac.mount();
        ac.set_results(
            (0..count)
                .map(|i| Candidate::new().with("title", format!("row {i}")))
                .collect(),
        );

        let mut expected: Option<usize> = None;
        for step in moves {
            let key = match step {
                Nav::Up => {
                    expected = Some(match expected {
                        None | Some(0) => count - 1,
                        Some(i) => i - 1,
                    });
                    Key::ArrowUp
                }
                Nav::Down => {
                    expected = Some(match expected {
                        None => 0,
                        Some(i) => (i + 1) % count,
                    });
                    Key::ArrowDown
                }
            };
            ac.handle_event(&DomEvent::key(key));
            let index = ac.selected_index();
            prop_assert_eq!(index, expected);
            prop_assert!(index.is_some_and(|i| i < count));
        }
    }
}
