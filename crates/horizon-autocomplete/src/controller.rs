//! The autocomplete controller.
//!
//! [`Autocomplete`] owns all state for one text input: the typed value, the
//! current results and selection, the overlay element, the debounce timer and
//! the in-flight lookup. The host feeds it events through
//! [`Autocomplete::handle_event`] and calls [`Autocomplete::poll`] to let
//! timers fire and lookup answers land.
//!
//! # Lifecycle
//!
//! ```text
//!            focus                Escape / outside pointer / selection / unmount()
//! Unmounted ───────▶ Mounted ─────────────────────────────────────────────────▶ Unmounted
//! ```
//!
//! Mounting reveals (creating on first use) the overlay, positions it beneath
//! the anchor, subscribes to key, input, pointer and resize events and renders
//! the current results. Unmounting drops those subscriptions, cancels the
//! debounce timer and the in-flight lookup, hides the overlay and blurs the
//! input. Both are idempotent. [`Autocomplete::deactivate`] (also run on drop)
//! additionally drops the focus subscription and removes the overlay.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use horizon_autocomplete::dom::{DomEvent, Key, MemoryDocument};
//! use horizon_autocomplete::geometry::Rect;
//! use horizon_autocomplete::{Autocomplete, Candidate, LookupStrategy};
//! use horizon_autocomplete_core::ManualClock;
//!
//! let doc = MemoryDocument::new();
//! let input = doc.create_input(Rect::new(0.0, 0.0, 200.0, 24.0));
//! let clock = ManualClock::new();
//!
//! let mut ac = Autocomplete::builder(doc.clone(), input)
//!     .clock(Arc::new(clock.clone()))
//!     .lookup(LookupStrategy::custom(|request| {
//!         let rows = vec![Candidate::new().with("title", format!("{} Street", request.query))];
//!         request.responder.resolve(rows);
//!     }))
//!     .build()
//!     .unwrap();
//!
//! ac.selected.connect(|selected| println!("picked {:?}", selected.candidate));
//!
//! ac.handle_event(&doc.focus(input));
//! ac.handle_event(&doc.type_text(input, "Baker"));
//! clock.advance(Duration::from_millis(300));
//! ac.poll();
//! assert_eq!(ac.results().len(), 1);
//!
//! ac.handle_event(&DomEvent::key(Key::ArrowDown));
//! ac.handle_event(&DomEvent::key(Key::Enter));
//! assert!(!ac.is_mounted());
//! ```

use std::sync::Arc;
use std::time::Duration;

use horizon_autocomplete_core::logging::targets;
use horizon_autocomplete_core::{Clock, Signal, SystemClock, TimerId, TimerManager};

use crate::candidate::Candidate;
use crate::config::AutocompleteConfig;
use crate::dom::{Document, DomEvent, ElementId, EventKind, EventResponse, Key, ListenTarget};
use crate::error::{AutocompleteError, Result};
use crate::listeners::ListenerSet;
use crate::lookup::{LookupRequest, LookupStrategy, RemoteLookup, Transport};
use crate::platform;
use crate::render::{INDEX_ATTRIBUTE, RowRenderer, render_rows};
use crate::request::{Generation, Payload, RequestTracker};
use crate::selection::Selection;

/// Emitted when the user picks a candidate.
#[derive(Debug, Clone)]
pub struct Selected {
    /// The chosen candidate.
    pub candidate: Candidate,
    /// Its row index.
    pub index: usize,
    /// The key or pointer event that made the choice.
    pub event: DomEvent,
}

/// Emitted when a lookup fails.
///
/// Failures never change what is displayed, except that an unparseable 200
/// response clears the results.
#[derive(Debug)]
pub struct LookupFailure {
    /// The query that was looked up.
    pub query: String,
    /// The generation of the failed lookup.
    pub generation: Generation,
    /// What went wrong.
    pub error: AutocompleteError,
}

#[derive(Debug, Clone, Copy)]
struct Overlay {
    root: ElementId,
    rows: ElementId,
}

enum PointerHit {
    /// On the input or the overlay chrome, outside any row.
    DeadZone,
    /// On the row at this index.
    Row(usize),
    /// Outside the widget.
    Outside,
}

/// Builder for [`Autocomplete`].
pub struct AutocompleteBuilder<D: Document> {
    document: D,
    input: ElementId,
    anchor: Option<ElementId>,
    config: AutocompleteConfig,
    strategy: Option<LookupStrategy>,
    renderer: RowRenderer,
    clock: Option<Arc<dyn Clock>>,
    pointer: EventKind,
}

impl<D: Document> AutocompleteBuilder<D> {
    fn new(document: D, input: ElementId) -> Self {
        Self {
            document,
            input,
            anchor: None,
            config: AutocompleteConfig::default(),
            strategy: None,
            renderer: RowRenderer::Default,
            clock: None,
            pointer: EventKind::Click,
        }
    }

    /// Position the overlay under `anchor` instead of the input.
    pub fn anchor(mut self, anchor: ElementId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: AutocompleteConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the lookup strategy.
    pub fn lookup(mut self, strategy: impl Into<LookupStrategy>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Use a remote lookup over `transport`.
    pub fn remote<F, T>(self, url_builder: F, transport: T) -> Self
    where
        F: Fn(&str) -> String + 'static,
        T: Transport + 'static,
    {
        self.lookup(RemoteLookup::new(url_builder, transport))
    }

    /// Use a remote lookup over HTTP.
    #[cfg(feature = "networking")]
    pub fn url<F>(self, url_builder: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.lookup(RemoteLookup::http(url_builder))
    }

    /// Replace the built-in row renderer.
    pub fn row_renderer<F>(mut self, render: F) -> Self
    where
        F: Fn(&Candidate) -> crate::dom::Node + 'static,
    {
        self.renderer = RowRenderer::from_fn(render);
        self
    }

    /// Drive timers from `clock` instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Pick the pointer event from the browser's user agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.pointer = platform::pointer_event_for(user_agent);
        self
    }

    /// Set the pointer event that selects rows and dismisses the overlay.
    pub fn pointer_event(mut self, kind: EventKind) -> Self {
        self.pointer = kind;
        self
    }

    /// Build the controller and subscribe to focus on the input.
    pub fn build(self) -> Result<Autocomplete<D>> {
        let strategy = self.strategy.ok_or(AutocompleteError::MissingLookup)?;
        if !self.document.contains(self.input) {
            return Err(AutocompleteError::UnknownElement(self.input));
        }
        let anchor = self.anchor.unwrap_or(self.input);
        if !self.document.contains(anchor) {
            return Err(AutocompleteError::UnknownElement(anchor));
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let value = self.document.value(self.input);

        let mut autocomplete = Autocomplete {
            document: self.document,
            input: self.input,
            anchor,
            overlay: None,
            value,
            results: Vec::new(),
            selection: Selection::none(),
            mounted: false,
            active: true,
            complete_mode: false,
            config: self.config,
            strategy,
            renderer: self.renderer,
            timers: TimerManager::with_clock(clock),
            debounce: None,
            requests: RequestTracker::new(),
            pointer: self.pointer,
            activation: ListenerSet::new(),
            mounted_listeners: ListenerSet::new(),
            selected: Signal::new(),
            highlighted: Signal::new(),
            lookup_failed: Signal::new(),
            rendered: Signal::new(),
        };
        autocomplete.activation.acquire(
            &mut autocomplete.document,
            &[(ListenTarget::Element(autocomplete.input), EventKind::Focus)],
        );
        tracing::debug!(
            target: targets::CONTROLLER,
            input = ?autocomplete.input,
            strategy = ?autocomplete.strategy,
            "autocomplete attached"
        );
        Ok(autocomplete)
    }
}

/// An autocomplete dropdown attached to one text input.
///
/// # Signals
///
/// - `selected`: a candidate was picked with Enter or the pointer
/// - `highlighted`: keyboard navigation moved the selection to a row
/// - `lookup_failed`: a lookup failed; the display is left as it was
/// - `rendered`: the row list was rebuilt, with the new row count
pub struct Autocomplete<D: Document> {
    document: D,
    input: ElementId,
    anchor: ElementId,
    overlay: Option<Overlay>,
    value: String,
    results: Vec<Candidate>,
    selection: Selection,
    mounted: bool,
    active: bool,
    complete_mode: bool,
    config: AutocompleteConfig,
    strategy: LookupStrategy,
    renderer: RowRenderer,
    timers: TimerManager,
    debounce: Option<TimerId>,
    requests: RequestTracker,
    pointer: EventKind,
    activation: ListenerSet,
    mounted_listeners: ListenerSet,

    /// Emitted once per selection, before the overlay is dismissed.
    pub selected: Signal<Selected>,
    /// Emitted with the new index when keyboard navigation moves the
    /// selection.
    pub highlighted: Signal<usize>,
    /// Emitted when a lookup fails.
    pub lookup_failed: Signal<LookupFailure>,
    /// Emitted with the row count after every render.
    pub rendered: Signal<usize>,
}

impl<D: Document> Autocomplete<D> {
    /// Start building a controller for `input`.
    pub fn builder(document: D, input: ElementId) -> AutocompleteBuilder<D> {
        AutocompleteBuilder::new(document, input)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle an event forwarded by the host.
    ///
    /// Events of a kind the controller holds no listener for are ignored.
    pub fn handle_event(&mut self, event: &DomEvent) -> EventResponse {
        if !self.listens_for(event.kind()) {
            return EventResponse::Ignored;
        }

        match event {
            DomEvent::Focus { target } if *target == self.input => {
                self.mount();
                EventResponse::Handled
            }
            DomEvent::Input { target } if *target == self.input => {
                self.on_input();
                EventResponse::Handled
            }
            DomEvent::Focus { .. } | DomEvent::Input { .. } => EventResponse::Ignored,
            DomEvent::KeyDown { key } => self.on_key(key, event),
            DomEvent::Pointer { target, .. } => self.on_pointer(*target, event),
            DomEvent::Resize => {
                self.position_overlay();
                EventResponse::Handled
            }
        }
    }

    fn listens_for(&self, kind: EventKind) -> bool {
        self.activation.listens_for(kind) || self.mounted_listeners.listens_for(kind)
    }

    fn on_input(&mut self) {
        self.value = self.document.value(self.input);
        self.complete_mode = false;
        self.schedule_lookup();
    }

    fn on_key(&mut self, key: &Key, event: &DomEvent) -> EventResponse {
        match key {
            Key::ArrowDown => self.navigate(1),
            Key::ArrowUp => self.navigate(-1),
            Key::ArrowRight => {
                let Some(index) = self.selection.index() else {
                    return EventResponse::Ignored;
                };
                self.preview(index);
                self.complete_mode = true;
                EventResponse::Handled
            }
            Key::Enter => match self.selection.index() {
                Some(index) => {
                    self.commit(index, event.clone());
                    EventResponse::PreventDefault
                }
                None => EventResponse::Ignored,
            },
            Key::Escape => {
                self.unmount();
                EventResponse::Handled
            }
            Key::Other(_) => EventResponse::Ignored,
        }
    }

    fn navigate(&mut self, delta: isize) -> EventResponse {
        let Some(index) = self.selection.step(delta, self.results.len()) else {
            return EventResponse::Ignored;
        };
        if self.complete_mode {
            self.preview(index);
        }
        self.render();
        self.highlighted.emit(index);
        EventResponse::PreventDefault
    }

    /// Write the primary label of row `index` into the input without
    /// committing it.
    fn preview(&mut self, index: usize) {
        if let Some(text) = self.primary_text(index) {
            self.document.set_value(self.input, &text);
        }
    }

    fn primary_text(&self, index: usize) -> Option<String> {
        self.results
            .get(index)
            .and_then(|c| c.text(&self.config.primary_field))
    }

    fn on_pointer(&mut self, target: Option<ElementId>, event: &DomEvent) -> EventResponse {
        match self.locate(target) {
            PointerHit::DeadZone => EventResponse::Ignored,
            PointerHit::Row(index) => {
                self.commit(index, event.clone());
                EventResponse::Handled
            }
            PointerHit::Outside => {
                self.unmount();
                EventResponse::Handled
            }
        }
    }

    /// Walk up from the pointer target to classify the hit.
    ///
    /// A row only counts if the walk then reaches this controller's overlay
    /// root; rows of other overlays on the page are outside hits.
    fn locate(&self, target: Option<ElementId>) -> PointerHit {
        let row_class = self.config.class("row");
        let overlay_root = self.overlay.map(|o| o.root);

        let mut row = None;
        let mut current = target;
        while let Some(id) = current {
            if row.is_none() && self.document.has_class(id, &row_class) {
                row = Some(id);
            }
            if Some(id) == overlay_root {
                return match row {
                    Some(row) => self.row_hit(row),
                    None => PointerHit::DeadZone,
                };
            }
            if id == self.input {
                return PointerHit::DeadZone;
            }
            current = self.document.parent(id);
        }
        PointerHit::Outside
    }

    fn row_hit(&self, row: ElementId) -> PointerHit {
        let index = self
            .document
            .attribute(row, INDEX_ATTRIBUTE)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&i| i < self.results.len());
        match index {
            Some(index) => PointerHit::Row(index),
            None => {
                tracing::debug!(
                    target: targets::CONTROLLER,
                    ?row,
                    "row index missing or out of range"
                );
                PointerHit::Outside
            }
        }
    }

    /// Pick row `index`: fill the input, notify, dismiss.
    fn commit(&mut self, index: usize, event: DomEvent) {
        let Some(candidate) = self.results.get(index).cloned() else {
            return;
        };
        self.selection.set(index, self.results.len());

        if let Some(text) = candidate.text(&self.config.primary_field) {
            self.document.set_value(self.input, &text);
            self.value = text;
        }

        tracing::debug!(target: targets::CONTROLLER, index, "candidate selected");
        self.unmount();
        self.selected.emit(Selected {
            candidate,
            index,
            event,
        });
    }

    // =========================================================================
    // Mount / unmount
    // =========================================================================

    /// Show the overlay and start listening for interaction.
    ///
    /// No-op when already mounted or deactivated.
    pub fn mount(&mut self) {
        if self.mounted || !self.active {
            return;
        }

        let overlay = self.ensure_overlay();
        self.document.set_style(overlay.root, "display", "block");
        self.position_overlay();

        self.mounted_listeners.acquire(
            &mut self.document,
            &[
                (ListenTarget::Document, EventKind::KeyDown),
                (ListenTarget::Element(self.input), EventKind::Input),
                (ListenTarget::Document, self.pointer),
                (ListenTarget::Window, EventKind::Resize),
            ],
        );
        self.mounted = true;
        tracing::debug!(target: targets::CONTROLLER, "mounted");

        self.render();
    }

    /// Hide the overlay, stop listening, cancel pending work and blur the
    /// input.
    ///
    /// No-op when not mounted.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.mounted_listeners.release(&mut self.document);
        self.cancel_pending();
        if let Some(overlay) = self.overlay {
            self.document.set_style(overlay.root, "display", "none");
        }
        self.document.blur(self.input);
        self.mounted = false;
        self.complete_mode = false;
        tracing::debug!(target: targets::CONTROLLER, "unmounted");

        if self.selection.index().is_some() {
            self.selection.reset();
            self.render();
        }
    }

    /// Detach from the input for good: unmount, drop every listener and
    /// remove the overlay element.
    ///
    /// Runs automatically on drop.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.unmount();
        self.cancel_pending();
        self.activation.release(&mut self.document);
        if let Some(overlay) = self.overlay.take() {
            self.document.remove_element(overlay.root);
        }
        self.active = false;
        tracing::debug!(target: targets::CONTROLLER, "deactivated");
    }

    fn ensure_overlay(&mut self) -> Overlay {
        if let Some(overlay) = self.overlay {
            return overlay;
        }

        let root = self.document.create_element("div");
        self.document.set_class(root, &self.config.class("overlay"));
        self.document.set_style(root, "position", "absolute");
        self.document.set_style(root, "display", "none");

        let rows = self.document.create_element("div");
        self.document.set_class(rows, &self.config.class("rows"));
        self.document.append_child(root, rows);

        let body = self.document.body();
        self.document.append_child(body, root);

        let overlay = Overlay { root, rows };
        self.overlay = Some(overlay);
        tracing::trace!(target: targets::RENDER, ?root, "overlay created");
        overlay
    }

    fn position_overlay(&mut self) {
        let Some(overlay) = self.overlay else {
            return;
        };
        let placement = self.document.bounding_rect(self.anchor).below();
        self.document
            .set_style(overlay.root, "top", &format!("{}px", placement.top()));
        self.document
            .set_style(overlay.root, "left", &format!("{}px", placement.left()));
        self.document
            .set_style(overlay.root, "width", &format!("{}px", placement.width()));
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Fire due timers and apply lookup answers.
    ///
    /// Returns the number of lookups started plus answers applied.
    pub fn poll(&mut self) -> usize {
        let mut work = 0;
        for id in self.timers.process_expired() {
            if self.debounce == Some(id) {
                self.debounce = None;
                self.run_lookup();
                work += 1;
            }
        }
        work + self.drain_deliveries()
    }

    /// How long until [`Autocomplete::poll`] has timer work to do.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Look up the current value immediately, skipping the debounce delay.
    pub fn lookup_now(&mut self) {
        self.stop_debounce();
        self.run_lookup();
        self.drain_deliveries();
    }

    fn schedule_lookup(&mut self) {
        self.stop_debounce();
        self.debounce = Some(self.timers.start_one_shot(self.config.debounce()));
    }

    fn stop_debounce(&mut self) {
        if let Some(id) = self.debounce.take() {
            // A fired one-shot is already gone.
            let _ = self.timers.stop(id);
        }
    }

    fn cancel_pending(&mut self) {
        self.stop_debounce();
        self.requests.invalidate();
    }

    fn run_lookup(&mut self) {
        let query = self.value.clone();

        if self.strategy.is_remote() && query.chars().count() < self.config.min_length {
            tracing::debug!(
                target: targets::REQUEST,
                query,
                min_length = self.config.min_length,
                "query below minimum length"
            );
            self.requests.invalidate();
            self.replace_results(Vec::new());
            return;
        }

        let dispatched = match &mut self.strategy {
            LookupStrategy::Custom(lookup) => {
                let responder = self.requests.begin(&query);
                lookup(LookupRequest { query, responder });
                return;
            }
            LookupStrategy::Remote(remote) => {
                let responder = self.requests.begin(&query);
                remote.dispatch(&query, responder)
            }
        };

        match dispatched {
            Ok(handle) => self.requests.track(handle),
            Err(error) => self.report_failure(error),
        }
    }

    fn drain_deliveries(&mut self) -> usize {
        let mut applied = 0;
        while let Some(delivery) = self.requests.next_delivery() {
            applied += 1;
            match delivery.payload {
                Payload::Results(candidates) => self.replace_results(candidates),
                Payload::Failed(error) => self.report_failure(error),
                Payload::Response { status, body } => {
                    let LookupStrategy::Remote(remote) = &self.strategy else {
                        tracing::debug!(
                            target: targets::REQUEST,
                            status,
                            "raw response for a custom lookup ignored"
                        );
                        continue;
                    };
                    match remote.settle(status, &body) {
                        Ok(candidates) => self.replace_results(candidates),
                        Err(error @ AutocompleteError::Parse(_)) => {
                            self.replace_results(Vec::new());
                            self.report_failure(error);
                        }
                        Err(error) => self.report_failure(error),
                    }
                }
            }
        }
        applied
    }

    fn report_failure(&mut self, error: AutocompleteError) {
        let query = self.requests.query().to_string();
        let generation = self.requests.generation();
        tracing::warn!(
            target: targets::REQUEST,
            query,
            generation = generation.get(),
            %error,
            "lookup failed"
        );
        self.lookup_failed.emit(LookupFailure {
            query,
            generation,
            error,
        });
    }

    // =========================================================================
    // Results and rendering
    // =========================================================================

    /// Replace the results, clear the selection and re-render.
    ///
    /// Custom lookups normally answer through their responder; this is for
    /// hosts that manage results themselves.
    pub fn set_results(&mut self, results: Vec<Candidate>) {
        self.replace_results(results);
    }

    fn replace_results(&mut self, results: Vec<Candidate>) {
        tracing::debug!(target: targets::CONTROLLER, count = results.len(), "results replaced");
        self.results = results;
        self.selection.reset();
        self.render();
    }

    /// Rebuild the row list from the current state.
    ///
    /// Calling it repeatedly without a state change produces the same rows.
    pub fn render(&mut self) {
        let Some(overlay) = self.overlay else {
            return;
        };
        let rows = render_rows(
            &self.results,
            self.selection.index(),
            &self.value,
            &self.renderer,
            &self.config,
        );
        self.document.replace_children(overlay.rows, &rows);
        tracing::trace!(target: targets::RENDER, rows = rows.len(), "rendered");
        self.rendered.emit(rows.len());
    }

    // =========================================================================
    // Programmatic input and configuration
    // =========================================================================

    /// Set the input's value as if typed: the lookup is debounced.
    pub fn set_value(&mut self, value: &str) {
        self.document.set_value(self.input, value);
        self.value = value.to_string();
        self.complete_mode = false;
        self.schedule_lookup();
    }

    /// Change the debounce delay. Applies from the next keystroke.
    pub fn set_debounce_ms(&mut self, ms: u64) {
        self.config.debounce_ms = ms;
    }

    /// Change the minimum remote query length.
    pub fn set_min_length(&mut self, len: usize) {
        self.config.min_length = len;
    }

    /// Change the primary and secondary label fields.
    pub fn set_fields(&mut self, primary: impl Into<String>, secondary: impl Into<String>) {
        self.config.primary_field = primary.into();
        self.config.secondary_field = secondary.into();
        self.render();
    }

    /// Change the class prefix. The overlay is rebuilt under the new names.
    pub fn set_class_prefix(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if prefix == self.config.class_prefix {
            return;
        }
        self.config.class_prefix = prefix;
        self.rebuild_overlay();
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: AutocompleteConfig) {
        let prefix_changed = config.class_prefix != self.config.class_prefix;
        self.config = config;
        if prefix_changed {
            self.rebuild_overlay();
        } else {
            self.render();
        }
    }

    fn rebuild_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            self.document.remove_element(overlay.root);
        }
        if self.mounted {
            let overlay = self.ensure_overlay();
            self.document.set_style(overlay.root, "display", "block");
            self.position_overlay();
            self.render();
        }
    }

    /// Replace the row renderer.
    pub fn set_row_renderer(&mut self, renderer: RowRenderer) {
        self.renderer = renderer;
        self.render();
    }

    /// Replace the lookup strategy. Outstanding lookups become stale.
    pub fn set_lookup(&mut self, strategy: impl Into<LookupStrategy>) {
        self.requests.invalidate();
        self.strategy = strategy.into();
    }

    /// Position the overlay under a different element.
    pub fn set_anchor(&mut self, anchor: ElementId) -> Result<()> {
        if !self.document.contains(anchor) {
            return Err(AutocompleteError::UnknownElement(anchor));
        }
        self.anchor = anchor;
        self.position_overlay();
        Ok(())
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The typed value the current results were looked up for.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The displayed candidates.
    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    /// The selected row, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Returns `true` while the overlay is shown.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `false` after [`Autocomplete::deactivate`].
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while navigation previews candidates into the input.
    pub fn is_complete_mode(&self) -> bool {
        self.complete_mode
    }

    /// Returns `true` while a debounced lookup is waiting to fire.
    pub fn has_pending_lookup(&self) -> bool {
        self.debounce.is_some_and(|id| self.timers.is_active(id))
    }

    /// Returns `true` while a remote request is running.
    pub fn has_in_flight_request(&self) -> bool {
        self.requests.has_in_flight()
    }

    /// The current lookup generation.
    pub fn generation(&self) -> Generation {
        self.requests.generation()
    }

    /// The configuration.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// The input element.
    pub fn input(&self) -> ElementId {
        self.input
    }

    /// The anchor element.
    pub fn anchor(&self) -> ElementId {
        self.anchor
    }

    /// The overlay root, once created.
    pub fn overlay(&self) -> Option<ElementId> {
        self.overlay.map(|o| o.root)
    }

    /// The element holding the rows, once created.
    pub fn rows_container(&self) -> Option<ElementId> {
        self.overlay.map(|o| o.rows)
    }

    /// The pointer event used for selection and dismissal.
    pub fn pointer_event(&self) -> EventKind {
        self.pointer
    }

    /// The document.
    pub fn document(&self) -> &D {
        &self.document
    }
}

impl<D: Document> Drop for Autocomplete<D> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<D: Document> std::fmt::Debug for Autocomplete<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("input", &self.input)
            .field("value", &self.value)
            .field("results", &self.results.len())
            .field("selected", &self.selection.index())
            .field("mounted", &self.mounted)
            .field("active", &self.active)
            .field("complete_mode", &self.complete_mode)
            .field("generation", &self.requests.generation())
            .finish()
    }
}
