//! Lookup request tracking.
//!
//! Every lookup is stamped with a [`Generation`] when it is dispatched. The
//! collaborator answers through the [`Responder`] it was handed, which sends
//! the answer, stamp included, back to the controller over a channel. When the
//! controller drains that channel, any answer whose stamp is not the current
//! generation is dropped, so a slow response can never overwrite the results
//! of a newer query.

use std::fmt;

use crossbeam_channel::{Receiver, Sender};
use horizon_autocomplete_core::logging::targets;

use crate::candidate::Candidate;
use crate::error::AutocompleteError;
use crate::lookup::InFlight;

/// Monotonic lookup counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) enum Payload {
    /// Raw transport response, to be run through the result parser.
    Response { status: u16, body: String },
    /// Transport failure.
    Failed(AutocompleteError),
    /// Ready-made results from a custom lookup.
    Results(Vec<Candidate>),
}

#[derive(Debug)]
pub(crate) struct Delivery {
    pub(crate) generation: Generation,
    pub(crate) payload: Payload,
}

/// The reply channel for one lookup.
///
/// Each method consumes the responder, so a lookup is answered at most once.
/// Dropping it without answering leaves the current results in place.
/// Responders are `Send` and may be answered from any thread; the answer is
/// applied on the next [`Autocomplete::poll`](crate::Autocomplete::poll).
pub struct Responder {
    generation: Generation,
    tx: Sender<Delivery>,
}

impl Responder {
    /// The generation this responder answers for.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Deliver a raw HTTP response. Only status 200 replaces the results.
    pub fn respond(self, status: u16, body: impl Into<String>) {
        self.send(Payload::Response {
            status,
            body: body.into(),
        });
    }

    /// Report that the request failed.
    pub fn fail(self, error: impl Into<AutocompleteError>) {
        self.send(Payload::Failed(error.into()));
    }

    /// Deliver finished results, bypassing the result parser.
    pub fn resolve(self, candidates: Vec<Candidate>) {
        self.send(Payload::Results(candidates));
    }

    fn send(self, payload: Payload) {
        // The controller may already be gone.
        let _ = self.tx.send(Delivery {
            generation: self.generation,
            payload,
        });
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("generation", &self.generation)
            .finish()
    }
}

/// Owns the generation counter, the in-flight request and the reply channel.
pub(crate) struct RequestTracker {
    generation: Generation,
    query: String,
    in_flight: Option<Box<dyn InFlight>>,
    tx: Sender<Delivery>,
    rx: Receiver<Delivery>,
}

impl RequestTracker {
    pub(crate) fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            generation: Generation::default(),
            query: String::new(),
            in_flight: None,
            tx,
            rx,
        }
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    /// The query of the current generation.
    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    /// Start a new generation for `query`, superseding whatever came before.
    pub(crate) fn begin(&mut self, query: &str) -> Responder {
        self.invalidate();
        self.query = query.to_string();
        tracing::debug!(
            target: targets::REQUEST,
            generation = self.generation.get(),
            query,
            "lookup dispatched"
        );
        Responder {
            generation: self.generation,
            tx: self.tx.clone(),
        }
    }

    /// Remember the transport handle of the current generation.
    pub(crate) fn track(&mut self, handle: Box<dyn InFlight>) {
        self.in_flight = Some(handle);
    }

    /// Cancel the in-flight request and make every outstanding responder
    /// stale.
    pub(crate) fn invalidate(&mut self) {
        if let Some(mut handle) = self.in_flight.take()
            && handle.is_pending()
        {
            handle.cancel();
            tracing::debug!(
                target: targets::REQUEST,
                generation = self.generation.get(),
                "in-flight request cancelled"
            );
        }
        self.generation = self.generation.next();
    }

    pub(crate) fn has_in_flight(&self) -> bool {
        self.in_flight.as_ref().is_some_and(|h| h.is_pending())
    }

    /// The next delivery for the current generation, discarding stale ones.
    pub(crate) fn next_delivery(&mut self) -> Option<Delivery> {
        while let Ok(delivery) = self.rx.try_recv() {
            if delivery.generation != self.generation {
                tracing::debug!(
                    target: targets::REQUEST,
                    stale = delivery.generation.get(),
                    current = self.generation.get(),
                    "dropping stale lookup response"
                );
                continue;
            }
            self.in_flight = None;
            return Some(delivery);
        }
        None
    }
}

impl fmt::Debug for RequestTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestTracker")
            .field("generation", &self.generation)
            .field("in_flight", &self.has_in_flight())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_deliveries_are_dropped() {
        let mut tracker = RequestTracker::new();

        let first = tracker.begin("a");
        let second = tracker.begin("ab");
        assert!(second.generation() > first.generation());

        second.respond(200, "[]");
        first.respond(200, r#"[{"title":"stale"}]"#);

        let delivery = tracker.next_delivery().unwrap();
        assert_eq!(delivery.generation, tracker.generation());
        assert!(matches!(delivery.payload, Payload::Response { ref body, .. } if body == "[]"));
        assert!(tracker.next_delivery().is_none());
    }

    #[test]
    fn test_invalidate_drops_outstanding() {
        let mut tracker = RequestTracker::new();
        let responder = tracker.begin("lon");
        tracker.invalidate();

        responder.resolve(vec![Candidate::new()]);
        assert!(tracker.next_delivery().is_none());
    }

    #[test]
    fn test_query_follows_generation() {
        let mut tracker = RequestTracker::new();
        let _ = tracker.begin("par");
        assert_eq!(tracker.query(), "par");
    }
}
