//! Horizon Autocomplete - a headless autocomplete dropdown controller.
//!
//! [`Autocomplete`] attaches to a text input in a [`Document`](dom::Document)
//! and manages the dropdown beneath it: debounced lookups, stale-response
//! rejection, keyboard and pointer selection, highlighted rendering, and
//! outside-click dismissal. The document is abstracted behind a trait;
//! [`MemoryDocument`](dom::MemoryDocument) is a complete in-memory
//! implementation for tests and headless hosts.
//!
//! # Driving the controller
//!
//! The controller never blocks and owns no threads. The host:
//!
//! 1. forwards DOM events to [`Autocomplete::handle_event`] and honours the
//!    returned [`EventResponse`](dom::EventResponse);
//! 2. calls [`Autocomplete::poll`] from its event loop, at the latest after
//!    [`Autocomplete::time_until_next`].
//!
//! # Example
//!
//! ```no_run
//! use horizon_autocomplete::dom::MemoryDocument;
//! use horizon_autocomplete::geometry::Rect;
//! use horizon_autocomplete::{Autocomplete, encode_query};
//!
//! fn main() -> horizon_autocomplete::Result<()> {
//!     let doc = MemoryDocument::new();
//!     let input = doc.create_input(Rect::new(0.0, 0.0, 320.0, 32.0));
//!
//!     let mut ac = Autocomplete::builder(doc.clone(), input)
//!         .url(|q| format!("https://api.example.com/cities?{}", encode_query([("q", q)])))
//!         .build()?;
//!
//!     ac.selected.connect(|s| println!("selected row {}", s.index));
//!     ac.lookup_failed.connect(|f| eprintln!("lookup {} failed: {}", f.generation, f.error));
//!
//!     ac.handle_event(&doc.focus(input));
//!     ac.handle_event(&doc.type_text(input, "ber"));
//!     loop {
//!         ac.poll();
//!         let idle = ac.time_until_next().unwrap_or(std::time::Duration::from_millis(16));
//!         std::thread::sleep(idle);
//!     }
//! }
//! ```
//!
//! # Features
//!
//! - `networking` (default): the HTTP [`Transport`](net::HttpTransport) and
//!   the [`encode_query`] helper, built on `horizon-autocomplete-net`.

pub mod candidate;
pub mod config;
pub mod dom;
pub mod geometry;
pub mod highlight;
pub mod lookup;
pub mod platform;
pub mod prelude;
pub mod render;
pub mod selection;

mod controller;
mod error;
mod listeners;
mod request;

#[cfg(feature = "networking")]
pub mod net;

pub use candidate::{Candidate, parse_candidates, try_parse_candidates};
pub use config::AutocompleteConfig;
pub use controller::{Autocomplete, AutocompleteBuilder, LookupFailure, Selected};
pub use error::{AutocompleteError, Result};
pub use highlight::{Segment, highlight, highlight_nodes};
pub use lookup::{InFlight, LookupRequest, LookupStrategy, RemoteLookup, ResultParser, Transport};
pub use render::RowRenderer;
pub use request::{Generation, Responder};
pub use selection::Selection;

#[cfg(feature = "networking")]
pub use horizon_autocomplete_net::http::{encode_query, url_with_query};
