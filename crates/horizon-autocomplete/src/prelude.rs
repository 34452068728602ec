//! Prelude module for Horizon Autocomplete.
//!
//! ```
//! use horizon_autocomplete::prelude::*;
//! ```

// ============================================================================
// Controller
// ============================================================================

pub use crate::{Autocomplete, AutocompleteBuilder, LookupFailure, Selected};
pub use crate::{AutocompleteConfig, AutocompleteError, Result};

// ============================================================================
// Lookups and results
// ============================================================================

pub use crate::{Candidate, LookupRequest, LookupStrategy, RemoteLookup, ResultParser};
pub use crate::{InFlight, Responder, Transport};
pub use crate::RowRenderer;

#[cfg(feature = "networking")]
pub use crate::encode_query;
#[cfg(feature = "networking")]
pub use crate::net::HttpTransport;

// ============================================================================
// Document
// ============================================================================

pub use crate::dom::{Document, DomEvent, ElementId, EventKind, EventResponse, Key, Node};
pub use crate::geometry::Rect;

// ============================================================================
// Core
// ============================================================================

pub use horizon_autocomplete_core::{Clock, ManualClock, Signal, SystemClock};
