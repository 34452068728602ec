//! Core systems for Horizon Autocomplete.
//!
//! This crate provides the foundational pieces the autocomplete widget is
//! built from:
//!
//! - **Signal/Slot System**: Type-safe notification of selections and failures
//! - **Timers**: One-shot timers used for input debouncing
//! - **Clocks**: Injectable time sources so timers can be driven by a host
//!   frame clock or by tests
//! - **Logging**: `tracing` target names for every subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_autocomplete_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_autocomplete_core::{ManualClock, TimerManager};
//!
//! let clock = ManualClock::new();
//! let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
//! let id = timers.start_one_shot(Duration::from_millis(300));
//!
//! clock.advance(Duration::from_millis(300));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

mod clock;
mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, Result, TimerError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerManager};

/// Re-exported so hosts and tests share the instant type timers use.
pub use web_time::Instant;
