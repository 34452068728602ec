//! Networking for Horizon Autocomplete.
//!
//! The remote lookup path of the autocomplete controller sends one GET per
//! query and must be able to abandon a request as soon as a newer query
//! supersedes it. This crate provides exactly that:
//!
//! - [`http::HttpClient`]: a configured, cheaply cloneable `reqwest` client
//! - [`http::AsyncHttpClient`]: fire-and-callback requests with a cancellable
//!   [`http::RequestHandle`]
//! - [`http::encode_query`]: form encoding for query strings
//!
//! # Example
//!
//! ```ignore
//! use horizon_autocomplete_net::http::{AsyncHttpClient, RequestOutcome, encode_query};
//!
//! let client = AsyncHttpClient::new();
//! let url = format!("https://api.example.com/places?{}", encode_query([("q", "lon")]));
//!
//! let handle = client.get_async(url, |outcome| match outcome {
//!     RequestOutcome::Completed { status, body } => println!("{status}: {body}"),
//!     RequestOutcome::Failed(err) => eprintln!("lookup failed: {err}"),
//!     RequestOutcome::Cancelled => {}
//! })?;
//! ```

pub mod error;
pub mod http;

pub use error::{NetworkError, Result};
