//! HTTP client for autocomplete lookups.
//!
//! This module provides a small HTTP client with async support and
//! callback plus signal based completion notification.
//!
//! # Example
//!
//! ```ignore
//! use horizon_autocomplete_net::http::HttpClient;
//!
//! let client = HttpClient::new();
//! let response = client
//!     .get("https://api.example.com/places")
//!     .query("q", "lon")
//!     .send()
//!     .await?;
//! println!("Status: {}", response.status());
//! println!("Body: {}", response.text().await?);
//! ```
//!
//! # Async with Callbacks
//!
//! Event-loop code uses `AsyncHttpClient`, which returns a cancellable handle
//! right away:
//!
//! ```ignore
//! use horizon_autocomplete_net::http::{AsyncHttpClient, RequestStatus};
//!
//! let client = AsyncHttpClient::new();
//!
//! client.request_finished.connect(|status| {
//!     if let RequestStatus::Success { status_code, .. } = status {
//!         println!("finished with {status_code}");
//!     }
//! });
//!
//! let handle = client.get_async("https://api.example.com/places?q=lon", |_outcome| {})?;
//! ```

mod async_client;
mod client;
mod query;
mod request;
mod response;

pub use async_client::{
    AsyncHttpClient, RequestHandle, RequestId, RequestOutcome, RequestStatus, runtime,
};
pub use client::{DEFAULT_ACCEPT, HttpClient, HttpClientBuilder, HttpClientConfig};
pub use query::{encode_query, url_with_query};
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::HttpResponse;
