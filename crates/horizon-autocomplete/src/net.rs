//! HTTP transport for remote lookups.

use horizon_autocomplete_core::logging::targets;
use horizon_autocomplete_net::http::{AsyncHttpClient, HttpClient, RequestHandle, RequestOutcome};

use crate::error::Result;
use crate::lookup::{InFlight, Transport};
use crate::request::Responder;

/// A [`Transport`] backed by [`AsyncHttpClient`].
///
/// Requests run on the ambient tokio runtime, or on the net crate's global
/// runtime when called outside one.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: AsyncHttpClient,
}

impl HttpTransport {
    /// A transport with the default client configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport over a configured client.
    ///
    /// ```ignore
    /// use std::time::Duration;
    /// use horizon_autocomplete::net::HttpTransport;
    /// use horizon_autocomplete_net::http::HttpClient;
    ///
    /// let client = HttpClient::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .default_header("Accept", "application/json")?
    ///     .build()?;
    /// let transport = HttpTransport::with_client(client);
    /// ```
    pub fn with_client(client: HttpClient) -> Self {
        Self {
            client: AsyncHttpClient::from_client(client),
        }
    }

    /// The underlying async client, e.g. to connect to its signals.
    pub fn client(&self) -> &AsyncHttpClient {
        &self.client
    }
}

impl Transport for HttpTransport {
    fn get(&mut self, url: &str, responder: Responder) -> Result<Box<dyn InFlight>> {
        let generation = responder.generation();
        let handle = self.client.get_async(url, move |outcome| match outcome {
            RequestOutcome::Completed { status, body } => responder.respond(status, body),
            RequestOutcome::Failed(err) => responder.fail(err),
            RequestOutcome::Cancelled => {
                tracing::trace!(
                    target: targets::REQUEST,
                    generation = generation.get(),
                    "transport request cancelled"
                );
            }
        })?;
        Ok(Box::new(HttpInFlight(handle)))
    }
}

struct HttpInFlight(RequestHandle);

impl InFlight for HttpInFlight {
    fn cancel(&mut self) {
        self.0.cancel();
    }

    fn is_pending(&self) -> bool {
        self.0.is_pending()
    }
}
