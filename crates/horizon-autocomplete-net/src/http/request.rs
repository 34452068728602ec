//! Lookup requests.

use std::time::Duration;

use horizon_autocomplete_core::logging::targets;

use super::client::HttpClient;
use super::query::url_with_query;
use super::response::HttpResponse;
use crate::error::Result;

/// A GET request with its query string resolved.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Full URL, query included.
    pub url: String,
    /// Headers on top of the client defaults.
    pub headers: http::HeaderMap,
    /// Overrides the client timeout.
    pub timeout: Option<Duration>,
}

/// Builds a GET request. Created by [`HttpClient::get`].
pub struct HttpRequestBuilder {
    client: HttpClient,
    url: String,
    headers: http::HeaderMap,
    query: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    pub(crate) fn new(client: HttpClient, url: String) -> Self {
        Self {
            client,
            url,
            headers: http::HeaderMap::new(),
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Add a header. Names or values that are not valid HTTP are skipped.
    pub fn header(
        mut self,
        name: impl TryInto<http::HeaderName>,
        value: impl TryInto<http::HeaderValue>,
    ) -> Self {
        match (name.try_into(), value.try_into()) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::debug!(target: targets::HTTP, "skipping invalid request header"),
        }
        self
    }

    /// Append `key=value` to the query string.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the URL without sending.
    pub fn build(&self) -> Result<HttpRequest> {
        let url = if self.query.is_empty() {
            self.url.clone()
        } else {
            url_with_query(&self.url, self.query.iter().map(|(k, v)| (k, v)))?
        };
        Ok(HttpRequest {
            url,
            headers: self.headers.clone(),
            timeout: self.timeout,
        })
    }

    /// Send the request and wait for the response headers.
    pub async fn send(self) -> Result<HttpResponse> {
        let request = self.build()?;

        let mut pending = self
            .client
            .reqwest_client()
            .get(&request.url)
            .headers(request.headers);
        if let Some(timeout) = request.timeout {
            pending = pending.timeout(timeout);
        }

        tracing::debug!(target: targets::HTTP, url = %request.url, "GET");
        let response = pending.send().await?;
        tracing::trace!(
            target: targets::HTTP,
            url = %request.url,
            status = response.status().as_u16(),
            "response headers received"
        );
        Ok(HttpResponse::new(response))
    }
}
