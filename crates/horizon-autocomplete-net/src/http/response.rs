//! Lookup responses.

use serde::de::DeserializeOwned;

use crate::error::{NetworkError, Result};

/// A response whose headers have arrived. The body is read on demand.
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// A header as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// The declared body length, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Read the body as text.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Read and decode a JSON body.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(self.inner.json().await?)
    }

    /// Turn a non-2xx status into [`NetworkError::HttpStatus`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let status = self.inner.status();
        Err(NetworkError::HttpStatus {
            status: status.as_u16(),
            message: status.canonical_reason().map(str::to_string),
        })
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status())
            .field("content_length", &self.content_length())
            .finish()
    }
}
