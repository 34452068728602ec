//! The shared HTTP client.

use std::sync::Arc;
use std::time::Duration;

use horizon_autocomplete_core::logging::targets;
use reqwest::redirect::Policy;

use super::request::HttpRequestBuilder;
use crate::error::{NetworkError, Result};

/// Media type sent in the `Accept` header unless configured otherwise.
pub const DEFAULT_ACCEPT: &str = "application/json";

/// How the client talks to lookup endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout. `None` defers to the transport.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub connect_timeout: Option<Duration>,
    /// Redirect hops to follow; `0` fails on the first redirect.
    pub max_redirects: usize,
    /// `User-Agent` header.
    pub user_agent: Option<String>,
    /// `Accept` header.
    pub accept: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Some(Duration::from_secs(10)),
            max_redirects: 10,
            user_agent: Some(format!(
                "HorizonAutocomplete/{} (Rust)",
                env!("CARGO_PKG_VERSION")
            )),
            accept: Some(DEFAULT_ACCEPT.to_string()),
        }
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    config: HttpClientConfig,
    headers: http::HeaderMap,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
            headers: http::HeaderMap::new(),
        }
    }

    /// Give up on any lookup that takes longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Follow at most `max` redirects. `0` disables redirects.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the `Accept` header, e.g. for endpoints that answer with
    /// plain text.
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.config.accept = Some(media_type.into());
        self
    }

    /// Send a header with every lookup, such as an API key.
    pub fn default_header<N, V>(mut self, name: N, value: V) -> Result<Self>
    where
        N: TryInto<http::HeaderName>,
        N::Error: Into<NetworkError>,
        V: TryInto<http::HeaderValue>,
        V::Error: Into<NetworkError>,
    {
        let name: http::HeaderName = name.try_into().map_err(|e| -> NetworkError { e.into() })?;
        let value: http::HeaderValue = value.try_into().map_err(|e| -> NetworkError { e.into() })?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient> {
        let Self {
            config,
            mut headers,
        } = self;

        if let Some(accept) = &config.accept {
            headers.insert(http::header::ACCEPT, http::HeaderValue::try_from(accept.as_str())?);
        }

        let redirects = match config.max_redirects {
            0 => Policy::none(),
            max => Policy::limited(max),
        };
        let mut builder = reqwest::Client::builder()
            .redirect(redirects)
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(HttpClient {
            inner: Arc::new(ClientInner {
                client: builder.build()?,
                config,
            }),
        })
    }
}

struct ClientInner {
    client: reqwest::Client,
    config: HttpClientConfig,
}

/// An HTTP client for lookup requests.
///
/// Clones share one connection pool, so a page with several autocompletes
/// can hand each of them a clone.
///
/// ```ignore
/// use horizon_autocomplete_net::http::HttpClient;
///
/// let client = HttpClient::new();
/// let response = client
///     .get("https://api.example.com/places")
///     .query("q", "lon")
///     .send()
///     .await?;
/// println!("{}", response.status());
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<ClientInner>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// A client with the default configuration.
    ///
    /// Falls back to a bare `reqwest` client if the configured one cannot be
    /// built.
    pub fn new() -> Self {
        HttpClientBuilder::new().build().unwrap_or_else(|err| {
            tracing::warn!(
                target: targets::HTTP,
                error = %err,
                "failed to build configured HTTP client, using defaults"
            );
            Self {
                inner: Arc::new(ClientInner {
                    client: reqwest::Client::new(),
                    config: HttpClientConfig::default(),
                }),
            }
        })
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Start a GET of `url`.
    pub fn get(&self, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(self.clone(), url.into())
    }

    pub(crate) fn reqwest_client(&self) -> &reqwest::Client {
        &self.inner.client
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
