//! Lookup strategies.
//!
//! A controller resolves queries one of two ways, fixed when it is built:
//!
//! - [`LookupStrategy::Remote`]: build a URL from the query, GET it through a
//!   [`Transport`], and parse the body with a [`ResultParser`].
//! - [`LookupStrategy::Custom`]: hand the query to a caller-supplied function,
//!   which answers through the [`Responder`] in the [`LookupRequest`].

use std::fmt;

use crate::candidate::{Candidate, try_parse_candidates};
use crate::error::{AutocompleteError, Result};
use crate::request::Responder;

/// A request that is still running and can be abandoned.
pub trait InFlight {
    /// Abandon the request. Its responder may still fire; the answer will be
    /// stale and dropped.
    fn cancel(&mut self);

    /// Returns `true` until the request finishes or is cancelled.
    fn is_pending(&self) -> bool;
}

/// Issues the GET for a remote lookup.
///
/// Implementations start the request and return immediately. When the
/// request settles they answer through `responder`: [`Responder::respond`]
/// with the status and body of any HTTP response, [`Responder::fail`] if no
/// response arrived.
pub trait Transport {
    /// Start a GET of `url`.
    fn get(&mut self, url: &str, responder: Responder) -> Result<Box<dyn InFlight>>;
}

/// Turns a response body into candidates.
pub enum ResultParser {
    /// Decode a JSON array of objects. Failure is reported and yields no
    /// results.
    Json,
    /// A caller-supplied parser. An error is reported like a JSON decoding
    /// failure.
    Custom(Box<dyn Fn(&str) -> Result<Vec<Candidate>>>),
}

impl ResultParser {
    /// Wrap a parsing function.
    pub fn from_fn<F>(parser: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<Candidate>> + 'static,
    {
        Self::Custom(Box::new(parser))
    }

    /// Parse a body.
    pub fn parse(&self, body: &str) -> Result<Vec<Candidate>> {
        match self {
            Self::Json => try_parse_candidates(body),
            Self::Custom(parser) => parser(body),
        }
    }
}

impl Default for ResultParser {
    fn default() -> Self {
        Self::Json
    }
}

impl fmt::Debug for ResultParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("Json"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// URL building, transport and parsing for remote lookups.
pub struct RemoteLookup {
    url_builder: Box<dyn Fn(&str) -> String>,
    parser: ResultParser,
    transport: Box<dyn Transport>,
}

impl RemoteLookup {
    /// A remote lookup over `transport` with the JSON parser.
    pub fn new<F, T>(url_builder: F, transport: T) -> Self
    where
        F: Fn(&str) -> String + 'static,
        T: Transport + 'static,
    {
        Self {
            url_builder: Box::new(url_builder),
            parser: ResultParser::Json,
            transport: Box::new(transport),
        }
    }

    /// A remote lookup over HTTP.
    ///
    /// ```ignore
    /// use horizon_autocomplete::{RemoteLookup, encode_query};
    ///
    /// let lookup = RemoteLookup::http(|q| {
    ///     format!("https://api.example.com/places?{}", encode_query([("q", q)]))
    /// });
    /// ```
    #[cfg(feature = "networking")]
    pub fn http<F>(url_builder: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        Self::new(url_builder, crate::net::HttpTransport::new())
    }

    /// Replace the result parser.
    pub fn with_parser(mut self, parser: ResultParser) -> Self {
        self.parser = parser;
        self
    }

    /// The URL for `query`.
    pub fn url(&self, query: &str) -> String {
        (self.url_builder)(query)
    }

    /// Start a request for `query`.
    pub(crate) fn dispatch(
        &mut self,
        query: &str,
        responder: Responder,
    ) -> Result<Box<dyn InFlight>> {
        let url = self.url(query);
        self.transport.get(&url, responder)
    }

    /// Turn a settled response into results.
    pub(crate) fn settle(&self, status: u16, body: &str) -> Result<Vec<Candidate>> {
        if status != 200 {
            return Err(AutocompleteError::HttpStatus { status });
        }
        self.parser.parse(body)
    }
}

impl fmt::Debug for RemoteLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteLookup")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

/// What a custom lookup function receives.
#[derive(Debug)]
pub struct LookupRequest {
    /// The current input value.
    pub query: String,
    /// Where to send the results.
    pub responder: Responder,
}

/// How a controller resolves queries.
pub enum LookupStrategy {
    /// Fetch from a remote endpoint.
    Remote(RemoteLookup),
    /// Call a function on every debounced input change, regardless of the
    /// minimum length.
    Custom(Box<dyn FnMut(LookupRequest)>),
}

impl LookupStrategy {
    /// A custom lookup.
    ///
    /// ```
    /// use horizon_autocomplete::{Candidate, LookupStrategy};
    ///
    /// let cities = ["Lisbon", "London", "Lyon"];
    /// let strategy = LookupStrategy::custom(move |request| {
    ///     let query = request.query.to_lowercase();
    ///     let matches = cities
    ///         .iter()
    ///         .filter(|c| c.to_lowercase().starts_with(&query))
    ///         .map(|c| Candidate::new().with("title", *c))
    ///         .collect();
    ///     request.responder.resolve(matches);
    /// });
    /// # let _ = strategy;
    /// ```
    pub fn custom<F>(lookup: F) -> Self
    where
        F: FnMut(LookupRequest) + 'static,
    {
        Self::Custom(Box::new(lookup))
    }

    /// Returns `true` for the remote strategy.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl From<RemoteLookup> for LookupStrategy {
    fn from(remote: RemoteLookup) -> Self {
        Self::Remote(remote)
    }
}

impl fmt::Debug for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(remote) => f.debug_tuple("Remote").field(remote).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
