//! Error types for lookup requests.

use std::fmt;

/// Why a lookup request produced no usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request could not be built or sent.
    Request(String),
    /// The URL did not parse.
    InvalidUrl(String),
    /// A header name or value is not valid HTTP.
    InvalidHeader(String),
    /// No response within the configured timeout.
    Timeout,
    /// The server could not be reached.
    Connection(String),
    /// The redirect limit was hit.
    TooManyRedirects,
    /// The body could not be read or decoded.
    InvalidBody(String),
    /// The server answered with a non-2xx status.
    HttpStatus {
        status: u16,
        /// Reason phrase, when known.
        message: Option<String>,
    },
    /// No async runtime was available to run the request on.
    Runtime(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "request failed: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            Self::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            Self::Timeout => f.write_str("request timed out"),
            Self::Connection(msg) => write!(f, "connection failed: {msg}"),
            Self::TooManyRedirects => f.write_str("too many redirects"),
            Self::InvalidBody(msg) => write!(f, "unreadable response body: {msg}"),
            Self::HttpStatus {
                status,
                message: Some(msg),
            } => write!(f, "HTTP {status}: {msg}"),
            Self::HttpStatus { status, .. } => write!(f, "HTTP {status}"),
            Self::Runtime(msg) => write!(f, "async runtime unavailable: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        let msg = err.to_string();
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(msg)
        } else if err.is_redirect() {
            Self::TooManyRedirects
        } else if err.is_body() || err.is_decode() {
            Self::InvalidBody(msg)
        } else if err.is_builder() {
            Self::InvalidUrl(msg)
        } else {
            Self::Request(msg)
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for NetworkError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for NetworkError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, NetworkError>;
