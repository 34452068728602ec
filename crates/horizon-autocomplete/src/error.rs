//! Error types for the autocomplete controller.

use std::path::PathBuf;

use crate::dom::ElementId;

/// Result type alias for autocomplete operations.
pub type Result<T> = std::result::Result<T, AutocompleteError>;

/// Errors reported by the autocomplete controller.
///
/// Event handling never returns these. They come out of construction and
/// configuration loading, and reach applications through the
/// [`lookup_failed`](crate::Autocomplete::lookup_failed) signal.
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    /// `build` was called without a lookup strategy.
    #[error("no lookup strategy configured")]
    MissingLookup,

    /// An element handed to the controller is not in the document.
    #[error("element {0:?} is not in the document")]
    UnknownElement(ElementId),

    /// The transport could not start or complete a request.
    #[error("transport error: {0}")]
    Transport(String),

    /// Network error from the HTTP transport.
    #[cfg(feature = "networking")]
    #[error("network error: {0}")]
    Network(#[from] horizon_autocomplete_net::NetworkError),

    /// The lookup endpoint answered with a status other than 200.
    #[error("lookup endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// The response body could not be decoded.
    #[error("failed to parse lookup response: {0}")]
    Parse(String),

    /// Invalid configuration value or document.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file has an extension no loader handles.
    #[error("unsupported configuration format '{0}'")]
    UnsupportedFormat(String),
}

impl AutocompleteError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for AutocompleteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::de::Error> for AutocompleteError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AutocompleteError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}
