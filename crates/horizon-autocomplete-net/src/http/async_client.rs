//! Async HTTP client with callback and signal based completion.
//!
//! GUI code cannot await. [`AsyncHttpClient`] starts a request on the tokio
//! runtime and returns a cancellable [`RequestHandle`] immediately; the result
//! is handed to a completion callback and announced on
//! [`AsyncHttpClient::request_finished`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_autocomplete_core::Signal;
use horizon_autocomplete_core::logging::targets;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use super::client::HttpClient;
use super::request::HttpRequestBuilder;
use crate::error::NetworkError;

/// Unique identifier for an async request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Status of a completed request (clonable for signals).
#[derive(Clone, Debug)]
pub enum RequestStatus {
    /// Request completed with the given HTTP status code.
    Success {
        /// The request ID.
        id: RequestId,
        /// HTTP status code.
        status_code: u16,
        /// Content length if known.
        content_length: Option<u64>,
    },
    /// Request failed with an error.
    Error {
        /// The request ID.
        id: RequestId,
        /// Error message.
        message: String,
    },
    /// Request was cancelled.
    Cancelled {
        /// The request ID.
        id: RequestId,
    },
}

impl RequestStatus {
    /// Get the request ID.
    pub fn id(&self) -> RequestId {
        match self {
            Self::Success { id, .. } => *id,
            Self::Error { id, .. } => *id,
            Self::Cancelled { id } => *id,
        }
    }

    /// Check if the request completed with a response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check if the request was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// What a completion callback receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A response arrived. Any status code lands here, not only 2xx.
    Completed {
        /// HTTP status code.
        status: u16,
        /// The response body decoded as text.
        body: String,
    },
    /// The transport failed before a full response was read.
    Failed(NetworkError),
    /// [`RequestHandle::cancel`] won the race against the response.
    Cancelled,
}

/// A handle to a pending HTTP request that can be cancelled.
///
/// Dropping the handle does not cancel the request.
pub struct RequestHandle {
    /// The unique ID of this request.
    pub id: RequestId,
    cancel_tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl RequestHandle {
    /// Cancel the pending request.
    ///
    /// Returns `true` if the cancellation signal was sent, `false` if the
    /// request has already completed or was already cancelled.
    pub fn cancel(&self) -> bool {
        if let Some(tx) = self.cancel_tx.lock().take() {
            tx.send(()).is_ok()
        } else {
            false
        }
    }

    /// Check if the request is still pending.
    pub fn is_pending(&self) -> bool {
        self.cancel_tx.lock().is_some()
    }
}

impl Clone for RequestHandle {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            cancel_tx: self.cancel_tx.clone(),
        }
    }
}

impl std::fmt::Debug for RequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandle")
            .field("id", &self.id)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// An HTTP client that runs requests in the background.
///
/// # Example
///
/// ```ignore
/// use horizon_autocomplete_net::http::{AsyncHttpClient, RequestOutcome};
///
/// let client = AsyncHttpClient::new();
/// let handle = client.get_async("https://api.example.com/places?q=lon", |outcome| {
///     if let RequestOutcome::Completed { status, body } = outcome {
///         println!("{status}: {body}");
///     }
/// })?;
///
/// // A newer keystroke arrived; this response is no longer wanted.
/// handle.cancel();
/// ```
#[derive(Clone)]
pub struct AsyncHttpClient {
    client: HttpClient,
    /// Signal emitted when a request completes (success, error, or cancelled).
    ///
    /// Emitted from a runtime worker thread.
    pub request_finished: Arc<Signal<RequestStatus>>,
}

impl Default for AsyncHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncHttpClient {
    /// Create a new async HTTP client with default configuration.
    pub fn new() -> Self {
        Self::from_client(HttpClient::new())
    }

    /// Create from an existing HTTP client.
    pub fn from_client(client: HttpClient) -> Self {
        Self {
            client,
            request_finished: Arc::new(Signal::new()),
        }
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Start an async GET request.
    ///
    /// `on_complete` runs exactly once, on a runtime worker thread.
    pub fn get_async<F>(&self, url: impl AsRef<str>, on_complete: F) -> crate::Result<RequestHandle>
    where
        F: FnOnce(RequestOutcome) + Send + 'static,
    {
        self.send_async(self.client.get(url.as_ref()), on_complete)
    }

    /// Send a request builder asynchronously.
    ///
    /// Fails only if no async runtime could be obtained.
    pub fn send_async<F>(
        &self,
        builder: HttpRequestBuilder,
        on_complete: F,
    ) -> crate::Result<RequestHandle>
    where
        F: FnOnce(RequestOutcome) + Send + 'static,
    {
        let request_id = RequestId::new();
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let handle = RequestHandle {
            id: request_id,
            cancel_tx: Arc::new(Mutex::new(Some(cancel_tx))),
        };

        let signal = self.request_finished.clone();
        let handle_clone = handle.clone();

        runtime::spawn(async move {
            let read = async {
                let response = builder.send().await?;
                let status = response.status();
                let content_length = response.content_length();
                let body = response.text().await?;
                Ok::<_, NetworkError>((status, content_length, body))
            };

            tokio::select! {
                result = read => {
                    handle_clone.cancel_tx.lock().take();

                    let (status, outcome) = match result {
                        Ok((status_code, content_length, body)) => (
                            RequestStatus::Success {
                                id: request_id,
                                status_code,
                                content_length,
                            },
                            RequestOutcome::Completed { status: status_code, body },
                        ),
                        Err(err) => (
                            RequestStatus::Error {
                                id: request_id,
                                message: err.to_string(),
                            },
                            RequestOutcome::Failed(err),
                        ),
                    };
                    tracing::debug!(
                        target: targets::HTTP,
                        id = request_id.as_u64(),
                        ?status,
                        "request finished"
                    );
                    on_complete(outcome);
                    signal.emit(status);
                }
                _ = cancel_rx => {
                    tracing::debug!(
                        target: targets::HTTP,
                        id = request_id.as_u64(),
                        "request cancelled"
                    );
                    on_complete(RequestOutcome::Cancelled);
                    signal.emit(RequestStatus::Cancelled { id: request_id });
                }
            }
        })?;

        Ok(handle)
    }
}

impl std::fmt::Debug for AsyncHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncHttpClient")
            .field("client", &self.client)
            .finish()
    }
}

/// Runtime management for async operations.
///
/// Requests run on the tokio runtime of the calling context when there is
/// one, and on a lazily created global runtime otherwise.
pub mod runtime {
    use std::future::Future;
    use std::sync::OnceLock;

    use tokio::runtime::{Handle, Runtime};

    use crate::error::{NetworkError, Result};

    static RUNTIME: OnceLock<Runtime> = OnceLock::new();

    /// Initialize the global async runtime.
    ///
    /// Call this early if you want creation failures reported up front;
    /// otherwise the runtime is created on first use.
    pub fn init() -> Result<&'static Runtime> {
        if let Some(runtime) = RUNTIME.get() {
            return Ok(runtime);
        }
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("horizon-autocomplete-net")
            .enable_all()
            .build()
            .map_err(|err| NetworkError::Runtime(err.to_string()))?;
        Ok(RUNTIME.get_or_init(|| runtime))
    }

    /// A handle to the runtime requests are spawned on.
    pub fn handle() -> Result<Handle> {
        match Handle::try_current() {
            Ok(handle) => Ok(handle),
            Err(_) => Ok(init()?.handle().clone()),
        }
    }

    /// Spawn a future on the current or global runtime.
    pub fn spawn<F>(future: F) -> Result<tokio::task::JoinHandle<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        Ok(handle()?.spawn(future))
    }
}
