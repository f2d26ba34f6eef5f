//! Shared handler state.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::traits::ProductSource;

/// State handed to every request handler.
///
/// Immutable once built; clones share the same product source.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn ProductSource>,
    request_timeout: Option<Duration>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state around a product source.
    pub fn new(source: impl ProductSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create state around a source that is already shared.
    pub fn from_shared(source: Arc<dyn ProductSource>) -> Self {
        Self {
            source,
            request_timeout: None,
        }
    }

    /// Give every inbound request a deadline of `timeout` from its arrival.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The product source.
    pub fn source(&self) -> &dyn ProductSource {
        self.source.as_ref()
    }

    /// The configured per-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Deadline for a request arriving now.
    pub fn deadline(&self) -> Option<Instant> {
        self.request_timeout.map(|timeout| Instant::now() + timeout)
    }
}
