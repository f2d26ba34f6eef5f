//! Transport trait for performing one HTTP exchange.

use async_trait::async_trait;

use crate::http::{HttpRequest, HttpResponse, TransportError};

/// Perform one HTTP exchange.
///
/// This is the seam [`ProductClient`](crate::ProductClient) sends its
/// requests through. Production code wires
/// [`ReqwestTransport`](crate::ReqwestTransport); tests wire a double that
/// returns a scripted response or error.
///
/// Each call is independent. Implementations must not retry and must not
/// reuse a response across calls. Implementations shared across requests
/// must be safe for concurrent use.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use productapi::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl Transport for AlwaysOk {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(200, r#"{"id": 1}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the upstream response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. An error status
    /// is still a successful exchange and is returned as a response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
