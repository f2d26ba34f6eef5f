//! Products API client.
//!
//! Knows the upstream address, request shape and response shape. The
//! network itself sits behind the injected [`Transport`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use url::Url;

use crate::error::{ProductError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, TransportError};
use crate::models::Product;
use crate::traits::{ProductSource, Transport};

/// Upper bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upstream products endpoint used when no base URL is configured.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";

/// Client for the upstream products API.
///
/// Each [`fetch`](Self::fetch) issues exactly one request through the
/// injected transport. Nothing is cached and nothing is retried.
///
/// This struct is cheaply cloneable; clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use productapi::ProductClient;
///
/// # async fn example() -> productapi::Result<()> {
/// // Default transport and upstream URL
/// let client = ProductClient::new()?;
///
/// let product = client.fetch("1").await?;
/// println!("{}: {}", product.id, product.title);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProductClient {
    transport: Arc<dyn Transport>,
    base_url: Arc<Url>,
    timeout: Duration,
}

impl std::fmt::Debug for ProductClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ProductClient {
    /// Create a client with the default reqwest transport and upstream URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the reqwest client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_base_url(ReqwestTransport::new()?, DEFAULT_API_URL)
    }

    /// Create a client from environment variables.
    ///
    /// Uses `PRODUCTS_API_URL` for the upstream base URL when set, otherwise
    /// [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the transport cannot be
    /// built.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PRODUCTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(ReqwestTransport::new()?, &base_url)
    }

    /// Create a client that sends through `transport` to the default URL.
    pub fn with_transport(transport: impl Transport + 'static) -> Result<Self> {
        Self::with_base_url(transport, DEFAULT_API_URL)
    }

    /// Create a client that sends through `transport` to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or cannot carry a path.
    pub fn with_base_url(transport: impl Transport + 'static, base_url: &str) -> Result<Self> {
        Self::from_shared(Arc::new(transport), base_url)
    }

    /// Create a client around a transport that is already shared.
    pub fn from_shared(transport: Arc<dyn Transport>, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so both spellings compare equal
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(ProductError::Config(format!(
                "'{base_url}' cannot be used as a base URL"
            )));
        }

        Ok(Self {
            transport,
            base_url: Arc::new(base_url),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a product by id.
    ///
    /// `product_id` is substituted verbatim into the request path; the
    /// client does no format checks of its own.
    ///
    /// # Errors
    ///
    /// - [`ProductError::Transport`] if the request cannot be built, the call
    ///   fails or it exceeds the timeout
    /// - [`ProductError::UpstreamStatus`] if the upstream answers with >= 400
    /// - [`ProductError::Decode`] if the body is not a product
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, product_id: &str) -> Result<Product> {
        let deadline = Instant::now() + self.timeout;
        self.fetch_until(product_id, deadline, TransportError::Timeout(self.timeout))
            .await
    }

    /// Fetch a product, also giving up once the caller's `deadline` passes.
    ///
    /// The call is bounded by whichever comes first: the client timeout or
    /// `deadline`.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch); an expired caller deadline is reported
    /// as [`TransportError::DeadlineExceeded`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch_before(&self, product_id: &str, deadline: Instant) -> Result<Product> {
        let timeout_at = Instant::now() + self.timeout;
        if deadline < timeout_at {
            self.fetch_until(product_id, deadline, TransportError::DeadlineExceeded)
                .await
        } else {
            self.fetch_until(product_id, timeout_at, TransportError::Timeout(self.timeout))
                .await
        }
    }

    /// Build the outbound request for `product_id`.
    ///
    /// The id becomes the final path segment, percent-encoded but otherwise
    /// unchanged. `.` and `..` would be resolved away by URL normalisation,
    /// so they are refused rather than silently addressing another path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the id cannot be
    /// carried as a single path segment.
    pub fn build_request(&self, product_id: &str) -> core::result::Result<HttpRequest, TransportError> {
        if matches!(product_id, "." | "..") {
            return Err(TransportError::InvalidRequest(format!(
                "'{product_id}' cannot be sent as a path segment"
            )));
        }

        let mut url = Url::clone(&self.base_url);
        url.path_segments_mut()
            .map_err(|_| {
                TransportError::InvalidRequest(format!("'{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .push(product_id);

        Ok(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Interpret an upstream response.
    ///
    /// An error status short-circuits before the body is looked at.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Product> {
        if response.is_error() {
            tracing::debug!(status = response.status, "upstream rejected request");
            return Err(ProductError::UpstreamStatus {
                status: response.status,
            });
        }

        Product::from_json(&response.body)
    }

    async fn fetch_until(
        &self,
        product_id: &str,
        deadline: Instant,
        expired: TransportError,
    ) -> Result<Product> {
        // timeout_at polls the call once before looking at the clock
        if Instant::now() >= deadline {
            tracing::debug!(%expired, "deadline passed before the upstream call");
            return Err(expired.into());
        }

        let request = self.build_request(product_id)?;

        let response = match tokio::time::timeout_at(deadline, self.transport.send(request)).await
        {
            Ok(result) => result?,
            Err(_) => {
                tracing::debug!(%expired, "upstream call abandoned");
                return Err(expired.into());
            }
        };

        self.parse_response(response)
    }
}

#[async_trait]
impl ProductSource for ProductClient {
    async fn fetch_product(&self, product_id: &str) -> Result<Product> {
        self.fetch(product_id).await
    }

    async fn fetch_product_before(&self, product_id: &str, deadline: Instant) -> Result<Product> {
        self.fetch_before(product_id, deadline).await
    }
}
