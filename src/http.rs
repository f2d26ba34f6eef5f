//! HTTP exchange types and the default reqwest-backed transport.
//!
//! Requests and responses cross the [`Transport`] seam as plain data, so a
//! test double can script a status and body without any I/O. The
//! production transport, [`ReqwestTransport`], executes them with a shared
//! `reqwest::Client`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::client::DEFAULT_TIMEOUT;
use crate::traits::Transport;

const USER_AGENT: &str = concat!("productapi/", env!("CARGO_PKG_VERSION"));

/// HTTP method for an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }
}

/// An outbound request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// A response described as plain data.
///
/// The body holds the raw bytes; interpreting them is up to the caller.
/// Transports leave it empty for error statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is a client or server error (>= 400).
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Failure to complete one HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the client timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The caller's deadline passed before the request completed.
    #[error("deadline exceeded before the request completed")]
    DeadlineExceeded,

    /// The request could not be built for the given id.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The connection to the upstream could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other reqwest failure (redirects, body read, protocol).
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// A failure reported by a non-reqwest transport.
    #[error("{0}")]
    Other(String),
}

/// Default transport executing requests with reqwest.
///
/// Cheaply cloneable; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self { http, timeout })
    }

    /// Wrap an existing reqwest client, e.g. one shared across the app.
    ///
    /// `timeout` is only used to label timeout errors; the client keeps its
    /// own configured timeout.
    pub fn from_client(http: Client, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else if err.is_connect() {
            TransportError::Connect(err)
        } else {
            TransportError::Http(err)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[tracing::instrument(skip(self, request), fields(url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.http.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();

        // An error status is the whole answer; its body is never read
        if status >= 400 {
            tracing::debug!(status, "upstream returned error status");
            return Ok(HttpResponse::new(status, Vec::<u8>::new()));
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(status, bytes = body.len(), "received upstream response");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
