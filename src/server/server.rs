//! Products HTTP server.
//!
//! Provides the axum router and a background server handle.

use std::future::Future;
use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::error::Result;

/// Create the axum router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Product routes; the id-less forms exist to answer 400
        .route("/products", get(handlers::get_product))
        .route("/products/", get(handlers::get_product))
        .route("/products/:product_id", get(handlers::get_product))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown starts.
///
/// # Errors
///
/// Returns an error if the server stops with an I/O error.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "serving products API");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// A products server running on a background task.
///
/// Used by the binary's `serve` command and by end-to-end tests.
pub struct ProductServer {
    /// The URL where the server is listening.
    url: String,
    /// The bound address.
    addr: SocketAddr,
    /// Handle to the server task.
    handle: JoinHandle<Result<()>>,
    /// Signals graceful shutdown.
    shutdown: oneshot::Sender<()>,
}

impl ProductServer {
    /// Bind to `addr` and start serving in the background.
    ///
    /// Pass `127.0.0.1:0` to listen on a random available port; use
    /// `url()` to learn which one was picked.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(addr: impl ToSocketAddrs, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Self::start(listener, state)
    }

    /// Start serving on an already bound listener.
    pub fn start(listener: TcpListener, state: AppState) -> Result<Self> {
        let addr = listener.local_addr()?;
        let (shutdown, signal) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve(listener, state, async move {
            let _ = signal.await;
        }));

        Ok(Self {
            url: format!("http://{}", addr),
            addr,
            handle,
            shutdown,
        })
    }

    /// Get the base URL of the server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the bound socket address.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Gracefully stop the server and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns the server's I/O error if it had already failed.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown.send(());
        Self::join_handle(self.handle).await
    }

    /// Wait for the server task to finish without asking it to stop.
    pub async fn wait(self) -> Result<()> {
        // Keep the sender alive so the server is not told to shut down
        let _shutdown = self.shutdown;
        Self::join_handle(self.handle).await
    }

    async fn join_handle(handle: JoinHandle<Result<()>>) -> Result<()> {
        match handle.await {
            Ok(result) => result,
            Err(err) => Err(std::io::Error::other(err).into()),
        }
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HttpRequest, HttpResponse, ProductClient, Transport, TransportError};
    use async_trait::async_trait;

    struct FixedTransport(HttpResponse);

    #[async_trait]
    impl Transport for FixedTransport {
        async fn send(
            &self,
            _request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            Ok(self.0.clone())
        }
    }

    fn state_for(response: HttpResponse) -> AppState {
        let client = ProductClient::with_transport(FixedTransport(response)).unwrap();
        AppState::new(client)
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = ProductServer::bind("127.0.0.1:0", state_for(HttpResponse::new(200, "")))
            .await
            .unwrap();

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_get_product_through_server() {
        let server = ProductServer::bind(
            "127.0.0.1:0",
            state_for(HttpResponse::new(200, r#"{"id": 123, "title": "iPhone"}"#)),
        )
        .await
        .unwrap();

        let response = reqwest::get(format!("{}/products/123", server.url()))
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["id"], 123);
        assert_eq!(body["title"], "iPhone");

        server.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_stops_listening() {
        let server = ProductServer::bind("127.0.0.1:0", state_for(HttpResponse::new(200, "")))
            .await
            .unwrap();
        let url = server.url().to_string();

        server.shutdown().await.unwrap();

        let result = reqwest::get(format!("{}/health", url)).await;
        assert!(result.is_err());
    }
}
