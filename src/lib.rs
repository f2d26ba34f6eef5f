//! Products passthrough library.
//!
//! A typed client for an upstream products JSON API, plus a thin axum
//! handler that validates a product id, delegates to the client and maps
//! the outcome to an HTTP response.
//!
//! # Quick Start
//!
//! ```no_run
//! use productapi::ProductClient;
//!
//! #[tokio::main]
//! async fn main() -> productapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ProductClient::from_env()?;
//!
//!     let product = client.fetch("1").await?;
//!     println!("Product: {}", product.title);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Three layers, each replaceable through a trait:
//!
//! - [`Transport`] - performs one HTTP exchange ([`ReqwestTransport`] in
//!   production, a scripted double in tests)
//! - [`ProductClient`] - builds the upstream request, checks the status and
//!   decodes a [`Product`]
//! - [`server`] - the web layer, which talks to the client through
//!   [`ProductSource`]
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `PRODUCTS_API_URL` (optional) - Upstream base URL (defaults to
//!   `https://dummyjson.com/products`)

mod client;
mod error;
mod http;
mod models;
mod traits;

pub mod cli;
pub mod output;
pub mod server;

// Re-export core types
pub use client::{ProductClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::{ErrorKind, ProductError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, TransportError};

// Re-export traits
pub use traits::{ProductSource, Transport};

// Re-export models
pub use models::{validate_product_id, Product};
