//! Inbound HTTP surface.
//!
//! An axum router exposing `GET /products/{product_id}`. The handler
//! validates the id, asks a [`ProductSource`](crate::ProductSource) for the
//! product and maps the outcome to 200, 400 or 500.
//!
//! # Example
//!
//! ```no_run
//! use productapi::server::{AppState, ProductServer};
//! use productapi::ProductClient;
//!
//! # async fn example() -> productapi::Result<()> {
//! let state = AppState::new(ProductClient::new()?);
//! let server = ProductServer::bind("0.0.0.0:4000", state).await?;
//! println!("listening on {}", server.url());
//! server.wait().await?;
//! # Ok(())
//! # }
//! ```

mod handlers;
mod server;
mod state;

pub use handlers::{get_product, handle_get_product};
pub use server::{router, serve, ProductServer};
pub use state::AppState;
