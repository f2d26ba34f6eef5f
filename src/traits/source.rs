//! ProductSource trait consumed by the web layer.

use async_trait::async_trait;
use tokio::time::Instant;

use crate::error::Result;
use crate::models::Product;

/// Something that can look up a product by its identifier.
///
/// The request handler depends on this trait rather than on
/// [`ProductClient`](crate::ProductClient) directly, so handler tests can
/// substitute a stub that returns a fixed product or error.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the product identified by `product_id`.
    ///
    /// The identifier is passed exactly as received; format checks are the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be obtained.
    async fn fetch_product(&self, product_id: &str) -> Result<Product>;

    /// Fetch the product, giving up once `deadline` passes.
    ///
    /// The default implementation ignores the deadline.
    async fn fetch_product_before(&self, product_id: &str, deadline: Instant) -> Result<Product> {
        let _ = deadline;
        self.fetch_product(product_id).await
    }
}
