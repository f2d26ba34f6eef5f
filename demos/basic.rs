//! Basic example demonstrating the products client and server.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```
//!
//! Set `PRODUCTS_API_URL` to point at a different upstream.

use productapi::server::{AppState, ProductServer};
use productapi::ProductClient;

#[tokio::main]
async fn main() -> productapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating products client...");
    let client = ProductClient::from_env()?;
    println!("Upstream: {}", client.base_url());

    // Fetch directly through the client
    println!("\n--- Fetching product 1 ---");
    match client.fetch("1").await {
        Ok(product) => println!("#{} {}: {}", product.id, product.title, product.description),
        Err(e) => println!("Fetch failed ({:?}): {e}", e.kind()),
    }

    // Serve the same client over HTTP on a random port
    println!("\n--- Serving ---");
    let server = ProductServer::bind("127.0.0.1:0", AppState::new(client)).await?;
    println!("Listening on {}", server.url());

    for id in ["1", "foobar"] {
        let url = format!("{}/products/{id}", server.url());
        match reqwest::get(&url).await {
            Ok(response) => println!("GET {url} -> {}", response.status()),
            Err(e) => println!("GET {url} failed: {e}"),
        }
    }

    server.shutdown().await?;
    println!("\nDone!");

    Ok(())
}
