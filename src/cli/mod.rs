//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! productapi binary.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::client::DEFAULT_API_URL;

/// Default address for `productapi serve`.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";

/// Products API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "productapi", about = "Products API passthrough", version)]
pub struct Cli {
    /// Output results as JSON instead of a key-value view.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Base URL of the upstream products API.
    #[arg(long, global = true, env = "PRODUCTS_API_URL", default_value = DEFAULT_API_URL)]
    pub upstream_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve GET /products/{product_id} over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "PRODUCTS_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
        listen: SocketAddr,

        /// Per-request deadline in seconds for inbound requests.
        #[arg(long, env = "PRODUCTS_REQUEST_TIMEOUT_SECS")]
        request_timeout: Option<u64>,
    },

    /// Fetch a single product from the upstream and print it.
    Get {
        /// The product id (a non-negative integer).
        product_id: String,
    },
}
