//! Products API binary.
//!
//! Serves the products passthrough over HTTP, or fetches a single product
//! from the command line.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use productapi::cli::{Cli, Command};
use productapi::output::PrettyPrint;
use productapi::server::{self, AppState};
use productapi::{validate_product_id, ProductClient, ReqwestTransport};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = match ReqwestTransport::new()
        .map_err(productapi::ProductError::from)
        .and_then(|transport| ProductClient::with_base_url(transport, &cli.upstream_url))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check PRODUCTS_API_URL or --upstream-url");
            return ExitCode::FAILURE;
        }
    };

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: ProductClient, cli: Cli) -> productapi::Result<()> {
    match cli.command {
        Command::Serve {
            listen,
            request_timeout,
        } => handle_serve(client, listen, request_timeout).await,
        Command::Get { product_id } => handle_get(&client, &product_id, cli.json).await,
    }
}

async fn handle_serve(
    client: ProductClient,
    listen: std::net::SocketAddr,
    request_timeout: Option<u64>,
) -> productapi::Result<()> {
    tracing::info!(upstream = %client.base_url(), "starting products server");

    let mut state = AppState::new(client);
    if let Some(secs) = request_timeout {
        state = state.with_request_timeout(Duration::from_secs(secs));
    }

    let listener = TcpListener::bind(listen).await?;
    server::serve(listener, state, shutdown_signal()).await
}

async fn handle_get(client: &ProductClient, product_id: &str, json: bool) -> productapi::Result<()> {
    validate_product_id(product_id)?;

    let product = client.fetch(product_id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        println!("{}", product.pretty_print());
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
