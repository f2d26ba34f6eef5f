//! CLI argument parsing tests.

use clap::Parser;
use productapi::cli::{Cli, Command, DEFAULT_LISTEN_ADDR};
use productapi::DEFAULT_API_URL;

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["productapi", "get", "123"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { product_id } => assert_eq!(product_id, "123"),
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_keeps_product_id_verbatim() {
    let cli = Cli::parse_from(["productapi", "get", "007"]);

    match cli.command {
        Command::Get { product_id } => assert_eq!(product_id, "007"),
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_serve_defaults() {
    let cli = Cli::parse_from(["productapi", "serve"]);

    match cli.command {
        Command::Serve {
            listen,
            request_timeout,
        } => {
            assert_eq!(listen.to_string(), DEFAULT_LISTEN_ADDR);
            assert_eq!(request_timeout, None);
        }
        _ => panic!("Expected Serve command"),
    }
}

#[test]
fn test_cli_parses_serve_options() {
    let cli = Cli::parse_from([
        "productapi",
        "serve",
        "--listen",
        "127.0.0.1:8080",
        "--request-timeout",
        "3",
    ]);

    match cli.command {
        Command::Serve {
            listen,
            request_timeout,
        } => {
            assert_eq!(listen.port(), 8080);
            assert_eq!(request_timeout, Some(3));
        }
        _ => panic!("Expected Serve command"),
    }
}

#[test]
fn test_cli_rejects_bad_listen_address() {
    let result = Cli::try_parse_from(["productapi", "serve", "--listen", "not-an-address"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "productapi",
        "get",
        "1",
        "--json",
        "--upstream-url",
        "http://localhost:9000/products",
    ]);

    assert!(cli.json);
    assert_eq!(cli.upstream_url, "http://localhost:9000/products");
}

#[test]
fn test_cli_default_upstream_url() {
    // Only meaningful when the variable is not set in the test environment
    if std::env::var_os("PRODUCTS_API_URL").is_none() {
        let cli = Cli::parse_from(["productapi", "get", "1"]);
        assert_eq!(cli.upstream_url, DEFAULT_API_URL);
    }
}

#[test]
fn test_cli_requires_subcommand() {
    let result = Cli::try_parse_from(["productapi"]);
    assert!(result.is_err());
}
