//! HTTP request handlers.

pub mod products;

pub use products::*;
