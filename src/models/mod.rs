//! Data models for the products API.

mod product;

pub use product::{validate_product_id, Product};
