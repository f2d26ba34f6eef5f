//! Product model.

use serde::{Deserialize, Serialize};

use crate::error::{ProductError, Result};

/// A product as returned by the upstream `/products/{id}` endpoint.
///
/// Only a few of the upstream fields are kept; the rest are ignored when
/// decoding. `id` is required, `title` and `description` fall back to
/// empty strings when the upstream omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream-assigned product id.
    pub id: u64,

    /// Product title.
    #[serde(default)]
    pub title: String,

    /// Product description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Decode a product from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::Decode`] if the body is not JSON or lacks a
    /// valid `id`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Check that `product_id` is a non-negative decimal integer.
///
/// Returns the parsed value, but callers forward the original string so
/// representations such as leading zeros reach the upstream untouched.
///
/// # Errors
///
/// Returns [`ProductError::Validation`] for an empty id, for anything other
/// than ASCII digits (signs included), or for a value that overflows `u64`.
pub fn validate_product_id(product_id: &str) -> Result<u64> {
    if product_id.is_empty() {
        return Err(ProductError::Validation("product id is required".to_string()));
    }

    if !product_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProductError::Validation(format!(
            "'{product_id}' is not a non-negative integer"
        )));
    }

    product_id
        .parse()
        .map_err(|_| ProductError::Validation(format!("'{product_id}' is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_decode_full_product() {
        let product = Product::from_json(
            br#"{"id": 1, "title": "iPhone 9", "description": "An apple mobile", "price": 549}"#,
        )
        .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "iPhone 9");
        assert_eq!(product.description, "An apple mobile");
    }

    #[test]
    fn test_decode_without_description() {
        let product = Product::from_json(br#"{"id": 123, "title": "iPhone"}"#).unwrap();
        assert_eq!(product.id, 123);
        assert_eq!(product.title, "iPhone");
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_decode_requires_id() {
        let err = Product::from_json(br#"{"title": "iPhone"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_rejects_negative_id() {
        let err = Product::from_json(br#"{"id": -4}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_serializes_all_fields() {
        let product = Product {
            id: 7,
            title: "Lamp".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "title": "Lamp", "description": ""})
        );
    }

    #[test]
    fn test_validate_accepts_digits() {
        assert_eq!(validate_product_id("123").unwrap(), 123);
        assert_eq!(validate_product_id("0").unwrap(), 0);
        assert_eq!(validate_product_id("007").unwrap(), 7);
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        for input in ["", "foobar", "-1", "+1", "1.5", " 1", "12a", "99999999999999999999"] {
            let err = validate_product_id(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {input:?}");
        }
    }
}
