//! Product endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::time::Instant;

use crate::models::validate_product_id;
use crate::server::state::AppState;
use crate::traits::ProductSource;

/// GET /products/{product_id}
///
/// Also mounted on `/products/` so a request without an id gets a 400
/// instead of falling through to a 404.
pub async fn get_product(
    State(state): State<AppState>,
    product_id: Option<Path<String>>,
) -> Response {
    let product_id = product_id.map(|Path(id)| id);
    handle_get_product(state.source(), product_id.as_deref(), state.deadline()).await
}

/// Validate `product_id`, fetch it from `source` and render the outcome.
///
/// Always produces exactly one response:
/// - 400 if the id is missing, empty or not a non-negative integer
/// - 500 if the source fails, with the detail logged rather than returned
/// - 200 with the product as JSON otherwise
pub async fn handle_get_product(
    source: &dyn ProductSource,
    product_id: Option<&str>,
    deadline: Option<Instant>,
) -> Response {
    let Some(product_id) = product_id.filter(|id| !id.is_empty()) else {
        tracing::debug!("request without product id");
        return status_response(StatusCode::BAD_REQUEST);
    };

    if let Err(err) = validate_product_id(product_id) {
        tracing::debug!(product_id, error = %err, "rejected product id");
        return status_response(StatusCode::BAD_REQUEST);
    }

    // The original string is forwarded, not the parsed number
    let result = match deadline {
        Some(deadline) => source.fetch_product_before(product_id, deadline).await,
        None => source.fetch_product(product_id).await,
    };

    match result {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(err) => {
            tracing::error!(
                product_id,
                kind = ?err.kind(),
                error = %err,
                "failed to fetch product"
            );
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Plain-text response carrying the status phrase, e.g. "Bad Request".
fn status_response(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}
