use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use crate::handler::ApiError;
use crate::product::Product;
use crate::store::Store;

/// `GET /products/:id`
pub async fn get_product(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    match store.get(&id) {
        Some(product) => {
            debug!("Found product {}", id);
            Ok(Json(product))
        }
        None => {
            debug!("Product {} not found", id);
            Err(ApiError::not_found(id))
        }
    }
}
