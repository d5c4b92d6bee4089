use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

use crate::handler::ApiError;
use crate::product::Product;
use crate::store::Store;

/// Body of a successful `POST /products`
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub product: Product,
}

/// `POST /products`
///
/// The body is decoded as JSON regardless of its `Content-Type`. It is
/// parsed and validated before the store is touched, so a rejected request
/// never changes state.
pub async fn create_product(
    State(store): State<Arc<Store>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let product: Product = serde_json::from_slice(&body)
        .inspect_err(|e| warn!("Rejected product payload: {}", e))?;

    if let Err(errors) = product.validate() {
        let details = errors.join("; ");
        warn!("Invalid product {:?}: {}", product.id, details);
        return Err(ApiError::bad_input(details));
    }

    if !store.insert(product.clone()) {
        warn!("Product {} already exists", product.id);
        return Err(ApiError::conflict(product.id));
    }

    info!("Created product {}", product.id);
    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Product created successfully",
            product,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> Product {
        Product::new("4", "Monitor", "", 199.99, 5)
    }

    fn body(product: &Product) -> Bytes {
        Bytes::from(serde_json::to_vec(product).unwrap())
    }

    #[tokio::test]
    async fn test_create_success() {
        let store = Arc::new(Store::seeded());
        let (status, Json(created)) = create_product(State(store.clone()), body(&monitor()))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.message, "Product created successfully");
        assert_eq!(created.product, monitor());
        assert_eq!(store.get("4"), Some(monitor()));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let store = Arc::new(Store::seeded());
        let mut clash = monitor();
        clash.id = "1".to_string();

        let err = create_product(State(store.clone()), body(&clash))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::conflict("1"));
        assert_eq!(store.get("1").unwrap().name, "Laptop");
    }

    #[tokio::test]
    async fn test_create_invalid_leaves_store_untouched() {
        let store = Arc::new(Store::seeded());
        let invalid = Product::new("5", "", "", 0.0, -2);

        let err = create_product(State(store.clone()), body(&invalid))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::bad_input(
                "name is required; price must be greater than 0; stock cannot be negative"
            )
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("5"), None);
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let store = Arc::new(Store::seeded());
        let err = create_product(State(store.clone()), Bytes::from_static(b"{not json"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::BadInput { .. }));
        assert_eq!(store.len(), 3);
    }
}
