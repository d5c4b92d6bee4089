use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::product::Product;
use crate::store::Store;

/// Body of `GET /products`
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<Product>,
}

/// `GET /products`
pub async fn list_products(State(store): State<Arc<Store>>) -> Json<ProductList> {
    let products = store.list_all();
    debug!("Listing {} products", products.len());
    Json(ProductList {
        count: products.len(),
        products,
    })
}
