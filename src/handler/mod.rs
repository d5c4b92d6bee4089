//! HTTP handlers for the product API
//!
//! Each handler translates one request into a single store operation and
//! the store result into a JSON response.

pub mod create;
pub mod error;
pub mod get;
pub mod list;

pub use create::create_product;
pub use error::ApiError;
pub use get::get_product;
pub use list::list_products;
