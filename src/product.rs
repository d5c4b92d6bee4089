//! Product record and create-time validation

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length of a product name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Product record as stored and served over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
}

/// Optional fields accept an explicit `null` as if they were absent
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Create a new product
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    /// Check the fields a new product must satisfy.
    ///
    /// Returns every violation found, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.is_empty() {
            errors.push("id is required".to_string());
        }

        if self.name.is_empty() {
            errors.push("name is required".to_string());
        } else if self.name.chars().count() > MAX_NAME_LEN {
            errors.push(format!("name too long (max {} characters)", MAX_NAME_LEN));
        }

        // NaN fails this comparison too
        if !(self.price > 0.0 && self.price.is_finite()) {
            errors.push("price must be greater than 0".to_string());
        }

        if self.stock < 0 {
            errors.push("stock cannot be negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Records present at startup
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Laptop", "High-performance laptop", 999.99, 10),
        Product::new("2", "Mouse", "Wireless mouse", 29.99, 50),
        Product::new("3", "Keyboard", "Mechanical keyboard", 89.99, 25),
    ]
}
