use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use crate::product::{Product, seed_products};

/// In-memory product store
pub struct Store {
    data: RwLock<HashMap<String, Product>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store holding the startup records
    pub fn seeded() -> Self {
        let data = seed_products()
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();
        Self {
            data: RwLock::new(data),
        }
    }

    /// Snapshot of every product, in no particular order
    pub fn list_all(&self) -> Vec<Product> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.values().cloned().collect()
    }

    /// Get the product with the given id
    pub fn get(&self, id: &str) -> Option<Product> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.get(id).cloned()
    }

    /// Insert a product unless its id is already taken.
    ///
    /// Returns false and leaves the existing record untouched on conflict.
    pub fn insert(&self, product: Product) -> bool {
        // A panic while holding the guard cannot leave the map half-written,
        // so a poisoned lock is still safe to use.
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        match data.entry(product.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(product);
                true
            }
        }
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
