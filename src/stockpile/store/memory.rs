use super::ProductStore;
use crate::error::{Result, StockError};
use crate::model::Product;

/// In-memory storage for tests. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    writes: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Enable read error simulation, as if the backing file were corrupt.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl ProductStore for InMemoryStore {
    fn read(&self) -> Result<Vec<Product>> {
        if self.simulate_read_error {
            return Err(StockError::Store("Simulated read error".to_string()));
        }
        Ok(self.products.clone())
    }

    fn write(&mut self, products: &[Product]) -> Result<()> {
        if self.simulate_write_error {
            return Err(StockError::Store("Simulated write error".to_string()));
        }
        self.products = products.to_vec();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let product = Product::new(
                    format!("Test Product {}", i + 1),
                    "General".to_string(),
                    (i as u64 + 1) * 10,
                    1.5 * (i as f64 + 1.0),
                );
                self.store.products.push(product);
            }
            self
        }

        pub fn with_product(mut self, name: &str, category: &str, quantity: u64, price: f64) -> Self {
            let product = Product::new(name.to_string(), category.to_string(), quantity, price);
            self.store.products.push(product);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
