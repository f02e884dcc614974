//! # Storage Layer
//!
//! The whole product collection lives in one place and is always moved as a
//! unit: [`ProductStore::read`] returns every product, [`ProductStore::write`]
//! replaces every product. There is no caching and no partial update at this
//! level; the command layer does read-modify-write on each call.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, a single JSON array on disk.
//!   A missing or empty file reads as an empty collection.
//! - [`memory::InMemoryStore`]: for tests. Can simulate read and write failures.
//! - [`lenient::LenientStore`]: wraps another store and turns storage failures
//!   into log lines, reading as empty and dropping failed writes.
//!
//! ## Storage Format
//!
//! ```text
//! products.json
//! [
//!   {
//!     "id": "0b6f9c1e-…",
//!     "name": "Widget",
//!     "category": "Tools",
//!     "quantity": 5,
//!     "price": 9.99
//!   }
//! ]
//! ```
//!
//! Only one process is expected to touch the file at a time. Two writers
//! racing each other lose updates; the last write wins.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod lenient;
pub mod memory;

/// Abstract interface for the product collection's backing store.
pub trait ProductStore {
    /// Load the full collection, in storage order.
    fn read(&self) -> Result<Vec<Product>>;

    /// Replace the full collection.
    fn write(&mut self, products: &[Product]) -> Result<()>;
}

impl<S: ProductStore + ?Sized> ProductStore for Box<S> {
    fn read(&self) -> Result<Vec<Product>> {
        (**self).read()
    }

    fn write(&mut self, products: &[Product]) -> Result<()> {
        (**self).write(products)
    }
}
