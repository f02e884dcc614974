//! # API Facade
//!
//! The single entry point for inventory operations, whatever the UI. It
//! dispatches to `commands/*.rs` and returns their typed results; it holds no
//! business logic and does no I/O of its own.
//!
//! `InventoryApi<S: ProductStore>` is generic over the storage backend:
//! - Production: `InventoryApi<JsonFileStore>` (or a boxed, lenient variant)
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductDraft, ProductUpdate};
use crate::store::ProductStore;

pub struct InventoryApi<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, draft: ProductDraft) -> Result<Product> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_all(&self) -> Result<Vec<Product>> {
        commands::list::run(&self.store)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        commands::get::run(&self.store, id)
    }

    pub fn update(&mut self, id: &str, update: &ProductUpdate) -> Result<Option<Product>> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search(&self, term: &str) -> Result<Vec<Product>> {
        commands::search::run(&self.store, term)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
