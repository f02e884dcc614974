//! # Command Layer
//!
//! Business logic for each inventory operation, one module per command.
//!
//! Every command follows the same cycle against a [`ProductStore`]:
//!
//! 1. `read()` the whole collection
//! 2. work on the in-memory `Vec<Product>`
//! 3. for mutations only, `write()` the whole collection back
//!
//! Commands take and return plain Rust types. They never print and never
//! prompt; "not found" is reported through `Option`/`bool`, not errors.
//!
//! `config` is the odd one out: it works on the configuration directory
//! rather than the product store.
//!
//! [`ProductStore`]: crate::store::ProductStore

use crate::config::StockConfig;
use crate::model::Product;

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

/// Position of the first product with exactly this id.
pub(crate) fn position_of(products: &[Product], id: &str) -> Option<usize> {
    products.iter().position(|p| p.id_string() == id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of the config command.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<StockConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }
}
