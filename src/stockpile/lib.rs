//! # Stockpile Architecture
//!
//! Stockpile is a small inventory library with a CLI client on top. Products
//! live in one JSON file; every operation loads the whole collection, works on
//! it in memory and, if it changed anything, writes the whole collection back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, interactive prompts, input validation  │
//! │  - Table rendering, colored messages, exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - InventoryApi<S>: create/list/get/update/delete/search    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - read → change → write, on plain Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductStore trait: read() / write()                     │
//! │  - JsonFileStore, InMemoryStore, LenientStore               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never prompts and never exits.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Errors
//!
//! Storage failures are returned as [`error::StockError`]. Callers that prefer
//! the old "corrupt file means no products" behavior wrap their store in
//! [`store::lenient::LenientStore`]. A missing product is not an error:
//! lookups return `Option`, deletes return `bool`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product`, `ProductDraft`, `ProductUpdate` and number parsing
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
