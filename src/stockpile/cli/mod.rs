//! # CLI Behavior
//!
//! This is **one possible UI client** for stockpile. It is the only place that
//! knows about terminal I/O, prompts, exit codes and output formatting.
//!
//! ### Naked Execution (`stockpile`)
//!
//! Running `stockpile` with no subcommand starts the interactive menu: add,
//! list, update, delete, search, exit. Each action runs to completion before
//! the menu comes back, and a failed action prints a message instead of ending
//! the session.
//!
//! ### Subcommands
//!
//! Every menu action also exists as a subcommand (`add`, `list`, `get`,
//! `update`, `delete`, `search`) for scripting. Here a missing product is an
//! error and the process exits with status 1.
//!
//! ### Validation
//!
//! The library trusts its caller with field values. Both front ends validate
//! through `input.rs` before calling the API: names and categories must not be
//! blank, quantities are non-negative whole numbers, prices non-negative
//! numbers. On update a blank answer means "keep the current value".
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging, per-command handlers
//! - `input`: Field validators shared by clap and the prompts
//! - `interactive`: The menu loop and its prompt flows
//! - `render`: Product tables and colored messages
//! - `setup`: Argument parsing via clap

mod commands;
mod input;
mod interactive;
mod render;
pub mod setup;

pub use commands::run;
