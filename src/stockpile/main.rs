//! # Stockpile CLI
//!
//! The binary is thin: the CLI lives in `cli/`, this file only invokes
//! `cli::run()` and turns a failure into an exit code. Everything the
//! inventory actually does lives in the library (`api.rs` inward).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
