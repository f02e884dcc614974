use super::input;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version)]
#[command(about = "Keep track of products, stock and prices from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this products file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Log storage problems instead of failing (reads come back empty)
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        #[arg(long, value_parser = input::name_arg)]
        name: String,

        #[arg(long, value_parser = input::category_arg)]
        category: String,

        /// Units in stock
        #[arg(long, value_parser = input::quantity_arg)]
        quantity: String,

        /// Unit price
        #[arg(long, value_parser = input::price_arg)]
        price: String,
    },

    /// List all products
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one product
    Get {
        id: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change some fields of a product; omitted or blank fields are kept
    #[command(alias = "u")]
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_parser = input::optional_quantity_arg)]
        quantity: Option<String>,

        #[arg(long, value_parser = input::optional_price_arg)]
        price: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Find products by id fragment or name
    #[command(alias = "s")]
    Search {
        term: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, on-storage-error, currency-symbol)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
