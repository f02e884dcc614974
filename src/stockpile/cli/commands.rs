//! # CLI Layer
//!
//! Turns parsed arguments into API calls and API results into terminal output.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: resolves directories and config, builds the store
//! - `handle_*()`: per-subcommand handlers
//!
//! Directory resolution: `STOCKPILE_HOME` (when set) holds both config and
//! data; otherwise the platform config and data directories are used. The
//! products file is `--data-file`, else `STOCKPILE_DATA`, else the configured
//! `data-file`, else `products.json` in the data directory.

use super::interactive;
use super::render::{print_messages, render_json, render_product_detail, render_product_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use stockpile::api::{CmdMessage, ConfigAction, InventoryApi};
use stockpile::commands;
use stockpile::config::{StockConfig, StorageErrorPolicy};
use stockpile::error::{Result, StockError};
use stockpile::model::{ProductDraft, ProductUpdate};
use stockpile::store::fs::JsonFileStore;
use stockpile::store::lenient::LenientStore;
use stockpile::store::ProductStore;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "STOCKPILE_HOME";
const DATA_ENV: &str = "STOCKPILE_DATA";

pub(super) struct AppContext {
    pub(super) api: InventoryApi<Box<dyn ProductStore>>,
    pub(super) config: StockConfig,
    pub(super) config_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            quantity,
            price,
        }) => handle_add(&mut ctx, ProductDraft::new(name, category, quantity, price)),
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Get { id, json }) => handle_get(&ctx, &id, json),
        Some(Commands::Update {
            id,
            name,
            category,
            quantity,
            price,
        }) => {
            let update = ProductUpdate {
                name,
                category,
                quantity,
                price,
            };
            handle_update(&mut ctx, &id, &update)
        }
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Search { term, json }) => handle_search(&ctx, &term, json),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => interactive::run_menu(&mut ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "stockpile=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}

fn resolve_dirs() -> Result<(PathBuf, PathBuf)> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        let home = PathBuf::from(home);
        return Ok((home.clone(), home));
    }
    let proj_dirs = ProjectDirs::from("com", "stockpile", "stockpile")
        .ok_or_else(|| StockError::Store("Could not determine config dir".to_string()))?;
    Ok((
        proj_dirs.config_dir().to_path_buf(),
        proj_dirs.data_dir().to_path_buf(),
    ))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let (config_dir, data_dir) = resolve_dirs()?;

    let config = StockConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        StockConfig::default()
    });

    let override_path = cli
        .data_file
        .clone()
        .or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from));
    let data_file = config.data_file(override_path, &data_dir);

    let lenient = cli.lenient || config.on_storage_error == StorageErrorPolicy::Degrade;
    debug!(path = %data_file.display(), lenient, "using products file");

    let file_store = JsonFileStore::new(data_file);
    let store: Box<dyn ProductStore> = if lenient {
        Box::new(LenientStore::new(file_store))
    } else {
        Box::new(file_store)
    };

    Ok(AppContext {
        api: InventoryApi::new(store),
        config,
        config_dir,
    })
}

fn not_found(id: &str) -> StockError {
    StockError::Api(format!("Product not found: {}", id))
}

fn handle_add(ctx: &mut AppContext, draft: ProductDraft) -> Result<()> {
    let product = ctx.api.create(draft)?;
    print_messages(&[
        CmdMessage::success("Product added successfully!"),
        CmdMessage::info(format!("Product ID: {}", product.id_string())),
    ]);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let products = ctx.api.list_all()?;
    if json {
        println!("{}", render_json(&products)?);
    } else if products.is_empty() {
        print_messages(&[CmdMessage::info("No products registered.")]);
    } else {
        print!(
            "{}",
            render_product_table(&products, &ctx.config.currency_symbol)
        );
    }
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let product = ctx.api.get_by_id(id)?.ok_or_else(|| not_found(id))?;
    if json {
        println!("{}", render_json(&product)?);
    } else {
        print!(
            "{}",
            render_product_detail(&product, &ctx.config.currency_symbol)
        );
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: &str, update: &ProductUpdate) -> Result<()> {
    if update.is_noop() {
        print_messages(&[CmdMessage::warning(
            "Nothing to update: pass at least one of --name, --category, --quantity, --price.",
        )]);
        return Ok(());
    }

    let product = ctx.api.update(id, update)?.ok_or_else(|| not_found(id))?;
    print_messages(&[CmdMessage::success("Product updated successfully!")]);
    print!(
        "{}",
        render_product_detail(&product, &ctx.config.currency_symbol)
    );
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    let product = ctx.api.get_by_id(id)?.ok_or_else(|| not_found(id))?;

    if !yes {
        if !std::io::stdin().is_terminal() {
            return Err(StockError::Api(
                "Refusing to delete without confirmation; pass --yes".to_string(),
            ));
        }
        if !interactive::confirm_delete(&product.name)? {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    if !ctx.api.delete(id)? {
        return Err(not_found(id));
    }
    print_messages(&[CmdMessage::success("Product deleted successfully!")]);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str, json: bool) -> Result<()> {
    let results = ctx.api.search(term)?;
    if json {
        println!("{}", render_json(&results)?);
    } else if results.is_empty() {
        print_messages(&[CmdMessage::info("No products found.")]);
    } else {
        print_messages(&[CmdMessage::info(format!(
            "Found {} product(s):",
            results.len()
        ))]);
        print!(
            "{}",
            render_product_table(&results, &ctx.config.currency_symbol)
        );
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.config_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in stockpile::config::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
