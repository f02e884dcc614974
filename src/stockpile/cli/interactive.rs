//! The interactive menu: one action at a time until the user picks Exit.

use super::commands::AppContext;
use super::input::{
    check_category, check_optional_price, check_optional_quantity, check_price, check_quantity,
};
use super::render::{format_price, print_messages, render_product_table};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use stockpile::api::CmdMessage;
use stockpile::error::{Result, StockError};
use stockpile::model::{ProductDraft, ProductUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    List,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::Add,
        MenuAction::List,
        MenuAction::Update,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add product",
            MenuAction::List => "List products",
            MenuAction::Update => "Update product",
            MenuAction::Delete => "Delete product",
            MenuAction::Search => "Search products",
            MenuAction::Exit => "Exit",
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> StockError {
    StockError::Api(format!("Prompt failed: {}", e))
}

/// Free-text prompt that accepts blank answers and runs `check` on every answer.
fn ask(prompt: &str, check: fn(&str) -> std::result::Result<(), String>) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| check(input))
        .interact_text()
        .map_err(prompt_error)?;
    Ok(answer.trim().to_string())
}

fn ask_free(prompt: &str) -> Result<String> {
    ask(prompt, |_| Ok(()))
}

pub(super) fn confirm_delete(name: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Are you sure you want to delete \"{}\"?", name))
        .default(false)
        .interact()
        .map_err(prompt_error)
}

pub(super) fn run_menu(ctx: &mut AppContext) -> Result<()> {
    println!("{}", "Welcome to Stockpile!".bold());
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        let action = choice.map_or(MenuAction::Exit, |i| MenuAction::ALL[i]);
        if action == MenuAction::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        let outcome = match action {
            MenuAction::Add => add_product(ctx),
            MenuAction::List => list_products(ctx),
            MenuAction::Update => update_product(ctx),
            MenuAction::Delete => delete_product(ctx),
            MenuAction::Search => search_products(ctx),
            MenuAction::Exit => Ok(()),
        };
        if let Err(e) = outcome {
            print_messages(&[CmdMessage::error(format!("An error occurred: {}", e))]);
        }

        println!("\n----------------------------------------\n");
    }
}

fn add_product(ctx: &mut AppContext) -> Result<()> {
    let name = ask_free("Product name (leave blank to cancel)")?;
    if name.is_empty() {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let category = ask("Category", check_category)?;
    let quantity = ask("Quantity in stock", check_quantity)?;
    let price = ask("Price", check_price)?;

    let product = ctx
        .api
        .create(ProductDraft::new(name, category, quantity, price))?;
    print_messages(&[
        CmdMessage::success("Product added successfully!"),
        CmdMessage::info(format!("Product ID: {}", product.id_string())),
    ]);
    Ok(())
}

fn list_products(ctx: &AppContext) -> Result<()> {
    let products = ctx.api.list_all()?;
    if products.is_empty() {
        print_messages(&[CmdMessage::info("No products registered.")]);
    } else {
        print!(
            "{}",
            render_product_table(&products, &ctx.config.currency_symbol)
        );
    }
    Ok(())
}

fn update_product(ctx: &mut AppContext) -> Result<()> {
    let id = ask_free("ID of the product to update (leave blank to go back)")?;
    if id.is_empty() {
        return Ok(());
    }

    let Some(product) = ctx.api.get_by_id(&id)? else {
        print_messages(&[CmdMessage::warning("Product not found!")]);
        return Ok(());
    };

    print_messages(&[CmdMessage::info(format!(
        "Updating \"{}\" (leave blank to keep the current value)",
        product.name
    ))]);

    let currency = &ctx.config.currency_symbol;
    let update = ProductUpdate {
        name: Some(ask_free(&format!("New name ({})", product.name))?),
        category: Some(ask_free(&format!("New category ({})", product.category))?),
        quantity: Some(ask(
            &format!("New quantity ({})", product.quantity),
            check_optional_quantity,
        )?),
        price: Some(ask(
            &format!("New price ({})", format_price(product.price, currency)),
            check_optional_price,
        )?),
    };

    match ctx.api.update(&id, &update)? {
        Some(_) => print_messages(&[CmdMessage::success("Product updated successfully!")]),
        None => print_messages(&[CmdMessage::warning("Product not found!")]),
    }
    Ok(())
}

fn delete_product(ctx: &mut AppContext) -> Result<()> {
    let id = ask_free("ID of the product to delete (leave blank to go back)")?;
    if id.is_empty() {
        return Ok(());
    }

    let Some(product) = ctx.api.get_by_id(&id)? else {
        print_messages(&[CmdMessage::warning("Product not found!")]);
        return Ok(());
    };

    if !confirm_delete(&product.name)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    if ctx.api.delete(&id)? {
        print_messages(&[CmdMessage::success("Product deleted successfully!")]);
    } else {
        print_messages(&[CmdMessage::warning("Product not found!")]);
    }
    Ok(())
}

fn search_products(ctx: &AppContext) -> Result<()> {
    let term = ask_free("Product ID or part of the name (leave blank to go back)")?;
    if term.is_empty() {
        return Ok(());
    }

    let results = ctx.api.search(&term)?;
    if results.is_empty() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ends_with_exit() {
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Exit));
    }

    #[test]
    fn menu_labels_are_distinct() {
        let mut labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuAction::ALL.len());
    }
}
