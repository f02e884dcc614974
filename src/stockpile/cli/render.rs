use colored::Colorize;
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::model::Product;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["ID", "Name", "Category", "Quantity", "Price"];
/// Columns that hold numbers are right-aligned.
const NUMERIC: [bool; 5] = [false, false, false, true, true];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

fn row_cells(product: &Product, currency: &str) -> [String; 5] {
    [
        product.id_string(),
        product.name.clone(),
        product.category.clone(),
        product.quantity.to_string(),
        format_price(product.price, currency),
    ]
}

fn separator(widths: &[usize; 5]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn table_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::from("|");
    for (i, cell) in cells.iter().enumerate() {
        let padding = " ".repeat(widths[i].saturating_sub(cell.width()));
        if NUMERIC[i] {
            line.push_str(&format!(" {}{} |", padding, cell));
        } else {
            line.push_str(&format!(" {}{} |", cell, padding));
        }
    }
    line
}

/// Renders products as a bordered table, one product per row.
pub(super) fn render_product_table(products: &[Product], currency: &str) -> String {
    if products.is_empty() {
        return "No products to display.\n".to_string();
    }

    let header: [String; 5] = HEADERS.map(String::from);
    let rows: Vec<[String; 5]> = products.iter().map(|p| row_cells(p, currency)).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let sep = separator(&widths);
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&table_row(&header, &widths));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&table_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

/// Renders a single product as aligned `label: value` lines.
pub(super) fn render_product_detail(product: &Product, currency: &str) -> String {
    let cells = row_cells(product, currency);
    let label_width = HEADERS.iter().map(|h| h.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in HEADERS.iter().zip(cells.iter()) {
        out.push_str(&format!(
            "{}:{} {}\n",
            label,
            " ".repeat(label_width - label.width()),
            value
        ));
    }
    out
}

pub(super) fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> stockpile::error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
