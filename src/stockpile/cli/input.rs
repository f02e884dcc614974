//! Field validation for user input.
//!
//! The `check_*` functions back the interactive prompts; the `*_arg` wrappers
//! are clap value parsers built on the same checks.

use stockpile::model::{parse_price, parse_quantity};

const QUANTITY_HINT: &str = "Enter a non-negative whole number.";
const PRICE_HINT: &str = "Enter a valid non-negative number.";

pub(super) fn check_name(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Name cannot be empty.".to_string());
    }
    Ok(())
}

pub(super) fn check_category(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Category cannot be empty.".to_string());
    }
    Ok(())
}

pub(super) fn check_quantity(input: &str) -> Result<(), String> {
    parse_quantity(input)
        .map(|_| ())
        .map_err(|_| QUANTITY_HINT.to_string())
}

pub(super) fn check_price(input: &str) -> Result<(), String> {
    parse_price(input)
        .map(|_| ())
        .map_err(|_| PRICE_HINT.to_string())
}

/// Blank is fine: it means "keep the current value".
pub(super) fn check_optional_quantity(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Ok(());
    }
    check_quantity(input)
}

pub(super) fn check_optional_price(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Ok(());
    }
    check_price(input)
}

pub(super) fn name_arg(s: &str) -> Result<String, String> {
    check_name(s).map(|_| s.trim().to_string())
}

pub(super) fn category_arg(s: &str) -> Result<String, String> {
    check_category(s).map(|_| s.trim().to_string())
}

pub(super) fn quantity_arg(s: &str) -> Result<String, String> {
    check_quantity(s).map(|_| s.to_string())
}

pub(super) fn price_arg(s: &str) -> Result<String, String> {
    check_price(s).map(|_| s.to_string())
}

pub(super) fn optional_quantity_arg(s: &str) -> Result<String, String> {
    check_optional_quantity(s).map(|_| s.to_string())
}

pub(super) fn optional_price_arg(s: &str) -> Result<String, String> {
    check_optional_price(s).map(|_| s.to_string())
}
