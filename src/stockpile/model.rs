use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single inventory record, stored as one element of the JSON array on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub price: f64,
}

impl Product {
    pub fn new(name: String, category: String, quantity: u64, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            quantity,
            price,
        }
    }

    /// The id in the canonical form it is persisted and matched in.
    pub fn id_string(&self) -> String {
        self.id.hyphenated().to_string()
    }
}

/// Fields for a new product, as typed by the user.
///
/// Numbers stay textual until the create command coerces them.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

/// A partial update. `None` and blank strings both mean "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// True when no field would change anything.
    pub fn is_noop(&self) -> bool {
        supplied(&self.name).is_none()
            && supplied(&self.category).is_none()
            && supplied(&self.quantity).is_none()
            && supplied(&self.price).is_none()
    }
}

/// Returns the value only if it was given and is not blank.
pub fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn parse_quantity(input: &str) -> Result<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| StockError::InvalidQuantity(input.to_string()))
}

pub fn parse_price(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(StockError::InvalidPrice(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_quantities() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("0").unwrap(), 0);
    }

    #[test]
    fn rejects_bad_quantities() {
        assert!(matches!(
            parse_quantity("-1"),
            Err(StockError::InvalidQuantity(_))
        ));
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("lots").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn parses_prices() {
        assert_eq!(parse_price("9.99").unwrap(), 9.99);
        assert_eq!(parse_price("3").unwrap(), 3.0);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_prices() {
        assert!(matches!(parse_price("-0.5"), Err(StockError::InvalidPrice(_))));
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("cheap").is_err());
    }

    #[test]
    fn blank_fields_are_not_supplied() {
        assert_eq!(supplied(&None), None);
        assert_eq!(supplied(&Some(String::new())), None);
        assert_eq!(supplied(&Some("   ".into())), None);
        assert_eq!(supplied(&Some("x".into())), Some("x"));
    }

    #[test]
    fn update_with_only_blanks_is_noop() {
        assert!(ProductUpdate::new().is_noop());
        assert!(ProductUpdate::new().quantity("").name(" ").is_noop());
        assert!(!ProductUpdate::new().price("1").is_noop());
    }

    #[test]
    fn serializes_with_flat_fields() {
        let product = Product::new("Widget".into(), "Tools".into(), 5, 9.99);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], product.id_string());
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["category"], "Tools");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["price"], 9.99);
    }
}
