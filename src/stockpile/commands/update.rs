use super::position_of;
use crate::error::Result;
use crate::model::{parse_price, parse_quantity, supplied, Product, ProductUpdate};
use crate::store::ProductStore;
use tracing::info;

/// Applies a partial update. Blank or missing fields keep their current value.
///
/// Returns `Ok(None)` without writing when no product has this id. Numeric
/// fields are parsed before anything is changed, so a bad number leaves the
/// stored record untouched.
pub fn run<S: ProductStore>(
    store: &mut S,
    id: &str,
    update: &ProductUpdate,
) -> Result<Option<Product>> {
    let mut products = store.read()?;
    let Some(index) = position_of(&products, id) else {
        return Ok(None);
    };

    let quantity = supplied(&update.quantity).map(parse_quantity).transpose()?;
    let price = supplied(&update.price).map(parse_price).transpose()?;

    let product = &mut products[index];
    if let Some(name) = supplied(&update.name) {
        product.name = name.to_string();
    }
    if let Some(category) = supplied(&update.category) {
        product.category = category.to_string();
    }
    if let Some(quantity) = quantity {
        product.quantity = quantity;
    }
    if let Some(price) = price {
        product.price = price;
    }

    let updated = product.clone();
    store.write(&products)?;

    info!(id = %updated.id, "product updated");
    Ok(Some(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn widget_store() -> (InMemoryStore, String) {
        let store = StoreFixture::new()
            .with_product("Widget", "Tools", 5, 9.99)
            .build();
        let id = store.products()[0].id_string();
        (store, id)
    }

    #[test]
    fn blank_quantity_keeps_current_value() {
        let (mut store, id) = widget_store();
        let updated = run(&mut store, &id, &ProductUpdate::new().quantity(""))
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.category, "Tools");
        assert_eq!(updated.price, 9.99);
    }

    #[test]
    fn supplied_quantity_overwrites_only_quantity() {
        let (mut store, id) = widget_store();
        let updated = run(&mut store, &id, &ProductUpdate::new().quantity("10"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 10);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.category, "Tools");
        assert_eq!(updated.price, 9.99);
        assert_eq!(store.products()[0], updated);
    }

    #[test]
    fn updates_several_fields_and_keeps_id() {
        let (mut store, id) = widget_store();
        let update = ProductUpdate::new()
            .name("Gadget")
            .category("")
            .price("19.5");
        let updated = run(&mut store, &id, &update).unwrap().unwrap();
        assert_eq!(updated.id_string(), id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.category, "Tools");
        assert_eq!(updated.price, 19.5);
    }

    #[test]
    fn explicit_zero_is_applied() {
        let (mut store, id) = widget_store();
        let updated = run(&mut store, &id, &ProductUpdate::new().quantity("0"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 0);
    }

    #[test]
    fn missing_id_does_not_write() {
        let (mut store, _) = widget_store();
        let result = run(&mut store, "missing", &ProductUpdate::new().name("X")).unwrap();
        assert!(result.is_none());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn bad_number_leaves_record_untouched() {
        let (mut store, id) = widget_store();
        let update = ProductUpdate::new().name("Renamed").quantity("-3");
        let err = run(&mut store, &id, &update).unwrap_err();
        assert!(matches!(err, StockError::InvalidQuantity(_)));
        assert_eq!(store.products()[0].name, "Widget");
        assert_eq!(store.write_count(), 0);
    }
}
