use crate::error::Result;
use crate::model::{parse_price, parse_quantity, Product, ProductDraft};
use crate::store::ProductStore;
use tracing::info;

pub fn run<S: ProductStore>(store: &mut S, draft: ProductDraft) -> Result<Product> {
    let quantity = parse_quantity(&draft.quantity)?;
    let price = parse_price(&draft.price)?;

    let mut products = store.read()?;
    let product = Product::new(draft.name, draft.category, quantity, price);
    products.push(product.clone());
    store.write(&products)?;

    info!(id = %product.id, name = %product.name, "product created");
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::error::StockError;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn creates_product_with_coerced_fields() {
        let mut store = InMemoryStore::new();
        let product = run(
            &mut store,
            ProductDraft::new("Widget", "Tools", "5", "9.99"),
        )
        .unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.category, "Tools");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, 9.99);

        let fetched = get::run(&store, &product.id_string()).unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[test]
    fn ids_are_unique() {
        let mut store = InMemoryStore::new();
        let ids: HashSet<_> = (0..50)
            .map(|i| {
                run(
                    &mut store,
                    ProductDraft::new(format!("Item {}", i), "Misc", "1", "1"),
                )
                .unwrap()
                .id
            })
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(store.products().len(), 50);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut store = InMemoryStore::new();
        run(&mut store, ProductDraft::new("Widget", "Tools", "1", "1")).unwrap();
        run(&mut store, ProductDraft::new("Widget", "Tools", "2", "2")).unwrap();
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, ProductDraft::new("First", "A", "1", "1")).unwrap();
        run(&mut store, ProductDraft::new("Second", "B", "1", "1")).unwrap();
        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn invalid_numbers_are_rejected_without_writing() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, ProductDraft::new("Widget", "Tools", "five", "1")).unwrap_err();
        assert!(matches!(err, StockError::InvalidQuantity(_)));

        let err = run(&mut store, ProductDraft::new("Widget", "Tools", "1", "-2")).unwrap_err();
        assert!(matches!(err, StockError::InvalidPrice(_)));

        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let result = run(&mut store, ProductDraft::new("Widget", "Tools", "1", "1"));
        assert!(matches!(result, Err(StockError::Store(_))));
    }
}
