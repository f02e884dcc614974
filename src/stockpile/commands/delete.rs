use super::position_of;
use crate::error::Result;
use crate::store::ProductStore;
use tracing::info;

/// Removes the product with this id. Returns whether anything was removed.
pub fn run<S: ProductStore>(store: &mut S, id: &str) -> Result<bool> {
    let mut products = store.read()?;
    let Some(index) = position_of(&products, id) else {
        return Ok(false);
    };

    let removed = products.remove(index);
    store.write(&products)?;

    info!(id = %removed.id, name = %removed.name, "product deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_existing_product() {
        let mut store = StoreFixture::new().with_products(3).build();
        let id = store.products()[1].id_string();

        assert!(run(&mut store, &id).unwrap());
        assert_eq!(get::run(&store, &id).unwrap(), None);
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn missing_id_returns_false_and_keeps_collection() {
        let mut store = StoreFixture::new().with_products(3).build();

        assert!(!run(&mut store, "not-an-id").unwrap());
        assert_eq!(store.products().len(), 3);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn keeps_order_of_remaining_products() {
        let mut store = StoreFixture::new().with_products(3).build();
        let id = store.products()[0].id_string();
        run(&mut store, &id).unwrap();

        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Test Product 2", "Test Product 3"]);
    }
}
