use super::position_of;
use crate::error::Result;
use crate::model::Product;
use crate::store::ProductStore;

pub fn run<S: ProductStore>(store: &S, id: &str) -> Result<Option<Product>> {
    let mut products = store.read()?;
    Ok(position_of(&products, id).map(|i| products.swap_remove(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_exact_id() {
        let store = StoreFixture::new().with_products(3).build();
        let target = store.products()[1].clone();

        let found = run(&store, &target.id_string()).unwrap();
        assert_eq!(found, Some(target));
    }

    #[test]
    fn partial_or_unknown_ids_are_absent() {
        let store = StoreFixture::new().with_products(1).build();
        let id = store.products()[0].id_string();

        assert_eq!(run(&store, &id[..8]).unwrap(), None);
        assert_eq!(run(&store, &id.to_uppercase()).unwrap(), None);
        assert_eq!(run(&store, "nope").unwrap(), None);
    }
}
