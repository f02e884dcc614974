use crate::error::Result;
use crate::model::Product;
use crate::store::ProductStore;

pub fn run<S: ProductStore>(store: &S) -> Result<Vec<Product>> {
    store.read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_everything_in_storage_order() {
        let store = StoreFixture::new()
            .with_product("Hammer", "Tools", 3, 12.5)
            .with_product("Apple", "Food", 40, 0.3)
            .build();

        let products = run(&store).unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Hammer", "Apple"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }
}
