use crate::error::Result;
use crate::model::Product;
use crate::store::ProductStore;

/// Products whose id contains `term` (case-sensitive) or whose name contains
/// it ignoring case. Storage order is kept.
pub fn run<S: ProductStore>(store: &S, term: &str) -> Result<Vec<Product>> {
    let products = store.read()?;
    let term_lower = term.to_lowercase();

    Ok(products
        .into_iter()
        .filter(|p| p.id_string().contains(term) || p.name.to_lowercase().contains(&term_lower))
        .collect())
}
