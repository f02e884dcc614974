use super::ProductStore;
use crate::error::Result;
use crate::model::Product;
use tracing::error;

/// Wraps a store so that storage failures never reach the caller.
///
/// Failed reads are logged and yield an empty collection. Failed writes are
/// logged and dropped. A corrupt file followed by a mutation therefore gets
/// overwritten with the new, smaller collection.
pub struct LenientStore<S> {
    inner: S,
}

impl<S: ProductStore> LenientStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ProductStore> ProductStore for LenientStore<S> {
    fn read(&self) -> Result<Vec<Product>> {
        match self.inner.read() {
            Ok(products) => Ok(products),
            Err(e) => {
                error!(error = %e, "failed to read products, continuing with none");
                Ok(Vec::new())
            }
        }
    }

    fn write(&mut self, products: &[Product]) -> Result<()> {
        if let Err(e) = self.inner.write(products) {
            error!(error = %e, count = products.len(), "failed to save products");
        }
        Ok(())
    }
}
