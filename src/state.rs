use crate::{db::DbPool, store::ProductStore};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            products: ProductStore::new(pool),
        }
    }
}
