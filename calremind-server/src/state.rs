use calremind_core::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The store re-reads the data file on every call; clones share its write lock
    store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
