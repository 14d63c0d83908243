//! Application state for the payroll dashboard.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::FileStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers - here
/// just the handle to the flat-file employee store (the store itself keeps
/// no state between calls).
#[derive(Clone)]
pub struct AppState {
    /// The employee store.
    store: Arc<FileStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: FileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the employee store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }
}
