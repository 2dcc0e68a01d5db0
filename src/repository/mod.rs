//! Repository layer over the in-memory catalog

pub mod books;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::BookCatalog;

/// Main repository struct holding the shared catalog
#[derive(Clone)]
pub struct Repository {
    books: Arc<RwLock<BookCatalog>>,
}

impl Repository {
    /// Create a new repository around the given catalog
    pub fn new(catalog: BookCatalog) -> Self {
        Self {
            books: Arc::new(RwLock::new(catalog)),
        }
    }
}
