//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: u64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await.map_err(|e| {
            tracing::debug!("Catalog lookup: book id={} not found", id);
            e
        })
    }

    /// Validate and store a new book
    pub async fn create_book(&self, request: CreateBook) -> AppResult<Book> {
        let book = request.validate()?;
        let created = self.repository.books_create(book).await?;
        tracing::info!("Catalog create: added book id={} '{}'", created.id, created.title);
        Ok(created)
    }

    /// Apply a partial update to an existing book.
    /// A bad year leaves the stored book untouched.
    pub async fn update_book(&self, id: u64, request: UpdateBook) -> AppResult<Book> {
        let updated = self.repository.books_update(id, request).await?;
        tracing::info!("Catalog update: book id={} updated", id);
        Ok(updated)
    }

    /// Delete a book and return its last state
    pub async fn delete_book(&self, id: u64) -> AppResult<Book> {
        let removed = self.repository.books_delete(id).await?;
        tracing::info!("Catalog delete: removed book id={} '{}'", removed.id, removed.title);
        Ok(removed)
    }
}
