//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook, UpdateBook},
};

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Buku dengan ID {} tidak ditemukan", id))
}

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.books().to_vec())
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: u64) -> AppResult<Book> {
        self.books
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Create book
    pub async fn books_create(&self, book: NewBook) -> AppResult<Book> {
        Ok(self.books.write().await.add(book).clone())
    }

    /// Update book, overwriting only the supplied fields.
    ///
    /// The book must exist before the request is validated, and the change
    /// set is applied whole under the write lock.
    pub async fn books_update(&self, id: u64, request: UpdateBook) -> AppResult<Book> {
        let mut catalog = self.books.write().await;
        if catalog.get(id).is_none() {
            return Err(not_found(id));
        }
        let changes = request.validate()?;
        catalog
            .update(id, &changes)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Delete book, returning the removed record
    pub async fn books_delete(&self, id: u64) -> AppResult<Book> {
        self.books.write().await.remove(id).ok_or_else(|| not_found(id))
    }
}
