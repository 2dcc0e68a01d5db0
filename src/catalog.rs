//! In-memory book catalog
//!
//! The catalog owns the ordered list of books and the counter used to assign
//! identifiers. The counter only moves forward, so an identifier freed by a
//! delete is never handed out again. Lookups are linear scans.

use crate::models::book::{Book, BookChanges, NewBook};

#[derive(Debug, Clone)]
pub struct BookCatalog {
    books: Vec<Book>,
    next_id: u64,
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCatalog {
    /// Create an empty catalog; the first book gets id 1
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog pre-filled with the sample collection
    pub fn with_sample_books() -> Self {
        let mut catalog = Self::new();
        catalog.add(NewBook::new("Harry Potter", "J.K. Rowling", 1997));
        catalog.add(NewBook::new("Laskar Pelangi", "Andrea Hirata", 2005));
        catalog.add(NewBook::new("Bumi Manusia", "Pramoedya Ananta Toer", 1980));
        catalog
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Identifier the next added book will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append a book under the next identifier
    pub fn add(&mut self, book: NewBook) -> &Book {
        let id = self.next_id;
        self.next_id += 1;
        self.books.push(Book {
            id,
            title: book.title,
            author: book.author,
            year: book.year,
        });
        &self.books[self.books.len() - 1]
    }

    pub fn update(&mut self, id: u64, changes: &BookChanges) -> Option<&Book> {
        let book = self.books.iter_mut().find(|b| b.id == id)?;
        book.apply(changes);
        Some(&*book)
    }

    /// Remove a book and return it
    pub fn remove(&mut self, id: u64) -> Option<Book> {
        let index = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(index))
    }

    /// Books whose title or author contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
