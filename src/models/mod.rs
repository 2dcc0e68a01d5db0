//! Data models for Buku

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookChanges, CreateBook, NewBook, UpdateBook};
