//! Book catalog endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    AppState,
};

use super::{BookId, Envelope, JsonBody};

/// List all books
#[utoipa::path(
    get,
    path = "/api/buku",
    tag = "books",
    responses(
        (status = 200, description = "Envelope with every book in `data` and the count in `total`", body = [Book])
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Book>>>> {
    let books = state.services.catalog.list_books().await?;
    let total = books.len();
    Ok(Json(Envelope::success(books).with_total(total)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/buku/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Envelope with the book in `data`", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Envelope<Book>>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(Envelope::success(book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/buku",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Envelope with the created book in `data`", body = Book),
        (status = 400, description = "Missing field, invalid year or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Envelope<Book>>)> {
    let created = state.services.catalog.create_book(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(created).with_message("Buku berhasil ditambahkan")),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/buku/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Envelope with the updated book in `data`", body = Book),
        (status = 400, description = "Invalid year or malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonBody(request): JsonBody<UpdateBook>,
) -> AppResult<Json<Envelope<Book>>> {
    let updated = state.services.catalog.update_book(id, request).await?;
    Ok(Json(
        Envelope::success(updated).with_message("Buku berhasil diupdate"),
    ))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/buku/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Envelope with the deleted book in `data`", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Envelope<Book>>> {
    let removed = state.services.catalog.delete_book(id).await?;
    let message = format!("Buku '{}' berhasil dihapus", removed.title);
    Ok(Json(Envelope::success(removed).with_message(message)))
}
