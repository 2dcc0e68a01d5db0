//! Browser client

use axum::response::Html;

/// Single-page client that drives the book API
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../web/index.html"))
}
