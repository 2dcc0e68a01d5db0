//! Service banner and health check endpoints

use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Banner describing the service and its routes
#[derive(Serialize)]
pub struct ServiceBanner {
    pub message: String,
    pub status: String,
    pub endpoints: IndexMap<&'static str, &'static str>,
}

/// Service banner listing the available routes
pub async fn home() -> Json<ServiceBanner> {
    let endpoints = IndexMap::from([
        ("GET /api/buku", "Mendapatkan semua buku"),
        ("GET /api/buku/<id>", "Mendapatkan buku berdasarkan ID"),
        ("POST /api/buku", "Menambah buku baru"),
        ("PUT /api/buku/<id>", "Update buku"),
        ("DELETE /api/buku/<id>", "Hapus buku"),
        ("GET /app", "Antarmuka web"),
        ("GET /swagger-ui", "Dokumentasi API"),
    ]);

    Json(ServiceBanner {
        message: "Server Manajemen Buku API".to_string(),
        status: "running".to_string(),
        endpoints,
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
