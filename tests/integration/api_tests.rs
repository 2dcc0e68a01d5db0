//! API integration tests

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use buku_server::{api, AppConfig, AppState, BookCatalog};

/// Serve the router on an ephemeral port and return its base URL
async fn spawn_server(catalog: BookCatalog) -> String {
    let state = AppState::new(AppConfig::default(), catalog);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_banner() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["message"], "Server Manajemen Buku API");
    assert!(body["endpoints"]["GET /api/buku"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/health", base)).await;

    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_seeded_books() {
    let base = spawn_server(BookCatalog::with_sample_books()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{}/api/buku", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["judul"], "Harry Potter");
    assert_eq!(body["data"][2]["id"], 3);
}

#[tokio::test]
async fn test_create_on_empty_catalog_then_get() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/buku", base))
        .json(&json!({ "judul": "X", "pengarang": "Y", "tahun": 2020 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    assert_eq!(body["data"]["id"], 1);

    let (status, body) = get_json(&client, format!("{}/api/buku/1", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": 1, "judul": "X", "pengarang": "Y", "tahun": 2020 })
    );
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let mut ids = Vec::new();
    for title in ["A", "B"] {
        let body: Value = client
            .post(format!("{}/api/buku", base))
            .json(&json!({ "judul": title, "pengarang": "P", "tahun": "2001" }))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");
        ids.push(body["data"]["id"].as_u64().expect("No book ID"));
    }

    let response = client
        .delete(format!("{}/api/buku/{}", base, ids[1]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = client
        .post(format!("{}/api/buku", base))
        .json(&json!({ "judul": "C", "pengarang": "P", "tahun": 2002 }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(ids, [1, 2]);
    assert_eq!(body["data"]["id"], 3);
}

#[tokio::test]
async fn test_create_with_missing_field() {
    let base = spawn_server(BookCatalog::with_sample_books()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/buku", base))
        .json(&json!({ "judul": "X", "tahun": 2020 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "Data tidak lengkap. Diperlukan: judul, pengarang, tahun"
    );

    let (_, body) = get_json(&client, format!("{}/api/buku", base)).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_create_with_invalid_year() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/buku", base))
        .json(&json!({ "judul": "X", "pengarang": "Y", "tahun": "next year" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");

    let (_, body) = get_json(&client, format!("{}/api/buku", base)).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_malformed_body() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/buku", base))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_partial_update() {
    let base = spawn_server(BookCatalog::with_sample_books()).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/buku/2", base))
        .json(&json!({ "tahun": 2006 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Buku berhasil diupdate");
    assert_eq!(
        body["data"],
        json!({ "id": 2, "judul": "Laskar Pelangi", "pengarang": "Andrea Hirata", "tahun": 2006 })
    );
}

#[tokio::test]
async fn test_update_with_bad_year_changes_nothing() {
    let base = spawn_server(BookCatalog::with_sample_books()).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/buku/1", base))
        .json(&json!({ "judul": "Changed", "tahun": "abc" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, body) = get_json(&client, format!("{}/api/buku/1", base)).await;
    assert_eq!(body["data"]["judul"], "Harry Potter");
}

#[tokio::test]
async fn test_update_missing_book() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/buku/99", base))
        .json(&json!({ "judul": "Nope" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Buku dengan ID 99 tidak ditemukan");
}

#[tokio::test]
async fn test_update_missing_book_with_bad_year_is_not_found() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/buku/99", base))
        .json(&json!({ "tahun": "abc" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Buku dengan ID 99 tidak ditemukan");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let base = spawn_server(BookCatalog::with_sample_books()).await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/buku/3", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Buku 'Bumi Manusia' berhasil dihapus");
    assert_eq!(body["data"]["pengarang"], "Pramoedya Ananta Toer");

    let (status, body) = get_json(&client, format!("{}/api/buku/3", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");

    let response = client
        .delete(format!("{}/api/buku/3", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    for path in ["/nope", "/api/buku/abc"] {
        let (status, body) = get_json(&client, format!("{}{}", base, path)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Endpoint tidak ditemukan");
    }
}

#[tokio::test]
async fn test_browser_client_is_served() {
    let base = spawn_server(BookCatalog::new()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/app", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("/api/buku"));
}
