//! API integration tests
//!
//! Drives the axum router in-process with multipart uploads.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::*;
use locsheet::api::handlers::{ErrorResponse, PROCESSING_FAILED};
use locsheet::api::{router, ApiConfig, AppState};
use locsheet::types::{CombinedDictionary, LanguageDictionary};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "locsheet-test-boundary";

fn app() -> Router {
    router(Arc::new(AppState::from_config(&ApiConfig::default())))
}

/// A multipart part: (field name, optional file name, body)
type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

fn file_part(data: &[u8]) -> Part<'_> {
    ("file", Some("strings.xlsx"), data)
}

fn text_part<'a>(name: &'a str, value: &'a str) -> Part<'a> {
    (name, None, value.as_bytes())
}

fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn convert_request(parts: &[Part]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn app_workbook() -> Vec<u8> {
    xlsx(
        &APP_HEADER,
        &[
            app_label_row(),
            vec![T("greeting"), N(0.0), T("Merhaba"), T("Hello")],
            vec![
                T("terms"),
                N(1.0),
                T("Kabul ediyorum"),
                T("I agree"),
                T("Şartlar"),
                T("https://x/tr"),
                T("Terms"),
                T("https://x/en"),
            ],
        ],
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT ENDPOINT
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_convert_app_mode_default() {
    let workbook = app_workbook();
    let (status, body) = send(
        app(),
        convert_request(&[file_part(&workbook)]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["version"].as_str().unwrap().starts_with("1.0."));

    let tr: LanguageDictionary = serde_json::from_str(body["tr"].as_str().unwrap()).unwrap();
    let en: LanguageDictionary = serde_json::from_str(body["en"].as_str().unwrap()).unwrap();
    assert_eq!(tr["greeting"].default, "Merhaba");
    assert_eq!(en["terms"].links.as_ref().unwrap()[0].placeholder, "Terms");
    assert!(body.get("combined").is_none());
}

#[tokio::test]
async fn test_convert_backend_mode() {
    let workbook = xlsx(
        &BACKEND_HEADER,
        &[vec![T("save_button"), T("Save"), T("Kaydet")]],
    );
    let (status, body) = send(
        app(),
        convert_request(&[
            text_part("mode", "backend"),
            file_part(&workbook),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let combined: CombinedDictionary =
        serde_json::from_str(body["combined"].as_str().unwrap()).unwrap();
    assert_eq!(combined.en["save_button"].default, "Save");
    assert_eq!(combined.tr["save_button"].default, "Kaydet");
    assert!(body.get("tr").is_none());
}

#[tokio::test]
async fn test_convert_named_sheet() {
    let first_rows = [vec![T("from_first"), T("x"), T("y")]];
    let second_rows = [vec![T("from_second"), T("x"), T("y")]];
    let workbook = xlsx_sheets(&[
        ("First", &BACKEND_HEADER[..], &first_rows[..]),
        ("Second", &BACKEND_HEADER[..], &second_rows[..]),
    ]);

    let (status, body) = send(
        app(),
        convert_request(&[
            file_part(&workbook),
            text_part("mode", "backend"),
            text_part("sheet", "Second"),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["combined"].as_str().unwrap().contains("from_second"));
}

#[tokio::test]
async fn test_convert_sheet_by_index() {
    let first_rows = [vec![T("from_first"), T("x"), T("y")]];
    let second_rows = [vec![T("from_second"), T("x"), T("y")]];
    let workbook = xlsx_sheets(&[
        ("First", &BACKEND_HEADER[..], &first_rows[..]),
        ("Second", &BACKEND_HEADER[..], &second_rows[..]),
    ]);

    let (status, body) = send(
        app(),
        convert_request(&[
            file_part(&workbook),
            text_part("mode", "backend"),
            text_part("sheet_index", "1"),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let combined = body["combined"].as_str().unwrap();
    assert!(combined.contains("from_second"));
    assert!(!combined.contains("from_first"));
}

#[tokio::test]
async fn test_convert_non_numeric_sheet_index_is_client_error() {
    let workbook = app_workbook();
    let (status, body) = send(
        app(),
        convert_request(&[file_part(&workbook), text_part("sheet_index", "second")]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("'second'"));
}

#[tokio::test]
async fn test_convert_without_file_is_client_error() {
    let (status, body) = send(app(), convert_request(&[text_part("mode", "app")])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "No file provided");
}

#[tokio::test]
async fn test_convert_empty_file_part_is_client_error() {
    let (status, _) = send(
        app(),
        convert_request(&[("file", Some(""), &b""[..])]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_non_multipart_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_convert_unknown_mode_is_client_error() {
    let workbook = app_workbook();
    let (status, body) = send(
        app(),
        convert_request(&[
            text_part("mode", "mobile"),
            file_part(&workbook),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("mobile"));
}

#[tokio::test]
async fn test_convert_corrupt_file_is_server_error() {
    let (status, body) = send(
        app(),
        convert_request(&[file_part(b"garbage bytes")]),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": PROCESSING_FAILED }));
}

#[tokio::test]
async fn test_convert_upload_over_limit_is_rejected() {
    let config = ApiConfig {
        max_upload_bytes: 64,
        ..ApiConfig::default()
    };
    let small_app = router(Arc::new(AppState::from_config(&config)));
    let workbook = app_workbook();

    let (status, body) = send(small_app, convert_request(&[file_part(&workbook)])).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, serde_json::json!({ "error": "File too large" }));
}

// ═══════════════════════════════════════════════════════════════════════════
// INFO ENDPOINTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["request_id"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_version() {
    let request = Request::builder().uri("/version").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["data"]["modes"], serde_json::json!(["app", "backend"]));
}

#[tokio::test]
async fn test_root_lists_convert_endpoint() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let endpoints = body["data"]["endpoints"].as_array().unwrap();
    assert!(endpoints
        .iter()
        .any(|e| e["path"] == "/api/convert" && e["method"] == "POST"));
}
