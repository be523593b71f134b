//! End-to-end runs of the reqwest transport against an in-process axum
//! server playing the question-answering backend.
#![cfg(feature = "native")]

use std::path::PathBuf;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use docqa::client::http::HttpBackend;
use docqa::config::Config;
use docqa::console::ConsoleView;
use docqa::service::{dispatch, Action};

async fn spawn_backend(app: Router) -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Config::new(format!("http://{addr}")).unwrap()
}

fn write_fixture(dir: &str, name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("docqa-{dir}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Accepts exactly one multipart part named `file`.
async fn index_upload(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let len = field.bytes().await.unwrap().len();
        parts.push((name, file_name, len));
    }

    match parts.as_slice() {
        [(name, file_name, len)] if name == "file" => (
            StatusCode::OK,
            Json(json!({"message": format!("Indexed {len} bytes from {file_name}")})),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("expected one 'file' part, got {parts:?}")})),
        ),
    }
}

async fn answer(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body.get("question").and_then(Value::as_str) {
        Some("What is the total?") => (StatusCode::OK, Json(json!({"answer": "$42"}))),
        Some(other) => (StatusCode::OK, Json(json!({"answer": format!("echo: {other}")}))),
        None => (StatusCode::BAD_REQUEST, Json(json!({"error": "Question is required"}))),
    }
}

#[tokio::test]
async fn upload_sends_only_the_first_file() {
    let config = spawn_backend(Router::new().route("/upload", post(index_upload))).await;
    let backend = HttpBackend::new(config).unwrap();
    let view = ConsoleView::new();
    let report = write_fixture("upload", "report.pdf", b"%PDF-1.4 ok");
    let extra = write_fixture("upload", "extra.txt", b"ignored");

    dispatch(&backend, &view, Action::Upload(vec![report, extra])).await;

    assert_eq!(view.status(), "Indexed 11 bytes from report.pdf");
    assert!(view.transcript().is_empty());
}

#[tokio::test]
async fn upload_server_error_is_prefixed() {
    let app = Router::new().route(
        "/upload",
        post(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "unsupported format"})))
        }),
    );
    let config = spawn_backend(app).await;
    let backend = HttpBackend::new(config).unwrap();
    let view = ConsoleView::new();
    let report = write_fixture("upload-error", "report.xyz", b"???");

    dispatch(&backend, &view, Action::Upload(vec![report])).await;

    assert_eq!(view.status(), "Error: unsupported format");
}

#[tokio::test]
async fn unreadable_file_is_an_upload_failure() {
    let backend = HttpBackend::new(Config::default()).unwrap();
    let view = ConsoleView::new();
    let missing = std::env::temp_dir().join("docqa-definitely-missing").join("gone.pdf");

    dispatch(&backend, &view, Action::Upload(vec![missing])).await;

    assert!(
        view.status().starts_with("Upload failed: could not read '"),
        "status was {:?}",
        view.status()
    );
}

#[tokio::test]
async fn ask_round_trip() {
    let config = spawn_backend(Router::new().route("/ask", post(answer))).await;
    let backend = HttpBackend::new(config).unwrap();
    let view = ConsoleView::new();

    dispatch(&backend, &view, Action::Ask("What is the total?".into())).await;

    let lines: Vec<_> = view.transcript().lines().collect();
    assert_eq!(lines, ["You: What is the total?", "AI: $42"]);
    assert_eq!(view.answer(), "$42");
}

#[tokio::test]
async fn ask_with_non_json_body_is_a_request_failure() {
    let app = Router::new().route(
        "/ask",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream timed out") }),
    );
    let config = spawn_backend(app).await;
    let backend = HttpBackend::new(config).unwrap();
    let view = ConsoleView::new();

    dispatch(&backend, &view, Action::Ask("anyone there?".into())).await;

    assert!(
        view.answer().starts_with("Request failed: response was not valid JSON"),
        "answer was {:?}",
        view.answer()
    );
    let lines: Vec<_> = view.transcript().lines().collect();
    assert_eq!(lines, ["You: anyone there?"]);
}

#[tokio::test]
async fn unreachable_backend_is_a_request_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let backend = HttpBackend::new(Config::new(format!("http://{addr}")).unwrap()).unwrap();
    let view = ConsoleView::new();

    dispatch(&backend, &view, Action::Ask("hello?".into())).await;

    let answer = view.answer();
    assert!(answer.starts_with("Request failed: error sending request"), "answer was {answer:?}");
    // The underlying connect failure is kept, not just reqwest's summary line.
    let detail = answer.split_once(")").map(|(_, rest)| rest).unwrap_or_default();
    assert!(detail.to_lowercase().contains("connect"), "answer was {answer:?}");
    assert_eq!(view.transcript().len(), 1);
}
