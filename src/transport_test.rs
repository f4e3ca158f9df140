use axum::Router;
use axum::routing::post;

use super::*;
use crate::test_support::{Endpoint, GOOD_PRESET, TempFile, config_for, spawn_endpoint, temp_file};

async fn local_file(name: &str, contents: &[u8]) -> (TempFile, LocalFile) {
    let tmp = temp_file(name, contents);
    let file = LocalFile::open(&tmp).await.expect("open");
    (tmp, file)
}

#[tokio::test]
async fn send_posts_file_and_preset() {
    let endpoint = Endpoint::default();
    let base = spawn_endpoint(endpoint.router()).await;
    let config = config_for(&base, GOOD_PRESET);
    let client = build_client(&config).expect("client");

    let (_tmp, file) = local_file("cat.png", b"png!").await;
    let url = send(&client, &config, &file).await.expect("upload");
    assert_eq!(url, "https://cdn.example/demo/cat.png?bytes=4&type=image/png");
    assert_eq!(endpoint.hits(), 1);
}

#[tokio::test]
async fn send_surfaces_remote_error_message() {
    let base = spawn_endpoint(Endpoint::default().router()).await;
    let config = config_for(&base, "wrong-preset");
    let client = build_client(&config).expect("client");

    let (_tmp, file) = local_file("cv.pdf", b"%PDF").await;
    let err = send(&client, &config, &file).await.unwrap_err();
    assert_eq!(err, UploadError::Remote("Invalid preset".to_owned()));
}

#[tokio::test]
async fn send_non_json_body_is_malformed() {
    let router = Router::new().route("/v1_1/{cloud}/auto/upload", post(|| async { "<html>bad gateway</html>" }));
    let base = spawn_endpoint(router).await;
    let config = config_for(&base, GOOD_PRESET);
    let client = build_client(&config).expect("client");

    let (_tmp, file) = local_file("cv.pdf", b"%PDF").await;
    let err = send(&client, &config, &file).await.unwrap_err();
    assert!(matches!(err, UploadError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn send_unreachable_endpoint_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let config = config_for(&format!("http://{addr}/v1_1"), GOOD_PRESET);
    let client = build_client(&config).expect("client");

    let (_tmp, file) = local_file("cv.pdf", b"%PDF").await;
    let err = send(&client, &config, &file).await.unwrap_err();
    assert!(matches!(err, UploadError::Transport(ref msg) if !msg.is_empty()), "{err:?}");
}

#[tokio::test]
async fn send_deleted_file_is_transport_error() {
    let (tmp, file) = local_file("gone.pdf", b"%PDF").await;
    std::fs::remove_file(&*tmp).expect("remove");
    let config = config_for("http://127.0.0.1:9/v1_1", GOOD_PRESET);
    let client = build_client(&config).expect("client");

    let err = send(&client, &config, &file).await.unwrap_err();
    assert!(matches!(err, UploadError::Transport(ref msg) if msg.starts_with("cannot read")), "{err:?}");
}
