use std::path::Path;

use uploader::{Rejection, SelectError};

use super::*;
use crate::test_support::{Endpoint, GOOD_PRESET, config_for, spawn_endpoint, temp_file};

async fn open(path: &Path) -> LocalFile {
    LocalFile::open(path).await.expect("open")
}

#[tokio::test]
async fn upload_reports_full_progress_on_success() {
    let endpoint = Endpoint::default();
    let base = spawn_endpoint(endpoint.router()).await;
    let config = config_for(&base, GOOD_PRESET);
    let client = transport::build_client(&config).expect("client");
    let tmp = temp_file("report.pdf", b"%PDF-1.7");
    let file = open(&tmp).await;

    let mut seen = Vec::new();
    let url = upload(&client, &config, file, futures::stream::pending::<()>(), |p| seen.push(p))
        .await
        .expect("upload");

    assert_eq!(url, "https://cdn.example/demo/report.pdf?bytes=8&type=application/pdf");
    assert_eq!(seen, vec![100]);
    assert_eq!(endpoint.hits(), 1);
}

#[tokio::test]
async fn upload_progress_is_monotonic_and_capped_before_success() {
    let endpoint = Endpoint::with_delay(Duration::from_millis(300));
    let base = spawn_endpoint(endpoint.router()).await;
    let config = config_for(&base, GOOD_PRESET);
    let client = transport::build_client(&config).expect("client");
    let tmp = temp_file("slow.png", b"png");
    let file = open(&tmp).await;

    let mut seen = Vec::new();
    upload(&client, &config, file, timer_ticks(Duration::from_millis(20)), |p| seen.push(p))
        .await
        .expect("upload");

    assert!(seen.len() > 1, "{seen:?}");
    assert_eq!(seen.last(), Some(&100));
    let (simulated, _) = seen.split_at(seen.len() - 1);
    assert!(simulated.iter().all(|p| *p <= 90), "{seen:?}");
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{seen:?}");
}

#[tokio::test]
async fn upload_remote_error_is_reported_verbatim() {
    let base = spawn_endpoint(Endpoint::default().router()).await;
    let config = config_for(&base, "typo");
    let client = transport::build_client(&config).expect("client");
    let tmp = temp_file("cat.gif", b"GIF89a");
    let file = open(&tmp).await;

    let err = upload(&client, &config, file, futures::stream::pending::<()>(), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Upload(ref msg) if msg == "Invalid preset"), "{err:?}");
    assert_eq!(err.to_string(), "Invalid preset");
}

#[tokio::test]
async fn upload_rejected_file_never_reaches_endpoint() {
    let endpoint = Endpoint::default();
    let base = spawn_endpoint(endpoint.router()).await;
    let config = config_for(&base, GOOD_PRESET);
    let client = transport::build_client(&config).expect("client");
    let tmp = temp_file("notes.txt", b"hello");
    let file = open(&tmp).await;

    let err = upload(&client, &config, file, futures::stream::pending::<()>(), |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Select(SelectError::Rejected(Rejection::UnsupportedType))));
    assert_eq!(err.to_string(), Rejection::UnsupportedType.to_string());
    assert_eq!(endpoint.hits(), 0);
}

#[test]
fn progress_line_matches_widget_label() {
    assert_eq!(progress_line(40), "Upload progress: 40%");
}
