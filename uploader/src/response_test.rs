use super::*;

#[test]
fn success_body_yields_secure_url() {
    let body = br#"{"secure_url":"https://cdn.example/abc.png","public_id":"abc","bytes":123}"#;
    let url = UploadResponse::parse(body).expect("parse").into_result().expect("url");
    assert_eq!(url, "https://cdn.example/abc.png");
}

#[test]
fn error_body_yields_remote_message() {
    let body = br#"{"error":{"message":"Invalid preset"}}"#;
    let err = UploadResponse::parse(body).expect("parse").into_result().unwrap_err();
    assert_eq!(err, UploadError::Remote("Invalid preset".to_owned()));
    assert_eq!(err.user_message(), "Invalid preset");
}

#[test]
fn error_wins_over_url() {
    let body = br#"{"secure_url":"https://cdn.example/x.png","error":{"message":"nope"}}"#;
    let err = UploadResponse::parse(body).expect("parse").into_result().unwrap_err();
    assert_eq!(err, UploadError::Remote("nope".to_owned()));
}

#[test]
fn error_without_message_falls_back_to_generic() {
    let body = br#"{"error":{}}"#;
    let err = UploadResponse::parse(body).expect("parse").into_result().unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn missing_url_is_an_error() {
    let err = UploadResponse::parse(b"{}").expect("parse").into_result().unwrap_err();
    assert_eq!(err, UploadError::MissingUrl);
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn non_json_body_is_malformed() {
    let err = UploadResponse::parse(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, UploadError::Malformed(_)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn transport_message_is_shown_when_present() {
    assert_eq!(UploadError::Transport("Failed to fetch".to_owned()).user_message(), "Failed to fetch");
    assert_eq!(UploadError::Transport(String::new()).user_message(), GENERIC_FAILURE_MESSAGE);
}
