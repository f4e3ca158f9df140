//! Networking for the media-hosting endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends the multipart upload via `gloo-net` and maps every failure
//! into `uploader::UploadError`.

pub mod api;
