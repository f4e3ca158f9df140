//! Widget state bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the upload endpoint settings baked in at build time and
//! `file` adapts browser files and object URLs to the `uploader` traits.
//! `selection` is the render snapshot the uploader card memoizes. The
//! state machine itself is `uploader::Uploader`, held in a local signal by the
//! uploader card.

pub mod config;
#[cfg(feature = "csr")]
pub mod file;
pub mod selection;
