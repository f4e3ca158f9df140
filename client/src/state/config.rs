//! Build-time upload configuration.
//!
//! WASM has no process environment, so the endpoint settings are captured by
//! `option_env!` when the widget is compiled and parsed through the same
//! `UploadConfig::from_lookup` used by the CLI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use uploader::config::{API_BASE_VAR, CLOUD_NAME_VAR, TIMEOUT_SECS_VAR, UPLOAD_PRESET_VAR};
use uploader::{ConfigError, UploadConfig};

/// Look up a configuration key captured at compile time.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        CLOUD_NAME_VAR => option_env!("CLOUDINARY_CLOUD_NAME"),
        UPLOAD_PRESET_VAR => option_env!("CLOUDINARY_UPLOAD_PRESET"),
        API_BASE_VAR => option_env!("CLOUDINARY_API_BASE"),
        TIMEOUT_SECS_VAR => option_env!("CLOUDINARY_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Upload configuration for this build of the widget.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the build did not provide the cloud name or
/// upload preset.
pub fn widget_config() -> Result<UploadConfig, ConfigError> {
    UploadConfig::from_lookup(build_env)
}
