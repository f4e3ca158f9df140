//! Upload endpoint configuration.
//!
//! Required:
//! - `CLOUDINARY_CLOUD_NAME`: account namespace in the upload URL
//! - `CLOUDINARY_UPLOAD_PRESET`: preset/policy the endpoint applies
//!
//! Optional:
//! - `CLOUDINARY_API_BASE`: default `https://api.cloudinary.com/v1_1`
//! - `CLOUDINARY_TIMEOUT_SECS`: request timeout in whole seconds (> 0), default 60

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CLOUD_NAME_VAR: &str = "CLOUDINARY_CLOUD_NAME";
pub const UPLOAD_PRESET_VAR: &str = "CLOUDINARY_UPLOAD_PRESET";
pub const API_BASE_VAR: &str = "CLOUDINARY_API_BASE";
pub const TIMEOUT_SECS_VAR: &str = "CLOUDINARY_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Resource-kind path segment; `auto` lets the endpoint detect the type.
pub const RESOURCE_KIND: &str = "auto";

/// Multipart field carrying the file bytes.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the upload preset name.
pub const PRESET_FIELD: &str = "upload_preset";

/// Errors produced while assembling an [`UploadConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing upload configuration: {var} not set")]
    Missing { var: &'static str },

    /// A setting is present but could not be parsed.
    #[error("invalid upload configuration: {var}={value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl UploadConfig {
    /// Build config from any key/value source.
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the cloud name or upload preset is
    /// absent, and [`ConfigError::Invalid`] when the timeout is not a positive
    /// number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let cloud_name = get(CLOUD_NAME_VAR).ok_or(ConfigError::Missing { var: CLOUD_NAME_VAR })?;
        let upload_preset = get(UPLOAD_PRESET_VAR).ok_or(ConfigError::Missing { var: UPLOAD_PRESET_VAR })?;
        let api_base = get(API_BASE_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let timeout_secs = match get(TIMEOUT_SECS_VAR) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Invalid { var: TIMEOUT_SECS_VAR, value: raw }),
            },
        };

        Ok(Self { cloud_name, upload_preset, api_base, timeout_secs })
    }

    /// Full upload URL: `{api_base}/{cloud_name}/auto/upload`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/{}/{RESOURCE_KIND}/upload", self.api_base, self.cloud_name)
    }
}
