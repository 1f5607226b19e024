//! Client configuration baked in at build time.
//!
//! The browser has no process environment, so `from_env` reads the
//! `PORTAL_*` variables through `option_env!` when the WASM bundle is built.

use crate::state::attachment::MAX_ATTACHMENT_BYTES;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_MAX_UPLOAD_MB: u64 = MAX_ATTACHMENT_BYTES / BYTES_PER_MB;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of megabytes, got '{value}'")]
    InvalidUploadLimit { var: &'static str, value: String },
    #[error("{var} must not be blank")]
    BlankApiBase { var: &'static str },
}

/// Settings shared with components through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Prefix of every REST endpoint, without a trailing slash.
    pub api_base: String,
    pub max_upload_bytes: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), max_upload_bytes: MAX_ATTACHMENT_BYTES }
    }
}

impl PortalConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE`: default `/api`
    /// - `PORTAL_MAX_UPLOAD_MB`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = match lookup("PORTAL_API_BASE") {
            None => DEFAULT_API_BASE.to_owned(),
            Some(raw) => {
                if raw.trim().is_empty() {
                    return Err(ConfigError::BlankApiBase { var: "PORTAL_API_BASE" });
                }
                raw.trim().trim_end_matches('/').to_owned()
            }
        };
        let max_upload_mb = match lookup("PORTAL_MAX_UPLOAD_MB") {
            None => DEFAULT_MAX_UPLOAD_MB,
            Some(raw) => parse_megabytes("PORTAL_MAX_UPLOAD_MB", &raw)?,
        };
        Ok(Self { api_base, max_upload_bytes: max_upload_mb * BYTES_PER_MB })
    }

    /// Config from the build environment, falling back to defaults (with a
    /// warning) when a value is unusable.
    #[must_use]
    pub fn from_env() -> Self {
        let lookup = |key: &str| match key {
            "PORTAL_API_BASE" => option_env!("PORTAL_API_BASE").map(str::to_owned),
            "PORTAL_MAX_UPLOAD_MB" => option_env!("PORTAL_MAX_UPLOAD_MB").map(str::to_owned),
            _ => None,
        };
        Self::from_lookup(lookup).unwrap_or_else(|err| {
            log::warn!("invalid portal config, using defaults: {err}");
            Self::default()
        })
    }
}

fn parse_megabytes(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(mb) if mb > 0 && mb <= u64::MAX / BYTES_PER_MB => Ok(mb),
        _ => Err(ConfigError::InvalidUploadLimit { var, value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
