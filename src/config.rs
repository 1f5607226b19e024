//! Host settings read from the process environment.

pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a TCP port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must not be blank")]
    BlankBind { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND.to_owned(), port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `PORTAL_BIND`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = match lookup("PORTAL_BIND") {
            None => DEFAULT_BIND.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::BlankBind { var: "PORTAL_BIND" }),
            Some(raw) => raw.trim().to_owned(),
        };
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port > 0)
                .ok_or(ConfigError::InvalidPort { var: "PORT", value: raw })?,
        };
        Ok(Self { bind, port })
    }

    /// # Errors
    ///
    /// See [`HostConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::info!(bind = %config.bind, port = config.port, "host config loaded");
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
