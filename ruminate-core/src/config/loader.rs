//! File-backed configuration loading with environment substitution.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Result, RuminateError};

static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").expect("Invalid env var regex")
});

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON documents (`.json`).
    Json,
    /// TOML documents (`.toml`).
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown or missing extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(RuminateError::configuration(format!(
                "Unsupported configuration file {}: expected .json or .toml",
                path.display()
            ))),
        }
    }
}

/// Substitute environment variables in configuration content.
///
/// Supports the format `${VAR_NAME}` and `${VAR_NAME:default_value}`. Unset
/// variables without a default become the empty string.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_REGEX
        .replace_all(content, |caps: &Captures<'_>| {
            let default_value = caps.get(2).map_or("", |m| m.as_str());
            std::env::var(&caps[1]).unwrap_or_else(|_| default_value.to_string())
        })
        .into_owned()
}

/// Parse configuration content in the given format.
///
/// Environment references are substituted before parsing.
pub fn parse_config<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
    let content = substitute_env_vars(content);
    let config = match format {
        ConfigFormat::Json => serde_json::from_str(&content)?,
        ConfigFormat::Toml => toml::from_str(&content)?,
    };
    Ok(config)
}

/// Load a configuration struct from a JSON or TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or does not deserialize into `T`.
pub async fn load_config<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    debug!("Loading configuration file: {}", path.display());

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        RuminateError::configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&content, format)
}
