//! Style overrides read from a JSON file.
//!
//! Every key is optional; missing keys keep their defaults:
//!
//! ```json
//! { "node_fill": "#ffcc00", "palette": ["#ff0000", "#0000ff"], "spring_iterations": 250 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use graphgen::SettingsStyle;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a [`SettingsStyle`] from `path`.
///
/// # Errors
/// [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Json`] when it is not a valid style document.
pub fn load_style(path: &Path) -> Result<SettingsStyle, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let style = parse_style(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded style from {}", path.display());
    Ok(style)
}

fn parse_style(text: &str) -> Result<SettingsStyle, serde_json::Error> {
    serde_json::from_str(text)
}
