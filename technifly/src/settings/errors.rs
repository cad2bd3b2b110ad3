use thiserror::Error;

/// Errors emitted while resolving launch settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// Reading the theme overrides file failed.
    #[error("theme file IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// The theme overrides file is not valid JSON.
    #[error("theme file JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A theme variable was assigned a malformed color.
    #[error("invalid color {value:?} for {variable}")]
    InvalidColor { variable: String, value: String },
}
