use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Errors from the fallible edges of the crate.
///
/// Link extraction itself never fails; only loading configuration does.
#[derive(Debug, Error)]
pub enum LinkSieveError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, LinkSieveError>;
