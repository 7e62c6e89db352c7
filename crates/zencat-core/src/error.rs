use thiserror::Error;

/// Errors produced while resolving [`crate::AppConfig`] from the
/// environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
