//! Top-level error type for the `vista` binary.

use crate::config::ConfigError;
use crate::export::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VistaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// A `log` backend was already installed.
    #[error("Failed to initialise logging: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for VistaError {
    fn from(err: log::SetLoggerError) -> Self {
        VistaError::Logger(err.to_string())
    }
}
