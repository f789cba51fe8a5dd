use thiserror::Error;

use fm_roles_lib::GenerateError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Generator or roles file error
    #[error("{0}")]
    Generate(#[from] GenerateError),

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),
}

impl CliError {
    pub(crate) fn logger(msg: impl Into<String>) -> Self {
        Self::Logger(msg.into())
    }
}
