use std::path::PathBuf;

/// Errors that can occur while generating or reading role definitions.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// An input file does not exist. Recovered per phase.
    #[error("Could not find '{}'", path.display())]
    MissingInputFile { path: PathBuf },

    /// A table is too short to hold the category row, name row and one
    /// attribute row. Recovered per phase.
    #[error("Skipping {}: Not enough rows ({rows})", path.display())]
    MalformedTable { path: PathBuf, rows: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl GenerateError {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInputFile { path: path.into() }
    }

    pub fn malformed_table(path: impl Into<PathBuf>, rows: usize) -> Self {
        Self::MalformedTable {
            path: path.into(),
            rows,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether a phase that hit this error can be skipped while the run continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingInputFile { .. } | Self::MalformedTable { .. }
        )
    }
}
