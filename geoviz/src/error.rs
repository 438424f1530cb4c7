//! Error types used by the crate.

use thiserror::Error;

/// Geoviz error type.
#[derive(Debug, Error)]
pub enum GeovizError {
    /// Network error while loading a remote resource.
    #[error("failed to load data: {0}")]
    Io(String),
    /// The data could not be parsed as CSV or a record did not match the expected shape.
    #[error("failed to decode csv data: {0}")]
    Csv(#[from] csv::Error),
    /// A column required to build incidents is absent from the table.
    #[error("column '{0}' not found")]
    MissingColumn(String),
    /// A value in the table could not be converted to the requested type.
    #[error("invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue {
        /// Column name.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// Raw cell content.
        value: String,
    },
    /// Invalid builder or argument combination.
    #[error("{0}")]
    Configuration(String),
    /// Error reading/writing data to the FS.
    #[error("{0}")]
    FsIo(String),
    /// Error serializing values into the rendered document.
    #[error("failed to serialize: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GeovizError {
    fn from(value: reqwest::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<std::io::Error> for GeovizError {
    fn from(value: std::io::Error) -> Self {
        Self::FsIo(value.to_string())
    }
}
