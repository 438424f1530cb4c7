//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeovizTypesError {
    /// A coordinate pair could not be parsed from its text representation.
    #[error("invalid coordinate pair '{0}', expected '<lat>,<lon>'")]
    InvalidCoordinates(String),
}
