//! Error types for the example-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// The user name exceeds the storage cap.
    #[error("user name '{name}' exceeds {max} characters")]
    UserNameTooLong {
        /// Offending name.
        name: String,
        /// Maximum allowed length.
        max: usize,
    },

    /// The dataset lists no movies.
    #[error("dataset contains no movies")]
    EmptyMovies,

    /// A movie title exceeds the storage cap.
    #[error("movie title at index {index} exceeds {max} characters")]
    MovieTitleTooLong {
        /// Index of the movie in the list.
        index: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A movie year exceeds the storage cap.
    #[error("movie year '{year}' at index {index} exceeds {max} characters")]
    MovieYearTooLong {
        /// Index of the movie in the list.
        index: usize,
        /// Offending year value.
        year: String,
        /// Maximum allowed length.
        max: usize,
    },
}
