//! Error types for the Synograph library.
//!
//! All fallible operations return [`Result`], and every failure is
//! represented by the [`SynographError`] enum.
//!
//! # Examples
//!
//! ```
//! use synograph::error::{Result, SynographError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynographError::word_not_found("navire"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Synograph operations.
#[derive(Error, Debug)]
pub enum SynographError {
    /// I/O errors (reading thesaurus files, writing artifacts, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Thesaurus flat-file parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Graph construction errors
    #[error("Graph error: {0}")]
    Graph(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Graph artifact storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A queried word is absent from the rank lookup table
    #[error("Word not found: {0}")]
    WordNotFound(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SynographError.
pub type Result<T> = std::result::Result<T, SynographError>;

impl SynographError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SynographError::Parse(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        SynographError::Graph(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SynographError::Query(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SynographError::Storage(msg.into())
    }

    /// Create a new word-not-found error.
    pub fn word_not_found<S: Into<String>>(word: S) -> Self {
        SynographError::WordNotFound(word.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynographError::Other(msg.into())
    }
}
