//! Error types for the TVmaze client
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all TVmaze client operations
///
/// Transport failures, non-2xx responses and malformed bodies all surface
/// here; nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    /// Response body did not match the expected JSON shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Clicked entry is not part of the current show list
    #[error("Show entry not found: {0}")]
    EntryNotFound(u64),
}

impl From<serde_json::Error> for TvMazeError {
    fn from(err: serde_json::Error) -> Self {
        TvMazeError::MalformedResponse(err.to_string())
    }
}

impl Serialize for TvMazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVmaze operations
pub type Result<T> = std::result::Result<T, TvMazeError>;
