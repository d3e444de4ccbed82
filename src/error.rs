//! Error types for the recipe application core.
//!
//! Failures are grouped by the seam they come from: the recipe source, the
//! likes storage slot, and configuration. [`AppError`] is what the controller
//! reports to the user; it distinguishes only a failed search from a failed
//! recipe load.

use thiserror::Error;

/// Failure talking to the recipe source.
///
/// Cloneable so it can travel inside response events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The source answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Failure reading or writing the likes storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("invalid api base url {url:?}: {reason}")]
    ApiBase { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Failures surfaced to the user by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Network or parse error while searching.
    #[error("search failed: {0}")]
    Search(SourceError),

    /// Network or parse error while loading a recipe.
    #[error("recipe failed to load: {0}")]
    RecipeLoad(SourceError),
}

impl AppError {
    /// The alert shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Search(_) => "Something went wrong with the search query.",
            AppError::RecipeLoad(_) => "Error processing recipe.",
        }
    }
}

/// Result alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
