//! Application configuration.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::source::forkify::parse_base_url;

/// Default Forkify API root.
pub const DEFAULT_API_BASE: &str = "https://forkify-api.herokuapp.com";

/// Runtime configuration for the recipe application.
///
/// # Example
///
/// ```rust
/// use forkify_core::Config;
///
/// let config = Config {
///     results_per_page: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the recipe API.
    pub api_base: String,

    /// File holding the persisted likes.
    pub likes_path: PathBuf,

    /// Search results shown per page. Default: 10
    pub results_per_page: usize,

    /// Maximum characters of a result title before it is shortened. Default: 17
    pub title_limit: usize,

    /// Drop fetch responses that were overtaken by a newer request.
    ///
    /// With `false`, overlapping fetches resolve last-writer-wins: whichever
    /// completes last overwrites the state. Default: `true`
    pub discard_stale_responses: bool,

    /// Recipe id to load at startup, as if it were the initial location.
    pub initial_recipe: Option<String>,

    /// Tracing filter directive used when `RUST_LOG` is unset. Default: `"info"`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            likes_path: PathBuf::from("likes.json"),
            results_per_page: 10,
            title_limit: 17,
            discard_stale_responses: true,
            initial_recipe: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Check values that would make the application misbehave.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero page size or title limit, or an API base
    /// that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.results_per_page == 0 {
            return Err(ConfigError::Zero {
                field: "results_per_page",
            });
        }
        if self.title_limit == 0 {
            return Err(ConfigError::Zero { field: "title_limit" });
        }
        parse_base_url(&self.api_base)?;
        Ok(())
    }
}
