//! HTTP client for the Forkify recipe API.
//!
//! Endpoints:
//! - `GET {base}/api/search?q=<query>` → `{ "recipes": [ ... ] }`
//! - `GET {base}/api/get?rId=<id>` → `{ "recipe": { ... } }`

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::RecipeSource;
use crate::error::{ConfigError, SourceError};
use crate::models::{RawRecipe, RecipeSummary};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<SummaryBody>,
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: RecipeBody,
}

#[derive(Debug, Deserialize)]
struct RecipeBody {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<SummaryBody> for RecipeSummary {
    fn from(body: SummaryBody) -> Self {
        Self {
            id: body.recipe_id,
            title: body.title,
            author: body.publisher,
            img: body.image_url,
        }
    }
}

impl From<RecipeBody> for RawRecipe {
    fn from(body: RecipeBody) -> Self {
        Self {
            id: body.recipe_id,
            title: body.title,
            author: body.publisher,
            img: body.image_url,
            url: body.source_url,
            ingredients: body.ingredients,
        }
    }
}

/// [`RecipeSource`] backed by the Forkify HTTP API.
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ForkifyClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, param: &str, value: &str) -> Result<Url, SourceError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| SourceError::Transport(format!("invalid endpoint {path}: {e}")))?;
        url.query_pairs_mut().append_pair(param, value);
        Ok(url)
    }
}

/// Parse and normalize an API base so that relative joins append to it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::ApiBase {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn get_json<T: DeserializeOwned>(client: reqwest::Client, url: Url) -> Result<T, SourceError> {
    let response = client
        .get(url.clone())
        .header(header::ACCEPT, "application/json")
        .header(header::USER_AGENT, concat!("forkify-core/", env!("CARGO_PKG_VERSION")))
        .send()
        .await
        .map_err(|e| SourceError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::Transport(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| SourceError::Decode(e.to_string()))
}

impl RecipeSource for ForkifyClient {
    fn search(&self, query: String) -> BoxFuture<'static, Result<Vec<RecipeSummary>, SourceError>> {
        let client = self.client.clone();
        let url = self.endpoint("api/search", "q", &query);

        async move {
            let url = url?;
            tracing::debug!(%url, "searching recipes");
            let response: SearchResponse = get_json(client, url).await?;
            Ok(response.recipes.into_iter().map(RecipeSummary::from).collect())
        }
        .boxed()
    }

    fn fetch(&self, id: String) -> BoxFuture<'static, Result<RawRecipe, SourceError>> {
        let client = self.client.clone();
        let url = self.endpoint("api/get", "rId", &id);

        async move {
            let url = url?;
            tracing::debug!(%url, "fetching recipe");
            let response: RecipeResponse = get_json(client, url).await?;
            Ok(RawRecipe::from(response.recipe))
        }
        .boxed()
    }
}
