//! Content-retrieval collaborator.
//!
//! Pulls a user's posts from an upstream timeline API, page by page, and
//! sanitizes them into one newline-joined text. The ledger core never sees
//! any of this: the append endpoint only hands it the digest of the
//! identifier.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::SourceConfig;

/// Posts per page; the upstream API maximum.
const PAGE_SIZE: usize = 200;

/// One post as returned by the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(rename = "created_at", default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "id_str", default)]
    pub id: String,
}

/// Errors from content retrieval.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport or body-decoding failure from the HTTP client.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Client for the upstream timeline API.
///
/// Holds its full configuration explicitly; nothing is read from the
/// environment at call time.
pub struct ContentSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl ContentSource {
    /// Create a source over a fresh HTTP client.
    pub fn new(config: SourceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch and sanitize all available posts for `identifier`.
    ///
    /// Pages through the timeline until the upstream stops advancing or the
    /// configured page limit is reached, then joins the sanitized texts
    /// with newlines.
    pub async fn fetch_text(&self, identifier: &str) -> Result<String, SourceError> {
        let mut texts: Vec<String> = Vec::new();
        let mut max_id: Option<String> = None;

        for page in 0..self.config.page_limit {
            let posts = self.fetch_page(identifier, max_id.as_deref()).await?;
            if posts.is_empty() {
                break;
            }

            let last_id = posts.last().map(|p| p.id.clone());
            debug!(page, count = posts.len(), "fetched timeline page");

            for post in &posts {
                texts.push(sanitize(&post.text));
            }

            // The upstream signals the final page by repeating the cursor.
            if last_id == max_id {
                break;
            }
            max_id = last_id;
        }

        Ok(texts.join("\n"))
    }

    async fn fetch_page(
        &self,
        identifier: &str,
        max_id: Option<&str>,
    ) -> Result<Vec<Post>, SourceError> {
        let count = PAGE_SIZE.to_string();
        let mut request = self
            .client
            .get(format!(
                "{}/statuses/user_timeline.json",
                self.config.base_url
            ))
            .query(&[
                ("screen_name", identifier),
                ("include_rts", "false"),
                ("count", count.as_str()),
            ]);

        if let Some(id) = max_id {
            request = request.query(&[("max_id", id)]);
        }
        if !self.config.token.is_empty() {
            request = request.bearer_auth(&self.config.token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Strip @-mentions and links from a post's text.
fn sanitize(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !token.starts_with('@') && !token.starts_with("http"))
        .collect::<Vec<_>>()
        .join(" ")
}
