use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::http_client;
use crate::models::Post;

/// Body shown when a post's content cannot be located anywhere.
pub const MISSING_BODY_PLACEHOLDER: &str = "*Conteúdo não encontrado.*";

/// Where post bodies are looked up: remote first (when configured), then the
/// local content directory.
pub struct BodySources {
    pub base_url: Option<String>,
    pub content_dir: PathBuf,
}

impl BodySources {
    /// Resolve a post's markdown body.
    ///
    /// Failure is not an error at this level: the caller gets the fixed
    /// placeholder and the cause goes to the log.
    pub async fn load_post_body(&self, post: &Post) -> String {
        match self.try_load(post).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Body for '{}' unavailable: {:#}", post.slug, e);
                MISSING_BODY_PLACEHOLDER.to_string()
            }
        }
    }

    async fn try_load(&self, post: &Post) -> Result<String> {
        let rel_path = post.body_path();

        if let Some(base) = &self.base_url {
            let url = format!("{}{}", base.trim_end_matches('/'), rel_path);
            match self.fetch_remote(&url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    // Fall through to the local content dir
                    log::info!("Remote body fetch failed ({e:#}), trying local copy");
                }
            }
        }

        let path = self.content_dir.join(rel_path.trim_start_matches('/'));
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read local body {:?}", path))
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        let client = http_client()?;
        let body = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
