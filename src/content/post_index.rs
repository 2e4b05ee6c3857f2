use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_CONTENT_SOURCES;
use crate::data::http_client;
use crate::models::{Post, PostCollection};

/// Bundled fallback index; keeps the blog readable with no network and no
/// local content directory.
const FALLBACK_INDEX_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/posts.json"));

#[async_trait]
pub trait LoadPostIndex: Send + Sync {
    // Either load the raw post index OR return an anyhow::error
    async fn load_post_index(&self) -> Result<Vec<Post>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Walk the source chain; first success wins.
pub async fn resolve_post_index(
    implementations: &[Box<dyn LoadPostIndex>],
) -> Result<(PostCollection, &'static str)> {
    for imp in implementations {
        match imp.load_post_index().await {
            Ok(posts) => {
                let signature = imp.signature();
                #[cfg(debug_assertions)]
                if PRINT_CONTENT_SOURCES {
                    log::info!("Post index resolved via {} ({} posts)", signature, posts.len());
                }
                return Ok((PostCollection::from_index(signature, posts), signature));
            }
            Err(e) => {
                log::info!("Error with a post index source: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All post index sources failed"))
}

// ============================================================================
// Sources
// ============================================================================

/// `GET <base_url>/posts.json`
pub struct RemotePostIndex {
    pub base_url: String,
}

#[async_trait]
impl LoadPostIndex for RemotePostIndex {
    fn signature(&self) -> &'static str {
        "Remote index"
    }

    async fn load_post_index(&self) -> Result<Vec<Post>> {
        let url = format!("{}/posts.json", self.base_url.trim_end_matches('/'));
        let client = http_client()?;

        let posts: Vec<Post> = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Malformed post index at {url}"))?;

        // An empty remote index must not wipe the previously held posts
        if posts.is_empty() {
            bail!("Remote index at {} is empty", url);
        }
        Ok(posts)
    }
}

/// `<content_dir>/posts.json` on the local filesystem
pub struct LocalPostIndex {
    pub content_dir: PathBuf,
}

#[async_trait]
impl LoadPostIndex for LocalPostIndex {
    fn signature(&self) -> &'static str {
        "Local content dir"
    }

    async fn load_post_index(&self) -> Result<Vec<Post>> {
        let path = self.content_dir.join("posts.json");
        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read local index {:?}", path))?;

        let posts: Vec<Post> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed local index {:?}", path))?;
        if posts.is_empty() {
            bail!("Local index {:?} is empty", path);
        }
        Ok(posts)
    }
}

/// Index compiled into the binary. Never fails; terminates every chain.
pub struct EmbeddedPostIndex;

#[async_trait]
impl LoadPostIndex for EmbeddedPostIndex {
    fn signature(&self) -> &'static str {
        "Embedded fallback"
    }

    async fn load_post_index(&self) -> Result<Vec<Post>> {
        serde_json::from_str(FALLBACK_INDEX_JSON).context("Embedded post index is malformed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_index_parses_and_terminates_chain() {
        let providers: Vec<Box<dyn LoadPostIndex>> = vec![Box::new(EmbeddedPostIndex)];
        let (collection, signature) = resolve_post_index(&providers)
            .await
            .expect("embedded index must always load");

        assert_eq!(signature, "Embedded fallback");
        assert!(!collection.is_empty());
        // Invariant: slugs unique after from_index
        let mut slugs: Vec<&str> = collection.posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), collection.len());
    }

    #[tokio::test]
    async fn test_chain_falls_through_failing_source() {
        struct AlwaysFails;

        #[async_trait]
        impl LoadPostIndex for AlwaysFails {
            fn signature(&self) -> &'static str {
                "Always fails"
            }
            async fn load_post_index(&self) -> Result<Vec<Post>> {
                bail!("nope")
            }
        }

        let providers: Vec<Box<dyn LoadPostIndex>> =
            vec![Box::new(AlwaysFails), Box::new(EmbeddedPostIndex)];
        let (_, signature) = resolve_post_index(&providers).await.unwrap();
        assert_eq!(signature, "Embedded fallback");
    }

    #[tokio::test]
    async fn test_missing_local_dir_is_an_error() {
        let source = LocalPostIndex {
            content_dir: PathBuf::from("/definitely/not/here"),
        };
        assert!(source.load_post_index().await.is_err());
    }
}
