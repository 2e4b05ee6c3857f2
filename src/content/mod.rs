// Blog content: post index sources, body loading, search, rendering

pub mod markdown;
pub mod post_body;
pub mod post_index;
pub mod search;

// Re-export commonly used items
pub use markdown::render_markdown;
pub use post_body::{BodySources, MISSING_BODY_PLACEHOLDER};
pub use post_index::{EmbeddedPostIndex, LoadPostIndex, LocalPostIndex, RemotePostIndex};
pub use search::filter_posts;

use std::path::PathBuf;

use anyhow::Result;

use crate::Cli;
use crate::config::{ENDPOINTS, PERSISTENCE};
use crate::models::PostCollection;

/// Resolve the post index through the configured source chain.
///
/// Offline runs skip the remote source entirely. The embedded fallback
/// terminates every chain, so this only fails on a broken build.
pub async fn fetch_post_index(args: &Cli) -> Result<(PostCollection, &'static str)> {
    let mut sources: Vec<Box<dyn LoadPostIndex>> = Vec::new();

    if !args.offline {
        sources.push(Box::new(RemotePostIndex {
            base_url: content_base_url(args),
        }));
    }
    sources.push(Box::new(LocalPostIndex {
        content_dir: PathBuf::from(PERSISTENCE.content_dir),
    }));
    sources.push(Box::new(EmbeddedPostIndex));

    post_index::resolve_post_index(&sources).await
}

/// Body lookup matching the index source order.
pub fn body_sources(args: &Cli) -> BodySources {
    BodySources {
        base_url: (!args.offline).then(|| content_base_url(args)),
        content_dir: PathBuf::from(PERSISTENCE.content_dir),
    }
}

fn content_base_url(args: &Cli) -> String {
    args.content_url
        .clone()
        .unwrap_or_else(|| ENDPOINTS.content.base_url.to_string())
}
