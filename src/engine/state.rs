use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_STATE_MESSAGES;
use crate::content::filter_posts;
use crate::models::{DashboardData, Post, PostCollection};

use super::messages::StateMessage;

// ============================================================================
// Theme preference
// ============================================================================

/// Light/dark flag persisted across sessions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// On-disk wrapper for the theme flag: read once at startup, written on
/// every change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ThemePreference {
    pub theme: Theme,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { theme: Theme::Dark }
    }
}

impl ThemePreference {
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Theme preference file unreadable ({e}), using default");
                Self::default()
            }),
            // First run: no file yet
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write theme preference {:?}", path))
    }
}

// ============================================================================
// AppState: blog-side UI state
// ============================================================================

/// Owned by the orchestration layer and mutated only through `apply`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub posts: PostCollection,
    pub index_source: &'static str,
    /// slug -> loaded markdown body (lazy, grows as posts are opened)
    pub bodies: HashMap<String, String>,
    pub query: String,
    pub active_slug: Option<String>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(posts: PostCollection, index_source: &'static str, theme: Theme) -> Self {
        Self {
            posts,
            index_source,
            bodies: HashMap::new(),
            query: String::new(),
            active_slug: None,
            theme,
        }
    }

    /// Apply one state message.
    /// Returns true when the theme changed, so the caller can persist the
    /// preference on every change.
    pub fn apply(&mut self, msg: StateMessage) -> bool {
        #[cfg(debug_assertions)]
        if PRINT_STATE_MESSAGES {
            log::info!("Applying state message: {:?}", msg);
        }

        match msg {
            StateMessage::SetQuery(query) => {
                self.query = query;
            }
            StateMessage::OpenPost(slug) => {
                if self.posts.get(&slug).is_some() {
                    self.active_slug = Some(slug);
                } else {
                    log::warn!("Ignoring OpenPost for unknown slug '{}'", slug);
                }
            }
            StateMessage::ClosePost => {
                self.active_slug = None;
            }
            StateMessage::BodyLoaded { slug, body } => {
                self.bodies.insert(slug, body);
            }
            StateMessage::IndexReplaced { posts, source } => {
                if posts.is_empty() {
                    // A failed/empty load keeps the previously held collection
                    log::warn!(
                        "Ignoring empty index from {}; keeping {} posts from {}",
                        source,
                        self.posts.len(),
                        self.index_source
                    );
                } else {
                    self.posts = PostCollection::from_index(source, posts);
                    self.index_source = source;
                }
            }
            StateMessage::ToggleTheme => {
                self.theme = self.theme.toggled();
                return true;
            }
        }
        false
    }

    /// The post list the presentation layer shows for the current query.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_posts(&self.posts.posts, &self.query, &self.bodies)
    }

    pub fn active_post(&self) -> Option<&Post> {
        self.active_slug
            .as_deref()
            .and_then(|slug| self.posts.get(slug))
    }

    pub fn body_for(&self, slug: &str) -> Option<&str> {
        self.bodies.get(slug).map(String::as_str)
    }
}

// ============================================================================
// DashboardState: the dashboard's front buffer
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// THE FRONT BUFFER.
    /// The presentation layer reads this every frame. It is never locked for
    /// writing: when a refresh lands, the Arc pointer is simply replaced.
    pub data: Option<Arc<DashboardData>>,

    /// Is a refresh cycle currently in flight?
    pub is_refreshing: bool,

    /// When the last cycle completed (successfully or not)
    pub last_refresh_at: Option<Instant>,

    /// Last error (if any) to show inline, non-blocking
    pub last_error: Option<String>,

    pub completed_cycles: u64,
}

impl DashboardState {
    /// The "Swap" operation: promote a finished cycle to the front buffer.
    pub fn update_buffer(&mut self, new_data: Arc<DashboardData>) {
        self.data = Some(new_data);
        self.is_refreshing = false;
        self.last_refresh_at = Some(Instant::now());
        self.last_error = None;
        self.completed_cycles += 1;
    }
}
