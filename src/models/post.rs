use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

// ============================================================================
// Post: a single blog entry as declared in the index
// ============================================================================

/// Body text is not carried here; it is loaded lazily and cached by slug in
/// the app state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    /// Unique, URL-safe identifier within the active collection
    pub slug: String,
    pub title: String,
    /// ISO-8601 date string, e.g. "2025-03-14"
    pub date: String,
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared body location; when absent the `/<slug>.md` convention applies
    #[serde(default, rename = "mdPath", skip_serializing_if = "Option::is_none")]
    pub md_path: Option<String>,
}

impl Post {
    /// The path the body text is fetched from.
    pub fn body_path(&self) -> String {
        self.md_path
            .clone()
            .unwrap_or_else(|| format!("/{}.md", self.slug))
    }

    // Unparseable dates sort after everything else in the date-descending order
    fn date_key(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.date, TimeUtils::STANDARD_TIME_FORMAT)
            .unwrap_or(NaiveDate::MIN)
    }
}

// ============================================================================
// PostCollection: the active post set
// ============================================================================

/// Replaced wholesale when an index load succeeds; otherwise the previously
/// held collection (fallback or prior) stays active.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PostCollection {
    pub name: String, // Metadata e.g. "Remote index".
    pub posts: Vec<Post>,
}

impl PostCollection {
    /// Build the active set from a raw index: sort date-descending and drop
    /// duplicate slugs (first occurrence wins).
    pub fn from_index(name: &str, mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date_key().cmp(&a.date_key()));

        let mut seen: HashSet<String> = HashSet::new();
        posts.retain(|post| {
            let fresh = seen.insert(post.slug.clone());
            if !fresh {
                log::warn!("Dropping post with duplicate slug '{}'", post.slug);
            }
            fresh
        });

        Self {
            name: name.to_string(),
            posts,
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn unique_tags(&self) -> Vec<String> {
        // BTreeSet maintains sorted order and ensures uniqueness
        self.posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
