//! In-memory post filtering.

use std::collections::HashMap;

use crate::models::Post;

/// Filter posts by plain substring containment.
///
/// A post matches when the lowercased query appears in its lowercased title,
/// excerpt, any tag, or its already-loaded body in `bodies` (keyed by slug;
/// an absent body never matches). The empty query returns the full input in
/// original order. No tokenization, no ranking, no fuzzy matching.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    query: &str,
    bodies: &HashMap<String, String>,
) -> Vec<&'a Post> {
    if query.is_empty() {
        return posts.iter().collect();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
                || post
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
                || bodies
                    .get(&post.slug)
                    .is_some_and(|body| body.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            date: "2025-01-01".to_string(),
            excerpt: excerpt.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            md_path: None,
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post(
                "metas",
                "Metas e indicadores",
                "Como acompanhar resultados",
                &["kpi", "gestao"],
            ),
            post(
                "ciclos",
                "Ciclos de mercado",
                "Valuation on-chain",
                &["bitcoin"],
            ),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let posts = sample_posts();
        let result = filter_posts(&posts, "", &HashMap::new());

        assert_eq!(result.len(), posts.len());
        let slugs: Vec<&str> = result.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["metas", "ciclos"], "Original order preserved");
    }

    #[test]
    fn test_tag_only_match() {
        // "kpi" appears only in the tags, not in title or excerpt
        let posts = sample_posts();
        let result = filter_posts(&posts, "kpi", &HashMap::new());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "metas");
    }

    #[test]
    fn test_content_only_match_requires_loaded_body() {
        let posts = sample_posts();

        // Body absent from the map: no match
        let result = filter_posts(&posts, "mvrv", &HashMap::new());
        assert!(result.is_empty());

        // Body loaded: the same query now matches
        let mut bodies = HashMap::new();
        bodies.insert("ciclos".to_string(), "Aqui os mvrv details...".to_string());
        let result = filter_posts(&posts, "mvrv", &bodies);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "ciclos");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let posts = sample_posts();
        let result = filter_posts(&posts, "CICLOS", &HashMap::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "ciclos");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let posts = sample_posts();
        assert!(filter_posts(&posts, "inexistente", &HashMap::new()).is_empty());
    }
}
