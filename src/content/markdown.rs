//! Minimal markdown-to-HTML rewriting.
//!
//! Not a compliant parser: a fixed set of constructs is rewritten by ordered
//! pattern substitution. Output is trusted raw HTML (post sources are the
//! blog author's own files) and is not escaped.

use once_cell::sync::Lazy;
use regex::Regex;

static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n- (.*)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Rewrite a constrained markdown subset into an HTML fragment.
///
/// Substitution order is part of the contract: deepest heading first so `#`
/// never swallows `###`, and bold before italic so `**` is not consumed as
/// two single asterisks. Each `- item` line becomes its own single-item
/// `<ul>`; consecutive items are not merged into one list.
pub fn render_markdown(source: &str) -> String {
    let html = H3.replace_all(source, "<h3>$1</h3>");
    let html = H2.replace_all(&html, "<h2>$1</h2>");
    let html = H1.replace_all(&html, "<h1>$1</h1>");
    let html = BLOCKQUOTE.replace_all(&html, "<blockquote>$1</blockquote>");
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = CODE.replace_all(&html, "<code>$1</code>");
    let html = LIST_ITEM.replace_all(&html, "\n<ul><li>$1</li></ul>");
    let html = html.replace("\n\n", "<br/><br/>");
    LINK.replace_all(
        &html,
        r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
    )
    .into_owned()
}
