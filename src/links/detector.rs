use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `[label](http(s)://target)`. The target is lazy so it stops at the first `)`.
#[allow(clippy::expect_used)]
static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[[^\]]*\]\((https?://\S+?)\)").expect("markdown link pattern is valid")
});

/// Scheme followed by a maximal non-whitespace run.
#[allow(clippy::expect_used)]
static BARE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("bare link pattern is valid"));

/// Replace every markdown link with a single space so neither its label nor its
/// target reaches the bare-link scan.
pub fn strip_markdown_links(text: &str) -> Cow<'_, str> {
    MARKDOWN_LINK_RE.replace_all(text, " ")
}

/// Bare `http(s)://` runs in `text`, left to right. Punctuation is kept; only
/// whitespace ends a match.
pub fn bare_urls(text: &str) -> impl Iterator<Item = &str> {
    BARE_LINK_RE.find_iter(text).map(|m| m.as_str())
}

/// Candidate links of a message in order of appearance, after markdown links
/// have been suppressed. Duplicates are kept.
pub fn detect_candidates(text: &str) -> Vec<String> {
    let sanitized = strip_markdown_links(text);
    bare_urls(&sanitized).map(str::to_string).collect()
}
