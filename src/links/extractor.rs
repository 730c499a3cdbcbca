use super::detector::{bare_urls, strip_markdown_links};
use super::types::{ExtractOptions, LinkConfig};
use crate::security::url_validation::is_allowed_url;
use std::collections::HashSet;

/// Extract safe, unique links from a chat message.
///
/// Links come back as written in the message, in order of first appearance,
/// at most [`ExtractOptions::resolve_max_links`] of them. Links that only occur
/// inside markdown `[label](url)` syntax are not returned. Never fails: any
/// input without usable links yields an empty list.
pub fn extract_links_from_message<'a>(
    message: impl Into<Option<&'a str>>,
    options: &ExtractOptions,
) -> Vec<String> {
    let Some(source) = message.into().map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    collect_links(source, options.resolve_max_links())
}

/// Extract links using the configured `[links]` policy.
pub fn extract_links(message: &str, config: &LinkConfig) -> Vec<String> {
    if !config.enabled {
        return Vec::new();
    }
    let source = message.trim();
    if source.is_empty() {
        return Vec::new();
    }
    collect_links(source, config.max_links_per_message)
}

fn collect_links(source: &str, max_links: usize) -> Vec<String> {
    let mut links = Vec::new();
    if max_links == 0 {
        return links;
    }

    let sanitized = strip_markdown_links(source);
    let mut seen = HashSet::new();
    let mut rejected = 0usize;

    for candidate in bare_urls(&sanitized) {
        let raw = candidate.trim();
        if raw.is_empty() {
            continue;
        }
        if !is_allowed_url(raw) {
            rejected += 1;
            continue;
        }
        if !seen.insert(raw) {
            continue;
        }
        links.push(raw.to_string());
        if links.len() >= max_links {
            break;
        }
    }

    tracing::debug!(
        accepted = links.len(),
        rejected,
        max_links,
        "extracted links from message"
    );
    links
}
