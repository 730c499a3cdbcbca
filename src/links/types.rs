use serde::{Deserialize, Serialize};

/// Links returned per message when no cap is configured.
pub const DEFAULT_MAX_LINKS: usize = 3;

/// Per-call overrides for [`extract_links_from_message`](super::extract_links_from_message).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtractOptions {
    /// Requested cap. Ignored unless finite and positive; fractions are floored.
    pub max_links: Option<f64>,
}

impl ExtractOptions {
    #[must_use]
    pub fn with_max_links(max_links: f64) -> Self {
        Self {
            max_links: Some(max_links),
        }
    }

    /// Effective cap for this call.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn resolve_max_links(&self) -> usize {
        match self.max_links {
            // `as` saturates, so huge values clamp to usize::MAX.
            Some(value) if value.is_finite() && value > 0.0 => value.floor() as usize,
            _ => DEFAULT_MAX_LINKS,
        }
    }
}

/// `[links]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub enabled: bool,
    pub max_links_per_message: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_links_per_message: DEFAULT_MAX_LINKS,
        }
    }
}
