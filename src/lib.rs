#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod config;
pub mod error;
pub mod links;
pub mod security;

pub use config::Config;
pub use error::{ConfigError, LinkSieveError};
pub use links::{ExtractOptions, LinkConfig, extract_links, extract_links_from_message};
pub use security::{RejectReason, UrlVerdict, classify_url, is_allowed_url};
