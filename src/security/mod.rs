pub mod url_validation;

pub use url_validation::{RejectReason, UrlVerdict, classify_url, is_allowed_url, is_blocked_host};
