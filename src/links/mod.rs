pub mod detector;
pub mod extractor;
pub mod types;

pub use detector::{bare_urls, detect_candidates, strip_markdown_links};
pub use extractor::{extract_links, extract_links_from_message};
pub use types::{DEFAULT_MAX_LINKS, ExtractOptions, LinkConfig};
