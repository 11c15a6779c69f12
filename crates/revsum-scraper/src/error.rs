use thiserror::Error;

/// Failures that abort a review fetch.
///
/// Upstream status errors and non-JSON pages are not represented here:
/// they end pagination quietly and the reviews collected so far are returned.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid reviews base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
