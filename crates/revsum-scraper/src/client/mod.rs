//! HTTP client for the paginated product reviews endpoint.

mod fetch_all;

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::delay::{JitterDelay, PageDelay};
use crate::error::ScraperError;

/// Page size sent as the `size` query parameter unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Fetches product reviews page by page from the reviews endpoint.
///
/// A page with a non-success status, a non-JSON body, or no `items` ends
/// pagination without an error. Only network-level failures are returned as
/// [`ScraperError::Http`]. Failed pages are never retried.
pub struct ReviewFetcher<D = JitterDelay> {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) delay: D,
}

/// Result of requesting one page.
#[derive(Debug)]
pub(crate) enum PageOutcome {
    /// The page carried at least one item.
    Items(Vec<Value>),
    Stop(StopReason),
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    Status(u16),
    UnreadableBody,
    NotAnObject,
    NoItems,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "upstream returned HTTP {code}"),
            Self::UnreadableBody => f.write_str("response body is not valid JSON"),
            Self::NotAnObject => f.write_str("response body is not a JSON object"),
            Self::NoItems => f.write_str("page has no items"),
        }
    }
}

impl<D: PageDelay> ReviewFetcher<D> {
    /// Creates a `ReviewFetcher` with a fixed timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        delay: D,
    ) -> Result<Self, ScraperError> {
        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            delay,
        })
    }

    /// Requests one page and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] when the request cannot be sent, no
    /// response arrives, or the body is cut off while it is being read
    /// (connection refused, DNS failure, reset, timeout, short body).
    pub(crate) async fn fetch_page(
        &self,
        product_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<PageOutcome, ScraperError> {
        let url = self.reviews_url(product_id, page, page_size);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(PageOutcome::Stop(StopReason::Status(status.as_u16())));
        }

        let body = response.bytes().await?;
        let Ok(parsed) = serde_json::from_slice::<Value>(&body) else {
            return Ok(PageOutcome::Stop(StopReason::UnreadableBody));
        };
        let Value::Object(mut page_body) = parsed else {
            return Ok(PageOutcome::Stop(StopReason::NotAnObject));
        };

        match page_body.remove("items") {
            Some(Value::Array(items)) if !items.is_empty() => Ok(PageOutcome::Items(items)),
            _ => Ok(PageOutcome::Stop(StopReason::NoItems)),
        }
    }

    /// Builds the page URL: `<base>?productId=..&page=..&size=..`.
    fn reviews_url(&self, product_id: &str, page: u32, page_size: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("productId", product_id)
            .append_pair("page", &page.to_string())
            .append_pair("size", &page_size.to_string());
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
