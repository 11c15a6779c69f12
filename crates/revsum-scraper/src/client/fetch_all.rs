//! Multi-page review fetch loop for `ReviewFetcher`.

use revsum_core::Review;

use crate::delay::PageDelay;
use crate::error::ScraperError;
use crate::normalize::normalize_review;

use super::{PageOutcome, ReviewFetcher};

impl<D: PageDelay> ReviewFetcher<D> {
    /// Fetches reviews for `product_id`, starting at page 1.
    ///
    /// Pagination ends at the first page that has a non-success status, a
    /// body that is not JSON, or no items, and after page `max_pages` when a cap is
    /// given. `Some(0)` means no cap. Items whose text normalizes to empty are
    /// dropped. The delay strategy runs between pages, never after the last.
    ///
    /// **Best-effort semantics**: a failed page is not an error. Reviews from
    /// earlier pages are returned as-is, so the caller can still summarize a
    /// partial list.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if any page request fails at the
    /// network level, including a body cut off mid-read. Reviews gathered
    /// before that page are discarded.
    pub async fn fetch_reviews(
        &self,
        product_id: &str,
        max_pages: Option<u32>,
        page_size: u32,
    ) -> Result<Vec<Review>, ScraperError> {
        let max_pages = max_pages.filter(|&max| max > 0);
        let mut reviews: Vec<Review> = Vec::new();
        let mut page = 1u32;

        loop {
            let items = match self.fetch_page(product_id, page, page_size).await? {
                PageOutcome::Items(items) => items,
                PageOutcome::Stop(reason) => {
                    tracing::debug!(product_id, page, %reason, "review pagination stopped");
                    break;
                }
            };

            let item_count = items.len();
            let before = reviews.len();
            reviews.extend(items.into_iter().filter_map(normalize_review));
            tracing::debug!(
                product_id,
                page,
                item_count,
                kept = reviews.len() - before,
                "fetched review page"
            );

            if max_pages.is_some_and(|max| page >= max) {
                tracing::debug!(product_id, page, "review page cap reached");
                break;
            }

            page += 1;
            self.delay.wait_before_next_page().await;
        }

        Ok(reviews)
    }
}
