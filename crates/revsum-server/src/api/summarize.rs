use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use revsum_scraper::PageDelay;
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState};

/// Number of review texts echoed back next to the summary.
const SAMPLE_REVIEW_COUNT: usize = 5;

const FETCH_FAILED_PREFIX: &str = "Yorum çekilemedi";

#[derive(Debug, Deserialize)]
pub(super) struct SummarizeQuery {
    pub product_id: String,
    /// `0` or absent means every page until the upstream runs out; a
    /// negative value stops after the first page.
    pub max_pages: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct SummarizeResponse {
    product_id: String,
    num_reviews: usize,
    summary: String,
    sample_reviews: Vec<String>,
}

/// Converts the signed `max_pages` query value into the fetcher's page cap.
///
/// Pagination stops once the page number reaches the cap, so any negative
/// value behaves like `1`. Values beyond `u32::MAX` saturate.
fn page_cap(max_pages: Option<i64>) -> Option<u32> {
    match max_pages? {
        0 => None,
        n if n < 0 => Some(1),
        n => Some(u32::try_from(n).unwrap_or(u32::MAX)),
    }
}

pub(super) async fn summarize<D: PageDelay + 'static>(
    State(state): State<AppState<D>>,
    query: Result<Query<SummarizeQuery>, QueryRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;

    let reviews = state
        .fetcher
        .fetch_reviews(&query.product_id, page_cap(query.max_pages), state.page_size)
        .await
        .map_err(|e| {
            tracing::error!(product_id = %query.product_id, error = %e, "review fetch failed");
            ApiError::internal(format!("{FETCH_FAILED_PREFIX}: {e}"))
        })?;

    let summary = state.summarizer.summarize(&reviews);
    tracing::info!(
        product_id = %query.product_id,
        num_reviews = reviews.len(),
        "summarized product reviews"
    );

    Ok(Json(SummarizeResponse {
        num_reviews: reviews.len(),
        sample_reviews: reviews
            .iter()
            .take(SAMPLE_REVIEW_COUNT)
            .map(|r| r.text.clone())
            .collect(),
        summary,
        product_id: query.product_id,
    }))
}
