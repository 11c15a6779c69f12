mod summarize;

use std::sync::Arc;

use axum::{
    http::{HeaderName, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use revsum_core::Summarizer;
use revsum_scraper::{JitterDelay, PageDelay, ReviewFetcher};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

/// Per-process handler state. Requests share the fetcher's HTTP connection
/// pool but no mutable data.
pub struct AppState<D = JitterDelay> {
    pub fetcher: Arc<ReviewFetcher<D>>,
    pub summarizer: Summarizer,
    pub page_size: u32,
}

impl<D> AppState<D> {
    pub fn new(fetcher: ReviewFetcher<D>, page_size: u32) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            summarizer: Summarizer::default(),
            page_size,
        }
    }
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            summarizer: self.summarizer,
            page_size: self.page_size,
        }
    }
}

/// Error body in the `{"detail": "..."}` shape clients of this API expect.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    ok: bool,
}

/// Mirrors the caller's origin, methods and headers so that credentialed
/// requests from any site are accepted.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app<D: PageDelay + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/summarize", get(summarize::summarize::<D>))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn healthz() -> Json<HealthData> {
    Json(HealthData { ok: true })
}
