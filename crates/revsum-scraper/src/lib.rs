pub mod client;
pub mod delay;
pub mod error;
pub mod normalize;

pub use client::{ReviewFetcher, DEFAULT_PAGE_SIZE};
pub use delay::{JitterDelay, NoDelay, PageDelay};
pub use error::ScraperError;
pub use normalize::{normalize_review, normalize_text};
