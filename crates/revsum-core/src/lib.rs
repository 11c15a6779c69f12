//! Shared types for the review summarizer: the [`Review`] record, the
//! truncation [`Summarizer`], and environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod reviews;
pub mod summary;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use reviews::Review;
pub use summary::{Summarizer, NO_REVIEWS_MESSAGE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
