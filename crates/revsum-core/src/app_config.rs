use std::net::SocketAddr;

/// Runtime configuration for the summarizer service.
///
/// Every field has a default that reproduces the service's fixed behaviour,
/// so an empty environment is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Upstream reviews endpoint; `productId`, `page` and `size` are appended.
    pub reviews_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub page_size: u32,
    pub page_delay_min_ms: u64,
    pub page_delay_max_ms: u64,
}
