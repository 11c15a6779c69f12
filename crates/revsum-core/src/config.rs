use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_REVIEWS_BASE_URL: &str = "https://www.hepsiburada.com/api/reviews";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let bind_addr = or_default("REVSUM_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("REVSUM_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("REVSUM_LOG_LEVEL", "info");
    let reviews_base_url = or_default("REVSUM_REVIEWS_BASE_URL", DEFAULT_REVIEWS_BASE_URL);
    let request_timeout_secs = parse_u64("REVSUM_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("REVSUM_USER_AGENT", DEFAULT_USER_AGENT);

    let page_size = parse_u32("REVSUM_PAGE_SIZE", "20")?;
    if page_size == 0 {
        return Err(invalid("REVSUM_PAGE_SIZE", "must be at least 1".into()));
    }

    let page_delay_min_ms = parse_u64("REVSUM_PAGE_DELAY_MIN_MS", "400")?;
    let page_delay_max_ms = parse_u64("REVSUM_PAGE_DELAY_MAX_MS", "1100")?;
    if page_delay_min_ms > page_delay_max_ms {
        return Err(invalid(
            "REVSUM_PAGE_DELAY_MIN_MS",
            format!("{page_delay_min_ms} exceeds REVSUM_PAGE_DELAY_MAX_MS ({page_delay_max_ms})"),
        ));
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        reviews_base_url,
        request_timeout_secs,
        user_agent,
        page_size,
        page_delay_min_ms,
        page_delay_max_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
