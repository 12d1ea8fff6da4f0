//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs, the error type shared by the
//! request functions, and a timeout wrapper for in-flight requests.

use crate::shared::config::ApiConfig;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured; otherwise builds it from the current
/// window location and `api.port`.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com"
/// - Empty string if no base is configured and window is not available
pub fn api_base(config: &ApiConfig) -> String {
    let configured = config.base_url.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Join a base URL and an API path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/contact");
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    join_url(&api_base(config), path)
}

/// Race a request against `timer`; the timer winning yields `ApiError::Timeout`
///
/// `timeout_ms` is only reported in the error. Callers in the browser pass
/// `TimeoutFuture::new(timeout_ms)` (see `timeout`).
pub async fn with_timeout<T, F, D>(request: F, timer: D, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    D: Future<Output = ()>,
{
    let request = Box::pin(request);
    let timer = Box::pin(timer);

    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}

/// Browser timer for `with_timeout`
pub fn timeout(timeout_ms: u32) -> TimeoutFuture {
    TimeoutFuture::new(timeout_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3000", "/contact"), "http://localhost:3000/contact");
        assert_eq!(join_url("http://localhost:3000/", "contact"), "http://localhost:3000/contact");
        assert_eq!(join_url("https://api.example.com/v1//", "//contact"), "https://api.example.com/v1/contact");
    }

    #[test]
    fn test_configured_base_wins() {
        let config = ApiConfig {
            base_url: " https://api.example.com/ ".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api_base(&config), "https://api.example.com");
        assert_eq!(api_url(&config, "/contact"), "https://api.example.com/contact");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
        assert_eq!(ApiError::Timeout(10).to_string(), "request timed out after 10 ms");
    }

    #[test]
    fn test_with_timeout_passes_result_through() {
        let ok = block_on(with_timeout(
            future::ready(Ok::<_, ApiError>(7)),
            future::pending::<()>(),
            100,
        ));
        assert_eq!(ok, Ok(7));

        let err = block_on(with_timeout(
            future::ready(Err::<u8, _>(ApiError::Status(502))),
            future::pending::<()>(),
            100,
        ));
        assert_eq!(err, Err(ApiError::Status(502)));
    }

    #[test]
    fn test_with_timeout_expires() {
        let result = block_on(with_timeout(
            future::pending::<Result<u8, ApiError>>(),
            future::ready(()),
            10_000,
        ));
        assert_eq!(result, Err(ApiError::Timeout(10_000)));
    }
}
