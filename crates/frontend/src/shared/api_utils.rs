//! API utilities for talking to the analysis service
//!
//! Provides helper functions for constructing service URLs.

/// Port the analysis service listens on.
const SERVICE_PORT: u16 = 8000;

/// Get the base URL of the analysis service
///
/// Constructs the base URL from the current window location, using
/// port 8000 for the analysis backend.
///
/// # Returns
/// - Base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, SERVICE_PORT)
}

/// Build a full service URL from a path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/analyze-pdf");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
