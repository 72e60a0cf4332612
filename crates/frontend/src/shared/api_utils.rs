//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// A base baked in at build time through `CATEGORIES_API_BASE` wins.
/// Otherwise the base is derived from the current window location,
/// using port 3000 for the API server.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("CATEGORIES_API_BASE") {
        return normalize_base(base);
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Join a base URL and a path that starts with "/"
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("https://api.example.com/", "/subcat"), "https://api.example.com/subcat");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_strips_trailing_slash() {
        assert_eq!(join_url("http://localhost:3000/", "/subcat"), "http://localhost:3000/subcat");
        assert_eq!(join_url(" https://a.b ", "/subcat/1"), "https://a.b/subcat/1");
    }
}
