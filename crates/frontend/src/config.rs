//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// API server used when `SHOPDASH_API_URL` is unset at build time
    pub const DEFAULT_API_URL: &'static str = "http://localhost:4242";

    /// localStorage key holding the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// localStorage key holding the token expiry record
    pub const TOKEN_EXPIRY_KEY: &'static str = "token_expiry";

    /// Token validation interval in milliseconds
    pub const TOKEN_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Base URL for API calls. Endpoint paths carry the `/api` prefix themselves.
    pub fn api_base_url() -> &'static str {
        resolve_api_url(option_env!("SHOPDASH_API_URL"))
    }
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(AppConfig::DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_url_falls_back_to_default() {
        assert_eq!(resolve_api_url(None), "http://localhost:4242");
        assert_eq!(resolve_api_url(Some("  ")), "http://localhost:4242");
        assert_eq!(
            resolve_api_url(Some("https://api.example.com")),
            "https://api.example.com"
        );
    }
}
