//! Build-time configuration and fixed business constants.

/// Origin used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://api.macanx.in";

/// Invoice GST rate (CGST + SGST).
pub const GST_RATE: f64 = 0.03;
/// Half of [`GST_RATE`], charged once as CGST and once as SGST per line.
pub const HALF_GST_RATE: f64 = 0.015;

/// Delay between the last keystroke and the barcode search request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Cookie and localStorage key of the bearer token.
pub const TOKEN_KEY: &str = "accessToken";
/// Lifetime of the token cookie, one day.
pub const TOKEN_COOKIE_MAX_AGE_SECS: u32 = 86_400;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("API_BASE_URL"))
    }

    fn with_base(base: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/api/customers`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_origin() {
        assert_eq!(AppConfig::with_base(None).api_base, DEFAULT_API_BASE);
        assert_eq!(AppConfig::with_base(Some("  ")).api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn trims_trailing_slash() {
        let config = AppConfig::with_base(Some("http://localhost:3001/"));
        assert_eq!(config.url("/api/sizes"), "http://localhost:3001/api/sizes");
    }

    #[test]
    fn half_rate_is_half() {
        assert!((HALF_GST_RATE * 2.0 - GST_RATE).abs() < f64::EPSILON);
    }
}
