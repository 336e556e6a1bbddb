pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Build from an optional compile-time or runtime value, falling back
    /// to the local development server.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self::new(value.unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (always starting with `/api`) onto the base.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_localhost() {
        let config = ApiConfig::from_env_value(None);
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn trailing_slash_trimmed() {
        let config = ApiConfig::from_env_value(Some("https://api.finanzas.app/"));
        assert_eq!(
            config.url("/api/auth/profile"),
            "https://api.finanzas.app/api/auth/profile"
        );
    }

    #[test]
    fn blank_value_falls_back() {
        assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn relative_path_gets_separator() {
        assert_eq!(
            ApiConfig::default().url("api/tags"),
            "http://localhost:3000/api/tags"
        );
    }
}
