//! Client configuration

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:5001`
    pub base_url: String,
    /// Admin session token (Bearer)
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://localhost:5001/")
            .with_token("abc")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, 5);
    }
}
