//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration (loaded from environment variables)
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Admin session signing secret
    pub jwt_secret: String,
    /// Root directory of the local upload store
    pub upload_dir: String,
    /// Base used to absolutize stored image paths in the public API
    pub public_base_url: String,
    /// Default log level (RUST_LOG overrides)
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Enables daily rolling file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside development.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://folio.db?mode=rwc".into()),
            http_port,
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            environment,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "upload".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("http://localhost:{http_port}")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }
}
