//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_UPSTREAM_URL: &str = "http://localhost:5000";
    pub const DEV_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
    /// Reasoning-mode generation can take minutes upstream.
    pub const UPSTREAM_TIMEOUT_SECS: u64 = 120;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Upstream generation service settings.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    /// Base address, without trailing slash (e.g. "http://localhost:5000").
    pub base_url: String,
    /// Total request timeout for a single upstream call.
    pub timeout: Duration,
}

impl UpstreamSettings {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Upstream generation service
    pub upstream: UpstreamSettings,
    /// Directory holding the prebuilt front-end bundle
    pub static_dir: Option<PathBuf>,
    /// Origins allowed by CORS (empty = same-origin only)
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `SIT_HOST`: Server host (default: 127.0.0.1)
    /// - `SIT_PORT`: Server port (default: 8080)
    /// - `SIT_UPSTREAM_URL`: Generation service base URL (default: http://localhost:5000)
    /// - `SIT_UPSTREAM_TIMEOUT_SECS`: Upstream request timeout (default: 120)
    /// - `SIT_STATIC_DIR`: Front-end bundle directory, enables SPA serving
    /// - `SIT_CORS_ORIGINS`: Comma-separated allowed origins
    ///
    /// In production the upstream URL must be set explicitly.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("SIT_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("SIT_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("SIT_PORT must be a valid port number"))?;

        let upstream_url = env::var("SIT_UPSTREAM_URL")
            .unwrap_or_else(|_| defaults::DEV_UPSTREAM_URL.to_string());
        if !upstream_url.starts_with("http://") && !upstream_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "SIT_UPSTREAM_URL must be an http(s) URL",
            ));
        }

        let timeout_secs = env::var("SIT_UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::UPSTREAM_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("SIT_UPSTREAM_TIMEOUT_SECS must be a valid number")
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SIT_UPSTREAM_TIMEOUT_SECS must be greater than zero",
            ));
        }

        let static_dir = env::var("SIT_STATIC_DIR").ok().map(PathBuf::from);

        let cors_origins = match env::var("SIT_CORS_ORIGINS") {
            Ok(list) => parse_origins(&list),
            Err(_) if environment.is_development() => parse_origins(defaults::DEV_CORS_ORIGINS),
            Err(_) => Vec::new(),
        };

        let config = Config {
            environment,
            host,
            port,
            upstream: UpstreamSettings::new(upstream_url, Duration::from_secs(timeout_secs)),
            static_dir,
            cors_origins,
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.upstream.base_url == defaults::DEV_UPSTREAM_URL {
            errors.push(format!(
                "SIT_UPSTREAM_URL is using development default '{}'. Set the generation service address.",
                defaults::DEV_UPSTREAM_URL
            ));
        }

        if self
            .cors_origins
            .iter()
            .any(|origin| origin.contains("localhost") || origin.contains("127.0.0.1"))
        {
            errors.push("SIT_CORS_ORIGINS must not allow localhost origins in production".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
