use crate::core::{AppError, Result};
use crate::modules::processors::RateTable;
use std::env;
use std::str::FromStr;

pub mod pricing;
pub mod server;

pub use pricing::{AlternativeConfig, PricingConfig};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` for structured output, anything else for human-readable lines
    pub log_format: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut server = ServerConfig::new(
            string_var(lookup, "SERVER_HOST", "127.0.0.1"),
            parse_var(lookup, "SERVER_PORT", 5000)?,
        );
        server.workers = parse_var(lookup, "SERVER_WORKERS", server.workers)?;

        let config = Config {
            app: AppConfig {
                env: string_var(lookup, "APP_ENV", "development"),
                log_level: string_var(lookup, "LOG_LEVEL", "info"),
                log_format: string_var(lookup, "LOG_FORMAT", "text"),
            },
            server,
            cors: CorsConfig {
                allowed_origins: string_var(lookup, "CORS_ALLOWED_ORIGINS", "http://localhost:5173")
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect(),
            },
            pricing: PricingConfig::from_source(lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self, rates: &RateTable) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::configuration(
                "CORS_ALLOWED_ORIGINS must list at least one origin",
            ));
        }

        for origin in &self.cors.allowed_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(AppError::configuration(format!(
                    "Invalid CORS origin '{}': expected an explicit http(s) origin",
                    origin
                )));
            }
        }

        self.pricing.validate(rates)
    }

    pub fn is_json_logging(&self) -> bool {
        self.app.log_format.eq_ignore_ascii_case("json")
    }
}

pub(crate) fn string_var<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

pub(crate) fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}
