use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Deployment stage the reasoning service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration assembled from `.env` and the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("PEDSDX_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("PEDSDX_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PEDSDX_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("PEDSDX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_differentials = match env::var("PEDSDX_MAX_DIFFERENTIALS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidDifferentialLimit { value: raw })?,
            )
            .filter(|limit| *limit > 0),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig { max_differentials },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing filter controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation limits applied by the service layer, never by the reasoning core.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    /// Truncates the ranked list returned to the rendering surface. `None` returns every entry.
    pub max_differentials: Option<usize>,
}

impl AssessmentConfig {
    pub fn visible<T>(&self, mut ranked: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.max_differentials {
            ranked.truncate(limit);
        }
        ranked
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDifferentialLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "PEDSDX_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "PEDSDX_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDifferentialLimit { value } => write!(
                f,
                "PEDSDX_MAX_DIFFERENTIALS must be a non-negative integer, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDifferentialLimit { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
