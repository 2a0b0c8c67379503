use std::env;
use std::net::{IpAddr, SocketAddr};

/// Deployment stage of the audit engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime configuration, read once at startup from `AUDIT_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub http: HttpConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Read the environment, loading `.env` first if one is present. Unset
    /// variables fall back to development defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("AUDIT_ENV", "development"));
        let host = var_or("AUDIT_HTTP_HOST", "127.0.0.1");
        let port = var_or("AUDIT_HTTP_PORT", "8080");
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port })?;
        let log_level = var_or("AUDIT_LOG_LEVEL", "info");

        Ok(Self {
            environment,
            http: HttpConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Where the HTTP surface binds.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidHost {
            value: self.host.clone(),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log verbosity for this crate. Dependencies are held at warn so audit
/// traffic stays readable at debug levels.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    /// Filter directives handed to the subscriber when `RUST_LOG` is unset.
    pub fn log_directives(&self) -> String {
        format!("warn,energy_audit={}", self.log_level)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("AUDIT_HTTP_PORT '{value}' is not a valid port")]
    InvalidPort { value: String },
    #[error("AUDIT_HTTP_HOST '{value}' is neither an IP address nor 'localhost'")]
    InvalidHost { value: String },
}
