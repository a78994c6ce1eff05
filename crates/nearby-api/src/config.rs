use nearby_core::config::LayeredConfig;
use std::env;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Search and landmark settings (defaults overlaid with `NEARBY_*` vars)
    pub nearby: LayeredConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("NEARBY_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);

        let cors_origin =
            env::var("NEARBY_CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Self { port, cors_origin, nearby: LayeredConfig::with_defaults().load_from_env() }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        env::remove_var("NEARBY_PORT");
        env::remove_var("NEARBY_CORS_ORIGIN");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("NEARBY_PORT", "8080");
        env::set_var("NEARBY_CORS_ORIGIN", "https://maps.example.com");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "https://maps.example.com");

        env::set_var("NEARBY_PORT", "not-a-port");
        assert_eq!(ApiConfig::from_env().port, 3001);

        env::remove_var("NEARBY_PORT");
        env::remove_var("NEARBY_CORS_ORIGIN");
    }
}
