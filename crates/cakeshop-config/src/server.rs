use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// bcrypt work factor for new password digests.
    pub bcrypt_cost: u32,
    pub metrics_enabled: bool,
    pub log_dir: String,
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            metrics_enabled: true,
            log_dir: "storage/logs".to_string(),
            shutdown_timeout_secs: 5,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            bcrypt_cost: parse_var("BCRYPT_COST").unwrap_or(defaults.bcrypt_cost),
            metrics_enabled: env::var("METRICS_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.metrics_enabled),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            shutdown_timeout_secs: parse_var("SHUTDOWN_TIMEOUT")
                .unwrap_or(defaults.shutdown_timeout_secs),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_default_cost_is_bcrypt_default() {
        assert_eq!(ServerConfig::default().bcrypt_cost, bcrypt::DEFAULT_COST);
    }
}
