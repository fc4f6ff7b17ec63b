//! Configuration module
//!
//! Connection settings shared by every command.

use jobstorm_client::JobClient;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Job server host
    pub host: String,

    /// Job server port
    pub port: u16,

    /// Per-step I/O bound; `None` waits forever
    pub io_timeout: Option<Duration>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host cannot be empty");
        }

        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.io_timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build a client for the configured server
    pub fn client(&self) -> JobClient {
        JobClient::new(self.host.clone(), self.port).with_timeout(self.io_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> Config {
        Config {
            host: "localhost".to_string(),
            port: 8080,
            io_timeout: None,
        }
    }

    #[test]
    fn test_local_config() {
        let config = local_config();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert!(config.io_timeout.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.client().address(), "localhost:8080");
    }

    #[test]
    fn test_config_validation() {
        let mut config = local_config();

        config.host = String::new();
        assert!(config.validate().is_err());

        config.host = "127.0.0.1".to_string();
        config.port = 0;
        assert!(config.validate().is_err());

        config.port = 9000;
        config.io_timeout = Some(Duration::ZERO);
        assert!(config.validate().is_err());

        config.io_timeout = Some(Duration::from_millis(250));
        assert!(config.validate().is_ok());
        assert_eq!(config.client().io_timeout(), Some(Duration::from_millis(250)));
    }
}
