//! HTTP client construction for relay requests

use reqwest::Client;
use std::time::Duration;

/// Configuration for the relay HTTP client
pub struct RelayClientConfig {
    /// Overall request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// Connection timeout (default: 10 seconds)
    pub connect_timeout: Duration,
    /// Pool idle timeout (default: 60 seconds)
    pub pool_idle_timeout: Duration,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(60),
        }
    }
}

impl RelayClientConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

pub fn user_agent() -> String {
    format!("folio/{}", env!("CARGO_PKG_VERSION"))
}

/// Create a relay client with the specified configuration
pub fn create_relay_client(config: RelayClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .user_agent(user_agent())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_client_config_default() {
        let config = RelayClientConfig::default();
        assert_eq!(config.timeout.as_secs(), 30);
        assert_eq!(config.connect_timeout.as_secs(), 10);
    }

    #[test]
    fn test_with_timeout_keeps_other_defaults() {
        let config = RelayClientConfig::with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout.as_secs(), 5);
        assert_eq!(config.pool_idle_timeout.as_secs(), 60);
    }

    #[test]
    fn test_create_relay_client() {
        assert!(create_relay_client(RelayClientConfig::default()).is_ok());
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(user_agent().starts_with("folio/"));
    }
}
