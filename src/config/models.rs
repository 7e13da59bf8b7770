// src/config/models.rs
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),

    #[error("max_retries must be at least 1")]
    ZeroRetries,

    #[error("probe_timeout_ms must be at least 1")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub endpoints: Vec<String>,

    #[serde(default)]
    pub verifier: VerifierConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifierConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay_secs() -> u64 {
    30
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl VerifierConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }

        if self.verifier.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }

        if self.verifier.probe_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        for endpoint in &self.endpoints {
            let normalized = normalize_endpoint(endpoint);
            Url::parse(&normalized).map_err(|e| {
                ConfigError::InvalidEndpoint(endpoint.clone(), e.to_string())
            })?;
        }

        Ok(())
    }
}

/// Scheme-less identifiers (`host:port`) are probed over plain HTTP.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(endpoints: Vec<&str>) -> Config {
        Config {
            endpoints: endpoints.into_iter().map(String::from).collect(),
            verifier: VerifierConfig::default(),
        }
    }

    #[test]
    fn test_defaults() {
        let config = VerifierConfig::default();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay(), Duration::from_secs(30));
        assert_eq!(config.probe_timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_validate_rejects_empty_endpoints() {
        let config = base_config(vec![]);
        assert!(matches!(config.validate(), Err(ConfigError::NoEndpoints)));
    }

    #[test]
    fn test_validate_rejects_zero_retries() {
        let mut config = base_config(vec!["https://a.test/health"]);
        config.verifier.max_retries = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRetries)));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = base_config(vec!["http://"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(_, _))
        ));
    }

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_endpoint("api.test:8080"), "http://api.test:8080");
        assert_eq!(
            normalize_endpoint("https://api.test/health"),
            "https://api.test/health"
        );
    }

    #[test]
    fn test_yaml_defaults_fill_missing_fields() {
        let yaml = "endpoints:\n  - https://a.test/health\nverifier:\n  max_retries: 3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.verifier.max_retries, 3);
        assert_eq!(config.verifier.retry_delay_secs, 30);
        assert_eq!(config.verifier.probe_timeout_ms, 5000);
    }
}
