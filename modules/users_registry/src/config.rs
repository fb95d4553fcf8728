use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the users_registry module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersRegistryConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
}

/// Endpoints and timeout of the name-inference services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrichmentConfig {
    #[serde(default = "default_agify_url")]
    pub agify_url: String,
    #[serde(default = "default_genderize_url")]
    pub genderize_url: String,
    #[serde(default = "default_nationalize_url")]
    pub nationalize_url: String,
    /// Per-request timeout, e.g. "5s" or "500ms"
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for UsersRegistryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            enrichment: EnrichmentConfig::default(),
        }
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            agify_url: default_agify_url(),
            genderize_url: default_genderize_url(),
            nationalize_url: default_nationalize_url(),
            timeout: default_timeout(),
        }
    }
}

impl UsersRegistryConfig {
    /// Reject limit settings the list operation could never satisfy.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_limit == 0 {
            anyhow::bail!("users_registry.max_limit must be at least 1");
        }
        if !(1..=self.max_limit).contains(&self.default_limit) {
            anyhow::bail!(
                "users_registry.default_limit ({}) must be within 1..={}",
                self.default_limit,
                self.max_limit
            );
        }
        if self.enrichment.timeout.is_zero() {
            anyhow::bail!("users_registry.enrichment.timeout must be non-zero");
        }
        Ok(())
    }
}

fn default_limit() -> u64 {
    10
}

fn default_max_limit() -> u64 {
    50
}

fn default_agify_url() -> String {
    "https://api.agify.io".to_string()
}

fn default_genderize_url() -> String {
    "https://api.genderize.io".to_string()
}

fn default_nationalize_url() -> String {
    "https://api.nationalize.io".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_yields_defaults() {
        let cfg: UsersRegistryConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(cfg.default_limit, 10);
        assert_eq!(cfg.max_limit, 50);
        assert_eq!(cfg.enrichment.agify_url, "https://api.agify.io");
        assert_eq!(cfg.enrichment.timeout, Duration::from_secs(5));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn humantime_timeout_is_parsed() {
        let cfg: UsersRegistryConfig = serde_json::from_value(serde_json::json!({
            "enrichment": { "timeout": "750ms", "agify_url": "http://localhost:1" }
        }))
        .unwrap();
        assert_eq!(cfg.enrichment.timeout, Duration::from_millis(750));
        assert_eq!(cfg.enrichment.agify_url, "http://localhost:1");
        assert_eq!(cfg.enrichment.genderize_url, "https://api.genderize.io");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<UsersRegistryConfig, _> =
            serde_json::from_value(serde_json::json!({ "page_size": 5 }));
        assert!(res.is_err());
    }

    #[test]
    fn default_limit_above_max_is_invalid() {
        let cfg = UsersRegistryConfig {
            default_limit: 60,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
