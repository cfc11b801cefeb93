use anyhow::{Context, Result};
use serde::Deserialize;

/// Placeholder ids used when no config file is present; the relay rejects them
pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
pub const PLACEHOLDER_USER_ID: &str = "YOUR_USER_ID";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub relay: RelayConfig,
    #[serde(default)]
    pub hero: HeroConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroConfig {
    /// Overrides the built-in typewriter phrases
    #[serde(default)]
    pub phrases: Option<Vec<String>>,
}

fn default_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay: RelayConfig {
                service_id: PLACEHOLDER_SERVICE_ID.to_string(),
                template_id: PLACEHOLDER_TEMPLATE_ID.to_string(),
                user_id: PLACEHOLDER_USER_ID.to_string(),
                endpoint: default_endpoint(),
                timeout_secs: default_timeout_secs(),
            },
            hero: HeroConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a YAML config document
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(source).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(phrases) = &self.hero.phrases {
            if phrases.is_empty() {
                anyhow::bail!("hero.phrases must contain at least one phrase");
            }
        }
        if self.relay.timeout_secs == 0 {
            anyhow::bail!("relay.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Whether the relay ids are still the placeholders
    pub fn uses_placeholder_relay(&self) -> bool {
        self.relay.service_id == PLACEHOLDER_SERVICE_ID
            || self.relay.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.relay.user_id == PLACEHOLDER_USER_ID
    }

    /// Hero phrases: configured override or the built-in list
    pub fn phrases(&self) -> Vec<String> {
        match &self.hero.phrases {
            Some(phrases) => phrases.clone(),
            None => crate::content::PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_yaml(
            "relay:\n  service_id: svc\n  template_id: tpl\n  user_id: usr\n",
        )
        .unwrap();
        assert_eq!(config.relay.endpoint, "https://api.emailjs.com");
        assert_eq!(config.relay.timeout_secs, 10);
        assert!(config.hero.phrases.is_none());
        assert!(!config.uses_placeholder_relay());
        assert_eq!(config.phrases().len(), crate::content::PHRASES.len());
    }

    #[test]
    fn test_phrase_override() {
        let config = Config::from_yaml(
            "relay:\n  service_id: svc\n  template_id: tpl\n  user_id: usr\nhero:\n  phrases: [\"Only one\"]\n",
        )
        .unwrap();
        assert_eq!(config.phrases(), vec!["Only one".to_string()]);
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let result = Config::from_yaml(
            "relay:\n  service_id: svc\n  template_id: tpl\n  user_id: usr\nhero:\n  phrases: []\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_yaml(
            "relay:\n  service_id: svc\n  template_id: tpl\n  user_id: usr\n  timeout_secs: 0\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_relay_section_is_error() {
        assert!(Config::from_yaml("hero: {}\n").is_err());
    }

    #[test]
    fn test_default_config_is_placeholder() {
        let config = Config::default();
        assert!(config.uses_placeholder_relay());
        assert!(config.validate().is_ok());
    }
}
