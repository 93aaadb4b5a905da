//! Local options configuration.
//!
//! Describes the options this node advertises in its own status message.
//!
//! # Config File Format
//!
//! ```toml
//! pow_requirement = 0.2
//! light_node = true
//! confirmations = false
//! full_node_bloom = true
//! strip_defaults = true
//! topic_interest = ["0xdeadbeef", "01020304"]
//!
//! [rate_limits]
//! ip = 100
//! peer_id = 20
//! topic = 5
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use shared_types::{make_full_node_bloom, RateLimits, TopicType};

use crate::domain::{StatusOptions, MAX_TOPIC_INTEREST};
use crate::error::{ConfigError, ValidationError};

/// Rate limit section of the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitsConfig {
    #[serde(default)]
    pub ip: u64,
    #[serde(default)]
    pub peer_id: u64,
    #[serde(default)]
    pub topic: u64,
}

impl From<RateLimitsConfig> for RateLimits {
    fn from(c: RateLimitsConfig) -> Self {
        RateLimits::new(c.ip, c.peer_id, c.topic)
    }
}

/// Options advertised by the local node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalOptionsConfig {
    /// Minimum proof-of-work accepted from peers
    pub pow_requirement: Option<f64>,
    /// Run as a light node
    pub light_node: Option<bool>,
    /// Send message confirmations
    pub confirmations: Option<bool>,
    pub rate_limits: Option<RateLimitsConfig>,
    /// Hex-encoded 4-byte topics. An empty list leaves the field absent.
    #[serde(default)]
    pub topic_interest: Vec<String>,
    /// Advertise the full-node bloom filter
    #[serde(default)]
    pub full_node_bloom: bool,
    /// Drop default-valued fields before encoding
    #[serde(default = "default_strip_defaults")]
    pub strip_defaults: bool,
}

fn default_strip_defaults() -> bool {
    true
}

impl Default for LocalOptionsConfig {
    fn default() -> Self {
        Self {
            pow_requirement: None,
            light_node: None,
            confirmations: None,
            rate_limits: None,
            topic_interest: Vec::new(),
            full_node_bloom: false,
            strip_defaults: default_strip_defaults(),
        }
    }
}

impl LocalOptionsConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Check the values a TOML parser cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pow) = self.pow_requirement {
            if !pow.is_finite() || pow < 0.0 {
                return Err(ConfigError::InvalidValue(format!(
                    "pow_requirement must be a finite non-negative number, got {pow}"
                )));
            }
        }

        if self.topic_interest.len() > MAX_TOPIC_INTEREST {
            return Err(ValidationError::TopicInterestTooLarge {
                count: self.topic_interest.len(),
                max: MAX_TOPIC_INTEREST,
            }
            .into());
        }

        self.topics()?;
        Ok(())
    }

    fn topics(&self) -> Result<Vec<TopicType>, ConfigError> {
        self.topic_interest
            .iter()
            .map(|t| t.parse::<TopicType>().map_err(ConfigError::from))
            .collect()
    }

    /// Build the record this node sends.
    pub fn to_status_options(&self) -> Result<StatusOptions, ConfigError> {
        let topics = self.topics()?;

        let options = StatusOptions {
            pow_requirement: self.pow_requirement.map(f64::to_bits),
            bloom_filter: self.full_node_bloom.then(make_full_node_bloom),
            light_node_enabled: self.light_node,
            confirmations_enabled: self.confirmations,
            rate_limits: self.rate_limits.map(RateLimits::from),
            topic_interest: (!topics.is_empty()).then_some(topics),
        };
        options.validate()?;

        Ok(if self.strip_defaults {
            options.without_defaults()
        } else {
            options
        })
    }
}
