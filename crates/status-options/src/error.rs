//! Error types for the status option codec

use std::fmt;

use rlp::DecoderError;
use thiserror::Error;

/// Which list the decoder was reading when framing broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The list holding every `[key, value]` entry
    OuterList,
    /// A single `[key, value]` entry
    InnerList,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OuterList => write!(f, "outer list"),
            Self::InnerList => write!(f, "inner list"),
        }
    }
}

/// Errors that abort decoding of a status option record.
///
/// Unknown keys are never an error; they are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed {stage}: {source}")]
    Framing {
        stage: DecodeStage,
        #[source]
        source: DecoderError,
    },

    #[error("Invalid option key: {source}")]
    InvalidKey {
        #[source]
        source: DecoderError,
    },

    #[error("Failed to decode option {key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: DecoderError,
    },

    #[error("Option {key} has {count} unexpected trailing element(s)")]
    TrailingElements { key: &'static str, count: usize },

    #[error("Unexpected {count} trailing byte(s) after the option list")]
    TrailingBytes { count: usize },
}

impl DecodeError {
    /// Wire key of the offending option, when the error is tied to one.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { key, .. } | Self::TrailingElements { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// Collapse into an `rlp` error for the `Decodable` impl.
    pub(crate) fn into_rlp(self) -> DecoderError {
        match self {
            Self::Framing { source, .. }
            | Self::InvalidKey { source }
            | Self::InvalidValue { source, .. } => source,
            Self::TrailingElements { .. } => DecoderError::RlpIncorrectListLen,
            Self::TrailingBytes { .. } => DecoderError::RlpIsTooBig,
        }
    }
}

/// Errors from record-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Topic interest is limited to {max} items, got {count}")]
    TopicInterestTooLarge { count: usize, max: usize },
}

/// Errors from loading the local options configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid topic in config: {0}")]
    InvalidTopic(#[from] shared_types::TopicParseError),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    #[error("Config describes invalid options: {0}")]
    Validation(#[from] ValidationError),
}

/// Any failure while receiving a peer's status options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
