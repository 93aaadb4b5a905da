//! # Status Options
//!
//! Forward-compatible codec for the capability options a peer advertises in
//! its handshake status message.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure record logic, no I/O
//!   - `StatusOptions`: the option record, every field optional
//!   - `OptionField` / `SCHEMA`: fixed field ↔ wire key table
//!   - `without_defaults` / `with_defaults`: default normalization
//!   - `validate`: record-level bounds
//!
//! - **Codec Layer** (`codec/`): RLP wire format
//!   - `encode_options`: one `[key, value]` entry per present field
//!   - `decode_options`: lenient decoder, skips unknown keys
//!
//! - **Service Layer** (`service`): send and receive pipelines
//!
//! - **Config** (`config`): TOML description of the local node's options
//!
//! ## Wire Format
//!
//! | Key | Field | Value |
//! |-----|-------|-------|
//! | `"0"` | pow_requirement | integer, bit pattern of an `f64` |
//! | `"1"` | bloom_filter | byte string |
//! | `"2"` | light_node_enabled | boolean |
//! | `"3"` | confirmations_enabled | boolean |
//! | `"4"` | rate_limits | `[ip, peer_id, topic]` |
//! | `"5"` | topic_interest | list of 4-byte strings |
//!
//! ## Invariants
//!
//! - **Forward compatibility**: entries with an unknown key never fail a decode
//! - **Atomic decode**: any other malformed input yields an error and no record
//! - **Bounded interest**: a validated record declares at most 1000 topics
//!
//! ## Usage Example
//!
//! ```
//! use status_options::{prepare_options, receive_options, StatusOptions};
//!
//! let local = StatusOptions::new()
//!     .with_pow_requirement_f(0.001)
//!     .with_light_node(true);
//!
//! let bytes = prepare_options(&local);
//! let remote = receive_options(&bytes).unwrap();
//!
//! assert_eq!(remote.pow_requirement_f(), Some(0.001));
//! assert_eq!(remote.confirmations_enabled, Some(false));
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;


// Re-exports for convenience
pub use codec::{decode_options, encode_options};
pub use config::{LocalOptionsConfig, RateLimitsConfig};
pub use domain::{
    FieldSpec, OptionField, StatusOptions, DEFAULT_POW_REQUIREMENT, FIELD_COUNT,
    MAX_TOPIC_INTEREST, SCHEMA,
};
pub use error::{ConfigError, DecodeError, DecodeStage, OptionsError, ValidationError};
pub use service::{prepare_options, receive_options};

pub use shared_types::{RateLimits, TopicType};
