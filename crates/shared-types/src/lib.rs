//! # Shared Types Crate
//!
//! Types that the status option codec shares with the handshake layer.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `TopicType` and `RateLimits` are defined once
//!   here and reused by every crate that touches the handshake.
//! - **Opaque Collaborators**: the option codec only relies on
//!   `RateLimits::is_zero` and `make_full_node_bloom`; everything else about
//!   these types belongs to their owners.

pub mod bloom;
pub mod entities;
pub mod errors;

pub use bloom::{is_full_node_bloom, make_full_node_bloom, BLOOM_FILTER_SIZE};
pub use entities::{RateLimits, TopicType, TOPIC_LENGTH};
pub use errors::TopicParseError;
