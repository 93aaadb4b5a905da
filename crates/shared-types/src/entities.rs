//! # Handshake Entities
//!
//! Value types carried inside the status options exchanged during the
//! handshake.
//!
//! ## Wire Shapes
//!
//! - `TopicType`: a 4-byte RLP string
//! - `RateLimits`: a 3-item RLP list `[ip_limits, peer_id_limits, topic_limits]`

use std::fmt;
use std::str::FromStr;

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use serde::{Deserialize, Serialize};

use crate::errors::TopicParseError;

/// Length of a topic identifier in bytes.
pub const TOPIC_LENGTH: usize = 4;

/// A fixed-size topic identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TopicType(pub [u8; TOPIC_LENGTH]);

impl TopicType {
    /// Create a topic from its raw bytes.
    pub const fn new(bytes: [u8; TOPIC_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw topic bytes.
    pub fn as_bytes(&self) -> &[u8; TOPIC_LENGTH] {
        &self.0
    }
}

impl From<[u8; TOPIC_LENGTH]> for TopicType {
    fn from(bytes: [u8; TOPIC_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for TopicType {
    type Err = TopicParseError;

    /// Parse `0xAABBCCDD` or `aabbccdd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let bytes = hex::decode(digits).map_err(|e| TopicParseError::InvalidHex {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        let array: [u8; TOPIC_LENGTH] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| TopicParseError::InvalidLength {
                    expected: TOPIC_LENGTH,
                    actual: bytes.len(),
                })?;

        Ok(Self(array))
    }
}

impl Encodable for TopicType {
    fn rlp_append(&self, s: &mut RlpStream) {
        // Write the string directly; a nested `append` would be counted as a
        // second item of the enclosing list.
        s.encoder().encode_value(&self.0);
    }
}

impl Decodable for TopicType {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        let bytes: Vec<u8> = rlp.as_val()?;
        let array: [u8; TOPIC_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DecoderError::Custom("topic must be exactly 4 bytes"))?;
        Ok(Self(array))
    }
}

/// Per-source message rate limits advertised by a peer.
///
/// A zero value means "no limit" for that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RateLimits {
    /// Messages per second accepted from a single IP.
    pub ip_limits: u64,
    /// Messages per second accepted from a single peer ID.
    pub peer_id_limits: u64,
    /// Messages per second accepted for a single topic.
    pub topic_limits: u64,
}

impl RateLimits {
    /// Create rate limits.
    pub const fn new(ip_limits: u64, peer_id_limits: u64, topic_limits: u64) -> Self {
        Self {
            ip_limits,
            peer_id_limits,
            topic_limits,
        }
    }

    /// True when no limit is set for any source.
    pub fn is_zero(&self) -> bool {
        self.ip_limits == 0 && self.peer_id_limits == 0 && self.topic_limits == 0
    }
}

impl Encodable for RateLimits {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        s.append(&self.ip_limits);
        s.append(&self.peer_id_limits);
        s.append(&self.topic_limits);
    }
}

impl Decodable for RateLimits {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != 3 {
            return Err(DecoderError::RlpIncorrectListLen);
        }

        // item_count stops at the first malformed item; make sure the three
        // items are the whole payload.
        let covered: usize = (0..3)
            .map(|i| rlp.at(i).map(|item| item.as_raw().len()))
            .sum::<Result<usize, DecoderError>>()?;
        if covered != rlp.data()?.len() {
            return Err(DecoderError::RlpInconsistentLengthAndData);
        }

        Ok(Self {
            ip_limits: rlp.val_at(0)?,
            peer_id_limits: rlp.val_at(1)?,
            topic_limits: rlp.val_at(2)?,
        })
    }
}
