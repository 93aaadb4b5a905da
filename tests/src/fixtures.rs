//! Wire builders shared by the integration and exploit tests.

use rlp::{Encodable, RlpStream};
use shared_types::{RateLimits, TopicType};
use status_options::StatusOptions;

/// One `[key, ...]` entry as a peer of any schema version might send it.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub key: String,
    /// Already-encoded RLP items following the key
    pub tail: Vec<Vec<u8>>,
}

impl RawEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tail: Vec::new(),
        }
    }

    /// Append an encodable value to the entry.
    pub fn with<E: Encodable>(mut self, value: &E) -> Self {
        self.tail.push(rlp::encode(value).to_vec());
        self
    }

    /// Append pre-encoded bytes to the entry.
    pub fn with_raw(mut self, raw: Vec<u8>) -> Self {
        self.tail.push(raw);
        self
    }
}

/// Encode a record out of raw entries, in the given order.
pub fn encode_entries(entries: &[RawEntry]) -> Vec<u8> {
    let mut stream = RlpStream::new_list(entries.len());
    for entry in entries {
        stream.begin_list(1 + entry.tail.len());
        stream.append(&entry.key.as_str());
        for item in &entry.tail {
            stream.append_raw(item, 1);
        }
    }
    stream.out().to_vec()
}

/// The entries a newer peer might add: a float-like key, a nested struct,
/// and a bare key with no value at all.
pub fn future_entries() -> Vec<RawEntry> {
    let mut nested = RlpStream::new_list(3);
    nested.append(&"v2");
    nested.begin_list(2).append(&1u64).append(&2u64);
    nested.append(&vec![0xEEu8; 40]);

    vec![
        RawEntry::new("6").with(&0.5f64.to_bits()),
        RawEntry::new("7").with_raw(nested.out().to_vec()).with(&true),
        RawEntry::new("128"),
    ]
}

/// What a typical full node advertises.
pub fn full_node_options() -> StatusOptions {
    StatusOptions::new()
        .with_pow_requirement_f(0.2)
        .with_rate_limits(RateLimits::new(1000, 100, 10))
        .with_topic_interest(vec![
            TopicType::new(*b"chat"),
            TopicType::new([0x5a, 0xfe, 0x00, 0x01]),
        ])
}

/// What a typical light client advertises.
pub fn light_client_options() -> StatusOptions {
    StatusOptions::new()
        .with_pow_requirement_f(0.001)
        .with_light_node(true)
        .with_confirmations(true)
        .with_bloom_filter(vec![0x01; 64])
}
