//! The status option record exchanged during the handshake.
//!
//! Every field is optional. An absent field is not the same thing as a field
//! present with its zero value: absence lets the receiver fall back to the
//! schema default (see `with_defaults`).

use shared_types::{RateLimits, TopicType};

use super::schema::OptionField;

/// Capability options a peer advertises during the handshake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    /// Minimum proof-of-work, stored as the IEEE-754 bit pattern of an `f64`
    /// because RLP has no floating point type
    pub pow_requirement: Option<u64>,
    /// Topic bloom filter
    pub bloom_filter: Option<Vec<u8>>,
    /// Peer runs as a light node
    pub light_node_enabled: Option<bool>,
    /// Peer sends message confirmations
    pub confirmations_enabled: Option<bool>,
    /// Advertised rate limits
    pub rate_limits: Option<RateLimits>,
    /// Topics the peer is interested in
    pub topic_interest: Option<Vec<TopicType>>,
}

impl StatusOptions {
    /// An empty record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// The proof-of-work requirement as a float, if present.
    pub fn pow_requirement_f(&self) -> Option<f64> {
        self.pow_requirement.map(f64::from_bits)
    }

    /// Store `value` as the proof-of-work requirement.
    ///
    /// The exact bit pattern is kept, so the value survives a round trip
    /// through the wire unchanged.
    pub fn set_pow_requirement_from_f(&mut self, value: f64) {
        self.pow_requirement = Some(value.to_bits());
    }

    /// Builder-style method to set the proof-of-work requirement
    pub fn with_pow_requirement_f(mut self, value: f64) -> Self {
        self.set_pow_requirement_from_f(value);
        self
    }

    /// Builder-style method to set the bloom filter
    pub fn with_bloom_filter(mut self, bloom: Vec<u8>) -> Self {
        self.bloom_filter = Some(bloom);
        self
    }

    /// Builder-style method to set the light node flag
    pub fn with_light_node(mut self, enabled: bool) -> Self {
        self.light_node_enabled = Some(enabled);
        self
    }

    /// Builder-style method to set the confirmations flag
    pub fn with_confirmations(mut self, enabled: bool) -> Self {
        self.confirmations_enabled = Some(enabled);
        self
    }

    /// Builder-style method to set the rate limits
    pub fn with_rate_limits(mut self, limits: RateLimits) -> Self {
        self.rate_limits = Some(limits);
        self
    }

    /// Builder-style method to set the topic interest
    pub fn with_topic_interest(mut self, topics: Vec<TopicType>) -> Self {
        self.topic_interest = Some(topics);
        self
    }

    /// Whether `field` is present.
    pub fn is_present(&self, field: OptionField) -> bool {
        match field {
            OptionField::PowRequirement => self.pow_requirement.is_some(),
            OptionField::BloomFilter => self.bloom_filter.is_some(),
            OptionField::LightNodeEnabled => self.light_node_enabled.is_some(),
            OptionField::ConfirmationsEnabled => self.confirmations_enabled.is_some(),
            OptionField::RateLimits => self.rate_limits.is_some(),
            OptionField::TopicInterest => self.topic_interest.is_some(),
        }
    }

    /// Present fields, in schema order.
    pub fn present_fields(&self) -> impl Iterator<Item = OptionField> + '_ {
        OptionField::ALL
            .into_iter()
            .filter(move |field| self.is_present(*field))
    }

    /// Mark `field` absent.
    pub fn clear(&mut self, field: OptionField) {
        match field {
            OptionField::PowRequirement => self.pow_requirement = None,
            OptionField::BloomFilter => self.bloom_filter = None,
            OptionField::LightNodeEnabled => self.light_node_enabled = None,
            OptionField::ConfirmationsEnabled => self.confirmations_enabled = None,
            OptionField::RateLimits => self.rate_limits = None,
            OptionField::TopicInterest => self.topic_interest = None,
        }
    }

    /// Number of topics of interest (zero when absent).
    pub fn topic_interest_len(&self) -> usize {
        self.topic_interest.as_ref().map_or(0, Vec::len)
    }
}
