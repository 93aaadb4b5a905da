//! Encoder: one `[key, value]` entry per present field, in schema order.
//!
//! Absent fields emit nothing, so the output grows only with the number of
//! present fields.

use rlp::{Encodable, RlpStream};

use crate::domain::{OptionField, StatusOptions};

/// Open a `[key, value]` entry and write its key.
fn begin_entry(s: &mut RlpStream, field: OptionField) -> &mut RlpStream {
    s.begin_list(2);
    s.append(&field.key());
    s
}

impl Encodable for StatusOptions {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(self.present_fields().count());

        if let Some(pow) = &self.pow_requirement {
            begin_entry(s, OptionField::PowRequirement).append(pow);
        }
        if let Some(bloom) = &self.bloom_filter {
            begin_entry(s, OptionField::BloomFilter).append(bloom);
        }
        if let Some(light_node) = &self.light_node_enabled {
            begin_entry(s, OptionField::LightNodeEnabled).append(light_node);
        }
        if let Some(confirmations) = &self.confirmations_enabled {
            begin_entry(s, OptionField::ConfirmationsEnabled).append(confirmations);
        }
        if let Some(limits) = &self.rate_limits {
            begin_entry(s, OptionField::RateLimits).append(limits);
        }
        if let Some(topics) = &self.topic_interest {
            let s = begin_entry(s, OptionField::TopicInterest);
            s.begin_list(topics.len());
            for topic in topics {
                s.append(topic);
            }
        }
    }
}

/// Encode `options` as it stands.
///
/// Callers that want the minimal wire form strip defaults first with
/// `StatusOptions::without_defaults`.
pub fn encode_options(options: &StatusOptions) -> Vec<u8> {
    rlp::encode(options).to_vec()
}
