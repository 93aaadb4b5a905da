//! Default normalization.
//!
//! `without_defaults` drops fields whose value equals the schema default so
//! they cost nothing on the wire; `with_defaults` puts them back on the
//! receiving side. Both are pure and idempotent.
//!
//! | Field | Default | Stripped | Filled |
//! |-------|---------|----------|--------|
//! | pow_requirement | `0` | yes | yes |
//! | bloom_filter | full-node bloom | no | yes |
//! | light_node_enabled | `false` | yes | yes |
//! | confirmations_enabled | `false` | yes | yes |
//! | rate_limits | all zero | yes | yes |
//! | topic_interest | - | no | no |

use shared_types::{make_full_node_bloom, RateLimits};

use super::options::StatusOptions;

/// Default proof-of-work requirement (bit pattern of `0.0`).
pub const DEFAULT_POW_REQUIREMENT: u64 = 0;

impl StatusOptions {
    /// Drop every present field whose value equals its default.
    pub fn without_defaults(mut self) -> Self {
        if self.pow_requirement == Some(DEFAULT_POW_REQUIREMENT) {
            self.pow_requirement = None;
        }

        if self.light_node_enabled == Some(false) {
            self.light_node_enabled = None;
        }

        if self.confirmations_enabled == Some(false) {
            self.confirmations_enabled = None;
        }

        if self.rate_limits.as_ref().is_some_and(RateLimits::is_zero) {
            self.rate_limits = None;
        }

        self
    }

    /// Fill every absent field that has a default.
    ///
    /// `topic_interest` has no default and is left untouched.
    pub fn with_defaults(mut self) -> Self {
        self.pow_requirement.get_or_insert(DEFAULT_POW_REQUIREMENT);
        self.light_node_enabled.get_or_insert(false);
        self.confirmations_enabled.get_or_insert(false);
        self.rate_limits.get_or_insert_with(RateLimits::default);
        self.bloom_filter.get_or_insert_with(make_full_node_bloom);

        self
    }
}
