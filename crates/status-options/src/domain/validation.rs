//! Record-level validation (security-critical).
//!
//! Runs on every decoded record before the handshake layer sees it.

use tracing::warn;

use super::options::StatusOptions;
use crate::error::ValidationError;

/// Maximum number of topics a peer may declare interest in.
pub const MAX_TOPIC_INTEREST: usize = 1000;

impl StatusOptions {
    /// Reject records that violate record-level bounds.
    ///
    /// Pure check, never mutates the record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let count = self.topic_interest_len();
        if count > MAX_TOPIC_INTEREST {
            warn!(
                count,
                max = MAX_TOPIC_INTEREST,
                "Rejecting status options: topic interest too large"
            );
            return Err(ValidationError::TopicInterestTooLarge {
                count,
                max: MAX_TOPIC_INTEREST,
            });
        }

        Ok(())
    }
}
