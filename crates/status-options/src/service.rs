//! Send and receive paths for the handshake layer.
//!
//! ```text
//! send:    StatusOptions ──without_defaults──► encode ──► bytes
//! receive: bytes ──► decode ──► with_defaults ──► validate ──► StatusOptions
//! ```

use tracing::debug;

use crate::codec::{decode_options, encode_options};
use crate::domain::StatusOptions;
use crate::error::OptionsError;

/// Encode the local options for the status message, stripping defaults.
pub fn prepare_options(options: &StatusOptions) -> Vec<u8> {
    let stripped = options.clone().without_defaults();
    let bytes = encode_options(&stripped);
    debug!(
        fields = stripped.present_fields().count(),
        bytes = bytes.len(),
        "Prepared status options"
    );
    bytes
}

/// Decode a peer's options, fill defaults and validate.
///
/// Nothing is returned unless every step succeeds.
pub fn receive_options(bytes: &[u8]) -> Result<StatusOptions, OptionsError> {
    let decoded = decode_options(bytes)?;
    let sent_fields = decoded.present_fields().count();

    let options = decoded.with_defaults();
    options.validate()?;

    debug!(
        sent_fields,
        topics = options.topic_interest_len(),
        light_node = ?options.light_node_enabled,
        "Received status options"
    );
    Ok(options)
}
