//! Lenient decoder.
//!
//! A newer peer may send keys this schema version has never heard of. Those
//! entries are stepped over without being decoded so both sides keep talking; every
//! other framing or typing problem aborts the decode with no partial result.
//!
//! # Algorithm
//! 1. Open the outer list (structural error otherwise)
//! 2. For each entry: open it as a list, read the key
//!    - unknown key: step over the rest of the entry, continue
//!    - known key: decode the value into its field, require the entry to end
//! 3. Outer list exhausted: done

use rlp::{Decodable, DecoderError, Rlp};
use tracing::debug;

use super::cursor::ListCursor;
use crate::domain::{OptionField, StatusOptions};
use crate::error::{DecodeError, DecodeStage};

fn framing(stage: DecodeStage) -> impl Fn(DecoderError) -> DecodeError {
    move |source| DecodeError::Framing { stage, source }
}

/// Read the key element of an entry as raw string bytes.
///
/// Non-canonical string headers are rejected.
fn read_key(entry: &mut ListCursor<'_>) -> Result<Vec<u8>, DecodeError> {
    let item = entry
        .next_item()
        .map_err(framing(DecodeStage::InnerList))?
        .ok_or(DecodeError::InvalidKey {
            source: DecoderError::RlpIsTooShort,
        })?;

    if !item.is_data() {
        return Err(DecodeError::InvalidKey {
            source: DecoderError::RlpExpectedToBeData,
        });
    }

    item.as_val().map_err(|source| DecodeError::InvalidKey { source })
}

/// Decode every item of a list value, rejecting malformed items.
fn decode_list<T: Decodable>(value: &Rlp<'_>) -> Result<Vec<T>, DecoderError> {
    let mut cursor = ListCursor::open(value)?;
    let mut items = Vec::new();
    while let Some(item) = cursor.next_item()? {
        items.push(item.as_val()?);
    }
    Ok(items)
}

impl StatusOptions {
    /// Decode a record from an RLP item.
    ///
    /// Bytes following the item are not inspected; see `decode_options`
    /// for the standalone form.
    pub fn decode_from(rlp: &Rlp<'_>) -> Result<Self, DecodeError> {
        let mut entries = ListCursor::open(rlp).map_err(framing(DecodeStage::OuterList))?;
        let mut options = StatusOptions::default();

        while let Some(entry) = entries
            .next_item()
            .map_err(framing(DecodeStage::OuterList))?
        {
            let mut pair = ListCursor::open(&entry).map_err(framing(DecodeStage::InnerList))?;
            let key = read_key(&mut pair)?;

            let Some(field) = OptionField::from_key(&key) else {
                let skipped = pair
                    .skip_rest()
                    .map_err(framing(DecodeStage::InnerList))?;
                debug!(
                    key = %String::from_utf8_lossy(&key),
                    skipped_bytes = skipped,
                    "Skipping unknown status option"
                );
                continue;
            };

            let value = pair
                .next_item()
                .map_err(framing(DecodeStage::InnerList))?
                .ok_or(DecodeError::InvalidValue {
                    key: field.key(),
                    source: DecoderError::RlpIsTooShort,
                })?;

            if options.is_present(field) {
                debug!(%field, "Duplicate status option, keeping the later value");
            }

            options
                .decode_field(field, &value)
                .map_err(|source| DecodeError::InvalidValue {
                    key: field.key(),
                    source,
                })?;

            let trailing = pair
                .remaining_items()
                .map_err(framing(DecodeStage::InnerList))?;
            if trailing > 0 {
                return Err(DecodeError::TrailingElements {
                    key: field.key(),
                    count: trailing,
                });
            }
        }

        Ok(options)
    }

    fn decode_field(&mut self, field: OptionField, value: &Rlp<'_>) -> Result<(), DecoderError> {
        match field {
            OptionField::PowRequirement => self.pow_requirement = Some(value.as_val()?),
            OptionField::BloomFilter => self.bloom_filter = Some(value.as_val()?),
            OptionField::LightNodeEnabled => self.light_node_enabled = Some(value.as_val()?),
            OptionField::ConfirmationsEnabled => {
                self.confirmations_enabled = Some(value.as_val()?)
            }
            OptionField::RateLimits => self.rate_limits = Some(value.as_val()?),
            OptionField::TopicInterest => self.topic_interest = Some(decode_list(value)?),
        }
        Ok(())
    }
}

impl Decodable for StatusOptions {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        Self::decode_from(rlp).map_err(DecodeError::into_rlp)
    }
}

/// Decode a standalone option record.
///
/// The input must hold exactly one outer list.
pub fn decode_options(bytes: &[u8]) -> Result<StatusOptions, DecodeError> {
    let rlp = Rlp::new(bytes);
    let options = StatusOptions::decode_from(&rlp)?;

    let consumed = rlp
        .payload_info()
        .map_err(framing(DecodeStage::OuterList))?
        .total();
    if consumed < bytes.len() {
        return Err(DecodeError::TrailingBytes {
            count: bytes.len() - consumed,
        });
    }

    Ok(options)
}
