//! Wire codec for status options (RLP).
//!
//! Wire shape: `[[key, value], [key, value], ...]`, one entry per present
//! field. Keys are the RLP strings `"0"`..`"5"`; entries whose key this
//! version does not know are skipped.

mod cursor;
pub mod decode;
pub mod encode;

pub use decode::decode_options;
pub use encode::encode_options;
