//! Option schema: the fixed mapping between record fields and wire keys.
//!
//! The table is written out once and consulted by both the encoder
//! (field → key) and the lenient decoder (key → field).
//!
//! INVARIANTS:
//! - Keys are unique (checked at compile time below).
//! - `SCHEMA[i].field as usize == i`, so field → key is a direct index.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A field of the status option record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    /// Minimum proof-of-work, carried as the bit pattern of an `f64`
    PowRequirement,
    /// Topic bloom filter bytes
    BloomFilter,
    /// Peer runs as a light node
    LightNodeEnabled,
    /// Peer sends message confirmations
    ConfirmationsEnabled,
    /// Advertised rate limits
    RateLimits,
    /// Topics the peer is interested in
    TopicInterest,
}

/// Static metadata for one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The record field
    pub field: OptionField,
    /// Wire key, an RLP string of decimal digits
    pub key: &'static str,
    /// Human readable name used in logs
    pub name: &'static str,
}

/// Number of fields known to this schema version.
pub const FIELD_COUNT: usize = 6;

const SCHEMA_ENTRIES: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        field: OptionField::PowRequirement,
        key: "0",
        name: "pow_requirement",
    },
    FieldSpec {
        field: OptionField::BloomFilter,
        key: "1",
        name: "bloom_filter",
    },
    FieldSpec {
        field: OptionField::LightNodeEnabled,
        key: "2",
        name: "light_node_enabled",
    },
    FieldSpec {
        field: OptionField::ConfirmationsEnabled,
        key: "3",
        name: "confirmations_enabled",
    },
    FieldSpec {
        field: OptionField::RateLimits,
        key: "4",
        name: "rate_limits",
    },
    FieldSpec {
        field: OptionField::TopicInterest,
        key: "5",
        name: "topic_interest",
    },
];

/// The option schema, in emission order.
pub static SCHEMA: [FieldSpec; FIELD_COUNT] = SCHEMA_ENTRIES;

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn schema_is_well_formed(schema: &[FieldSpec]) -> bool {
    let mut i = 0;
    while i < schema.len() {
        if schema[i].field as usize != i {
            return false;
        }
        let mut j = i + 1;
        while j < schema.len() {
            if bytes_eq(schema[i].key.as_bytes(), schema[j].key.as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    schema_is_well_formed(&SCHEMA_ENTRIES),
    "option schema has a duplicate wire key or an out-of-order entry"
);

/// Key → field index, built once on first lookup.
static KEY_INDEX: LazyLock<HashMap<&'static [u8], OptionField>> = LazyLock::new(|| {
    SCHEMA
        .iter()
        .map(|spec| (spec.key.as_bytes(), spec.field))
        .collect()
});

impl OptionField {
    /// All fields in schema order.
    pub const ALL: [OptionField; FIELD_COUNT] = [
        OptionField::PowRequirement,
        OptionField::BloomFilter,
        OptionField::LightNodeEnabled,
        OptionField::ConfirmationsEnabled,
        OptionField::RateLimits,
        OptionField::TopicInterest,
    ];

    /// Schema entry for this field.
    pub fn spec(self) -> &'static FieldSpec {
        &SCHEMA[self as usize]
    }

    /// Wire key of this field.
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Field name for logs and error messages.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Look up the field carried under a raw wire key.
    ///
    /// Returns `None` for keys this schema version does not know.
    pub fn from_key(key: &[u8]) -> Option<Self> {
        KEY_INDEX.get(key).copied()
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (key {})", self.name(), self.key())
    }
}
