//! # Full-Node Bloom Filter
//!
//! A peer that does not advertise a bloom filter is treated as wanting every
//! message, which is expressed as a filter with all bits set.

/// Size of a topic bloom filter in bytes.
pub const BLOOM_FILTER_SIZE: usize = 64;

/// Build the "accept everything" bloom filter.
pub fn make_full_node_bloom() -> Vec<u8> {
    vec![0xFF; BLOOM_FILTER_SIZE]
}

/// True if `bloom` is the full-node filter.
pub fn is_full_node_bloom(bloom: &[u8]) -> bool {
    bloom.len() == BLOOM_FILTER_SIZE && bloom.iter().all(|&b| b == 0xFF)
}
