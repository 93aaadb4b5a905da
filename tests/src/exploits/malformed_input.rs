//! # Malformed Peer Input
//!
//! ## Attack Vectors
//!
//! - Random and bit-flipped bytes: decoder must return, never panic
//! - Length headers pointing past the end of the input
//! - Huge unknown entries used to smuggle data or burn CPU
//! - Deeply nested lists inside an unknown entry
//! - A malformed entry hidden after valid ones (no partial record)

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rlp::RlpStream;
    use status_options::{
        decode_options, encode_options, receive_options, DecodeError, DecodeStage, StatusOptions,
    };

    use crate::fixtures::{encode_entries, full_node_options, RawEntry};

    // =============================================================================
    // FUZZING
    // =============================================================================

    #[test]
    fn test_random_bytes_never_panic() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..5_000 {
            let len = rng.gen_range(0..64);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let _ = decode_options(&bytes);
        }
    }

    #[test]
    fn test_mutated_valid_records_never_panic() {
        let mut rng = StdRng::seed_from_u64(42);
        let valid = encode_options(&full_node_options());

        for _ in 0..5_000 {
            let mut bytes = valid.clone();
            let flips = rng.gen_range(1..4);
            for _ in 0..flips {
                let i = rng.gen_range(0..bytes.len());
                bytes[i] = rng.gen();
            }
            if let Ok(options) = decode_options(&bytes) {
                // Whatever decodes must re-encode.
                let _ = encode_options(&options);
            }
        }
    }

    #[test]
    fn test_every_truncation_of_a_valid_record_fails() {
        let valid = encode_options(&full_node_options());
        for cut in 0..valid.len() {
            assert!(
                decode_options(&valid[..cut]).is_err(),
                "prefix of length {cut} decoded"
            );
        }
    }

    // =============================================================================
    // LENGTH HEADER ATTACKS
    // =============================================================================

    #[test]
    fn test_outer_length_beyond_input() {
        // Long-form list header claiming 2^32 - 1 bytes of payload.
        let bytes = [0xfb, 0xff, 0xff, 0xff, 0xff, 0xc0];
        assert!(matches!(
            decode_options(&bytes),
            Err(DecodeError::Framing {
                stage: DecodeStage::OuterList,
                ..
            })
        ));
    }

    #[test]
    fn test_inner_length_beyond_outer_payload() {
        // Outer says 3 bytes; inner entry claims 5.
        let bytes = [0xc3, 0xc5, 0x32, 0x01];
        assert!(decode_options(&bytes).is_err());
    }

    #[test]
    fn test_truncated_value_inside_unknown_entry() {
        // [["9", <string claiming 3 bytes, 1 present>]]
        let bytes = [0xc4, 0xc3, 0x39, 0x83, 0x61];
        assert!(decode_options(&bytes).is_err());
    }

    // =============================================================================
    // RESOURCE ATTACKS
    // =============================================================================

    #[test]
    fn test_huge_unknown_entry_is_skipped_quickly() {
        let blob = vec![0xABu8; 4 * 1024 * 1024];
        let bytes = encode_entries(&[
            RawEntry::new("2").with(&true),
            RawEntry::new("77").with(&blob).with(&blob),
        ]);

        let start = Instant::now();
        let options = decode_options(&bytes).unwrap();
        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(options, StatusOptions::new().with_light_node(true));
    }

    #[test]
    fn test_deeply_nested_unknown_entry_is_skipped() {
        let depth = 1_000;
        let mut nested = RlpStream::new();
        for _ in 0..depth {
            nested.begin_list(1);
        }
        nested.append(&"bottom");
        let nested = nested.out().to_vec();

        let bytes = encode_entries(&[RawEntry::new("8").with_raw(nested)]);
        assert_eq!(decode_options(&bytes).unwrap(), StatusOptions::new());
    }

    #[test]
    fn test_many_unknown_entries() {
        let entries: Vec<RawEntry> = (6..20_006u32)
            .map(|k| RawEntry::new(k.to_string()).with(&k))
            .collect();
        let bytes = encode_entries(&entries);
        assert_eq!(decode_options(&bytes).unwrap(), StatusOptions::new());
    }

    // =============================================================================
    // ATOMICITY
    // =============================================================================

    #[test]
    fn test_bad_entry_after_good_entries_yields_no_record() {
        let bytes = encode_entries(&[
            RawEntry::new("0").with(&1.0f64.to_bits()),
            RawEntry::new("2").with(&true),
            RawEntry::new("4").with(&vec![1u8, 2, 3]),
        ]);

        let err = receive_options(&bytes).unwrap_err();
        assert!(err.to_string().contains("option 4"));
    }

    #[test]
    fn test_known_key_with_extra_elements_is_rejected() {
        let bytes = encode_entries(&[RawEntry::new("3").with(&true).with(&"smuggled")]);
        assert_eq!(
            decode_options(&bytes),
            Err(DecodeError::TrailingElements { key: "3", count: 1 })
        );
    }

    #[test]
    fn test_topic_of_wrong_width_is_rejected() {
        let mut topics = RlpStream::new_list(2);
        topics.append(&vec![1u8, 2, 3, 4]);
        topics.append(&vec![1u8, 2, 3, 4, 5]);
        let bytes = encode_entries(&[RawEntry::new("5").with_raw(topics.out().to_vec())]);

        assert!(matches!(
            decode_options(&bytes),
            Err(DecodeError::InvalidValue { key: "5", .. })
        ));
    }
}
