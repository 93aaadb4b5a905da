//! # Schema Version Interop
//!
//! A peer running this schema version talks to:
//!
//! 1. **A newer peer**: its record carries keys `"6"` and up, which must be
//!    skipped while every known field is still read.
//! 2. **An older peer**: its record only knows a prefix of the schema, so the
//!    missing fields are filled with defaults on receipt.

#[cfg(test)]
mod tests {
    use rlp::Rlp;
    use shared_types::{is_full_node_bloom, RateLimits};
    use status_options::{
        decode_options, encode_options, prepare_options, receive_options, OptionField,
        StatusOptions,
    };

    use crate::fixtures::{
        encode_entries, full_node_options, future_entries, light_client_options, RawEntry,
    };

    /// Re-encode `options` as raw entries so they can be mixed with others.
    fn entries_of(options: &StatusOptions) -> Vec<RawEntry> {
        let bytes = encode_options(options);
        Rlp::new(&bytes)
            .iter()
            .map(|entry| {
                let key: String = entry.val_at(0).unwrap();
                let value = entry.at(1).unwrap().as_raw().to_vec();
                RawEntry::new(key).with_raw(value)
            })
            .collect()
    }

    // =============================================================================
    // NEWER PEER → THIS PEER
    // =============================================================================

    #[test]
    fn test_newer_peer_extra_keys_are_ignored() {
        let sent = light_client_options();

        let mut entries = entries_of(&sent);
        entries.extend(future_entries());
        let bytes = encode_entries(&entries);

        assert_eq!(decode_options(&bytes).unwrap(), sent);
    }

    #[test]
    fn test_newer_peer_keys_interleaved_with_known_keys() {
        let sent = full_node_options();
        let known = entries_of(&sent);
        let future = future_entries();

        let mut interleaved = Vec::new();
        for (i, entry) in known.into_iter().enumerate() {
            if let Some(extra) = future.get(i) {
                interleaved.push(extra.clone());
            }
            interleaved.push(entry);
        }
        let bytes = encode_entries(&interleaved);

        assert_eq!(decode_options(&bytes).unwrap(), sent);
    }

    #[test]
    fn test_newer_peer_sending_only_new_keys() {
        let bytes = encode_entries(&future_entries());
        let received = receive_options(&bytes).unwrap();
        assert_eq!(received, StatusOptions::new().with_defaults());
    }

    #[test]
    fn test_newer_peer_full_receive_pipeline() {
        let sent = full_node_options();
        let mut entries = future_entries();
        entries.extend(entries_of(&sent.clone().without_defaults()));
        let bytes = encode_entries(&entries);

        let received = receive_options(&bytes).unwrap();
        assert_eq!(received.pow_requirement_f(), Some(0.2));
        assert_eq!(received.rate_limits, Some(RateLimits::new(1000, 100, 10)));
        assert_eq!(received.topic_interest, sent.topic_interest);
        assert_eq!(received.light_node_enabled, Some(false));
        assert!(is_full_node_bloom(received.bloom_filter.as_deref().unwrap()));
    }

    // =============================================================================
    // OLDER PEER → THIS PEER
    // =============================================================================

    #[test]
    fn test_older_peer_without_rate_limits_or_topics() {
        // An older schema stopped at key "3".
        let older = light_client_options();
        assert!(older
            .present_fields()
            .all(|f| f != OptionField::RateLimits && f != OptionField::TopicInterest));

        let received = receive_options(&prepare_options(&older)).unwrap();
        assert_eq!(received.rate_limits, Some(RateLimits::default()));
        assert_eq!(received.topic_interest, None);
        assert_eq!(received.bloom_filter, older.bloom_filter);
        assert_eq!(received.light_node_enabled, Some(true));
    }

    #[test]
    fn test_peer_sending_empty_record_gets_all_defaults() {
        let received = receive_options(&[0xc0]).unwrap();
        assert_eq!(received, StatusOptions::new().with_defaults());
    }

    // =============================================================================
    // THIS PEER → OLDER PEER
    // =============================================================================

    #[test]
    fn test_stripped_record_only_carries_non_default_keys() {
        let local = StatusOptions::new()
            .with_pow_requirement_f(0.0)
            .with_light_node(false)
            .with_confirmations(true);

        let bytes = prepare_options(&local);
        let keys: Vec<String> = Rlp::new(&bytes)
            .iter()
            .map(|e| e.val_at(0).unwrap())
            .collect();
        assert_eq!(keys, vec!["3"]);
    }

    // =============================================================================
    // BOTH DIRECTIONS
    // =============================================================================

    #[test]
    fn test_handshake_exchange_between_full_node_and_light_client() {
        let full = full_node_options();
        let light = light_client_options();

        let full_sees = receive_options(&prepare_options(&light)).unwrap();
        let light_sees = receive_options(&prepare_options(&full)).unwrap();

        assert_eq!(full_sees.light_node_enabled, Some(true));
        assert_eq!(full_sees.pow_requirement_f(), Some(0.001));
        assert_eq!(light_sees.light_node_enabled, Some(false));
        assert_eq!(light_sees.topic_interest_len(), 2);
    }
}
