//! Options-Inspect: command implementations.
//!
//! Every command returns its output as a `String` so `main` only has to
//! print it.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use status_options::{
    decode_options, encode_options, LocalOptionsConfig, OptionField, StatusOptions, SCHEMA,
};
use status_telemetry::{log_event, log_peer_event};

const SUBSYSTEM: &str = "options-inspect";

/// Build the local record from a config file and encode it as hex.
pub fn encode_command(config_path: &Path) -> Result<String> {
    let config = LocalOptionsConfig::from_file(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let options = config.to_status_options()?;
    let bytes = encode_options(&options);

    log_event!(
        debug,
        SUBSYSTEM,
        "Encoded local status options",
        fields = options.present_fields().count(),
        bytes = bytes.len()
    );
    Ok(hex::encode(bytes))
}

/// Parse hex input, tolerating a `0x` prefix and surrounding whitespace.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).context("input is not valid hex")
}

/// Decode a hex-encoded record and describe it.
///
/// `peer` tags the log lines with the peer the record came from.
pub fn decode_command(
    input: &str,
    peer: Option<&str>,
    with_defaults: bool,
    as_json: bool,
) -> Result<String> {
    let bytes = parse_hex(input)?;
    let mut options = decode_options(&bytes).context("decoding status options")?;
    if with_defaults {
        options = options.with_defaults();
    }

    let validation = options.validate();
    match (peer, &validation) {
        (Some(peer), Ok(())) => log_peer_event!(
            debug,
            SUBSYSTEM,
            "Decoded peer status options",
            peer,
            fields = options.present_fields().count()
        ),
        (Some(peer), Err(e)) => log_peer_event!(
            warn,
            SUBSYSTEM,
            "Peer status options fail validation",
            peer,
            error = %e
        ),
        (None, Err(e)) => log_event!(
            warn,
            SUBSYSTEM,
            "Decoded options fail validation",
            error = %e
        ),
        (None, Ok(())) => {}
    }

    if as_json {
        let mut value = options_to_json(&options);
        value["valid"] = json!(validation.is_ok());
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = render_options(&options);
    match validation {
        Ok(()) => out.push_str("valid: yes\n"),
        Err(e) => {
            let _ = writeln!(out, "valid: no ({e})");
        }
    }
    Ok(out)
}

/// The wire key table.
pub fn schema_command() -> String {
    let mut out = String::from("key  field\n");
    for spec in SCHEMA.iter() {
        let _ = writeln!(out, "{:<4} {}", spec.key, spec.name);
    }
    out
}

fn field_value(options: &StatusOptions, field: OptionField) -> Option<String> {
    match field {
        OptionField::PowRequirement => options.pow_requirement_f().map(|p| p.to_string()),
        OptionField::BloomFilter => options
            .bloom_filter
            .as_ref()
            .map(|b| format!("0x{} ({} bytes)", hex::encode(b), b.len())),
        OptionField::LightNodeEnabled => options.light_node_enabled.map(|v| v.to_string()),
        OptionField::ConfirmationsEnabled => options.confirmations_enabled.map(|v| v.to_string()),
        OptionField::RateLimits => options.rate_limits.map(|l| {
            format!(
                "ip={} peer_id={} topic={}",
                l.ip_limits, l.peer_id_limits, l.topic_limits
            )
        }),
        OptionField::TopicInterest => options.topic_interest.as_ref().map(|topics| {
            let list: Vec<String> = topics.iter().map(ToString::to_string).collect();
            format!("[{}]", list.join(", "))
        }),
    }
}

/// One line per schema field, `-` for absent fields.
pub fn render_options(options: &StatusOptions) -> String {
    let mut out = String::new();
    for field in OptionField::ALL {
        let value = field_value(options, field).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{}: {}", field.name(), value);
    }
    out
}

/// JSON view of a record; absent fields are `null`.
pub fn options_to_json(options: &StatusOptions) -> Value {
    json!({
        "pow_requirement": options.pow_requirement_f(),
        "bloom_filter": options.bloom_filter.as_ref().map(hex::encode),
        "light_node_enabled": options.light_node_enabled,
        "confirmations_enabled": options.confirmations_enabled,
        "rate_limits": options.rate_limits.map(|l| json!({
            "ip": l.ip_limits,
            "peer_id": l.peer_id_limits,
            "topic": l.topic_limits,
        })),
        "topic_interest": options
            .topic_interest
            .as_ref()
            .map(|t| t.iter().map(ToString::to_string).collect::<Vec<_>>()),
    })
}
