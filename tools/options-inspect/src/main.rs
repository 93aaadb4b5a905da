//! Options-Inspect: encode, decode and inspect handshake status options.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use status_telemetry::{init_telemetry, TelemetryConfig};

use options_inspect::{decode_command, encode_command, schema_command};

/// Options-Inspect: status option codec toolbox
#[derive(Parser, Debug)]
#[command(name = "options-inspect")]
#[command(about = "Encode, decode and inspect handshake status options")]
struct Args {
    /// Log at debug level regardless of STATUS_LOG_LEVEL
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode the local options described by a TOML config, print hex
    Encode {
        /// Path to the options config file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Decode a hex-encoded option record
    Decode {
        /// Hex bytes, with or without a 0x prefix
        hex: String,

        /// Peer the record came from, attached to log lines
        #[arg(long)]
        peer: Option<String>,

        /// Fill absent fields with their defaults before printing
        #[arg(long)]
        with_defaults: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the wire key table
    Schema,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_telemetry(&telemetry)?;

    let output = match args.command {
        Command::Encode { config } => encode_command(&config)?,
        Command::Decode {
            hex,
            peer,
            with_defaults,
            json,
        } => decode_command(&hex, peer.as_deref(), with_defaults, json)?,
        Command::Schema => schema_command(),
    };

    println!("{}", output.trim_end());
    Ok(())
}
