//! Peer-to-peer flows across schema versions and crates.

pub mod interop;
