// lib.rs - Library interface for the bencode codec and .torrent inspector

pub mod bencode;
pub mod config;
pub mod engine;
pub mod torrent;

// Re-export commonly used types for easier testing
pub use bencode::{
    decode_bencode, decode_with, encode_bvalue, format_values, pair_entries, write_values, BValue,
    BencodeError, Decoded, Json,
};
pub use config::{Config, DecoderConfig, DuplicateKeys};
pub use torrent::{inspect, InfoHash, MetainfoError, MetainfoReport};
