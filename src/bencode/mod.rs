pub mod bvalue;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;

pub use bvalue::BValue;   // re-export
pub use decode::{decode_bencode, decode_with, pair_entries, Decoded};   // re-export
pub use encode::{encode_bvalue, encode_into};   // re-export
pub use error::BencodeError;
pub use format::{format_values, write_values, Json};
