pub mod error;
pub mod infohash;
pub mod metadata;

pub use error::MetainfoError;
pub use infohash::InfoHash;
pub use metadata::{inspect, get_integer, get_string, MetainfoReport};
