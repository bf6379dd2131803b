use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What the decoder does when a dictionary repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateKeys {
    #[default]
    Reject,
    /// Keep the first value seen.
    KeepFirst,
    /// Keep the last value seen, at the first key's position.
    KeepLast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub duplicate_keys: DuplicateKeys,
    /// Maximum number of nested lists/dictionaries.
    pub max_depth: usize,
    /// Maximum input size in bytes.
    pub max_input_len: usize,
    /// Reject `i03e` and `i-0e`.
    pub strict_integers: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeys::Reject,
            max_depth: 64,
            max_input_len: 16 * 1024 * 1024, // 16 MiB
            strict_integers: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decoder: DecoderConfig,
}

impl Config {
    /// Reads a TOML config file. Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }
}
