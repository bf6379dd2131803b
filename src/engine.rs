// src/engine.rs
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};

use crate::bencode::{decode_with, write_values};
use crate::config::Config;
use crate::torrent::inspect;

#[derive(Debug, Parser)]
#[command(name = "torrent-peek", version, about = "Decode bencode and inspect .torrent files")]
pub struct Cli {
    /// TOML file with decoder settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a bencoded string and print it as JSON
    Decode { encoded: String },
    /// Print the tracker URL, length and info hash of a .torrent file
    Info {
        path: PathBuf,
        /// Also print the piece length and every piece hash
        #[arg(long)]
        pieces: bool,
    },
}

/// Runs one command, writing its report to `out`.
pub fn use_command<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load(path).with_context(|| format!("reading config {}", path.display()))?
        }
        None => Config::default(),
    };

    match &cli.command {
        Command::Decode { encoded } => {
            let decoded = decode_with(encoded.as_bytes(), &config.decoder)?;
            debug!(
                "Decoded {} value(s) from {} of {} bytes",
                decoded.values.len(),
                decoded.consumed,
                encoded.len()
            );
            write_values(&decoded.values, out)?;
            writeln!(out)?;
        }
        Command::Info { path, pieces } => {
            let buf = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            debug!("Read {} bytes from {}", buf.len(), path.display());

            let decoded = decode_with(&buf, &config.decoder)
                .with_context(|| format!("decoding {}", path.display()))?;
            let report = inspect(&decoded.values)?;

            writeln!(out, "Tracker URL: {}", report.tracker_url)?;
            writeln!(out, "Length: {}", report.length)?;
            writeln!(out, "Info Hash: {}", report.info_hash)?;

            if *pieces {
                if let Some(piece_length) = report.piece_length {
                    writeln!(out, "Piece Length: {}", piece_length)?;
                }
                writeln!(out, "Piece Hashes:")?;
                for piece_hash in &report.piece_hashes {
                    writeln!(out, "{}", hex::encode(piece_hash))?;
                }
            }
        }
    }
    Ok(())
}
