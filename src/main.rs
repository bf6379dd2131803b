use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use torrent_peek::engine::{use_command, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = args.first().map(String::as_str).unwrap_or("torrent-peek");
        eprintln!("Usage: {} decode <bencoded_string> | info <file.torrent>", program);
        return ExitCode::from(1);
    }

    let cli = Cli::parse_from(&args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match use_command(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
