//! Binary entrypoint for the guessgame CLI.
//!
//! Modes (mutually exclusive):
//! - `--start <name>.json` - play on stdin/stdout, rewriting `logs/<name>.json` every round
//! - `--total <name>.json` - print round count and wins stored in `logs/<name>.json`
//!
//! `logs/` sits next to the executable unless `storage.logs_dir` in the config says otherwise.
//!
//! See the library crate docs for module-level details: `guessgame::`.
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::info;

use guessgame::cli::{Cli, Mode};
use guessgame::config::Config;
use guessgame::game::{self, RandomSource};
use guessgame::storage::HistoryStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Usage errors end the process before any config, logging or mode work happens
    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    let config = Config::load_or_default(&cli.config).await?;
    init_logging(&config, cli.verbose);
    info!("Starting guessgame v{}", env!("CARGO_PKG_VERSION"));

    let store = HistoryStore::new(config.logs_dir()?);
    let mut stdout = std::io::stdout();
    match mode {
        Mode::Play(name) => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            game::play(&store, &name, stdin, &mut stdout, RandomSource).await?;
        }
        Mode::Report(name) => {
            game::report(&store, &name, &mut stdout).await?;
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Echo to the console only when a person is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
