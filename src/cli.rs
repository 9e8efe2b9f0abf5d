//! Command line surface.
//!
//! Exactly one of two flags selects the mode:
//! - `--start <name>.json` - play, rewriting `<logs_dir>/<name>.json` after every round
//! - `--total <name>.json` - print the statistics stored in `<logs_dir>/<name>.json`
//!
//! Clap rejects the two together; [`Cli::mode`] rejects a missing flag or a name that does
//! not end in `.json`.

use clap::Parser;

use crate::errors::GuessError;
use crate::validation::{validate_log_name, INVALID_COMMAND};

#[derive(Parser, Debug)]
#[command(name = "guessgame")]
#[command(about = "Игра «угадай число»: загадано 1 или 2, попробуйте угадать")]
#[command(override_usage = "guessgame --start|--total <название файла>")]
#[command(after_help = "Примеры:\n  \
    guessgame --start \"log.json\"  Начать игру и сохранять прогресс в файл log.json\n  \
    guessgame --total \"log.json\"  Получить результаты игры, сохраненной в файл log.json")]
pub struct Cli {
    /// Начать игру и сохранять прогресс в указанный JSON-файл
    #[arg(long, value_name = "ФАЙЛ", conflicts_with = "total")]
    pub start: Option<String>,

    /// Получить результаты игры, сохраненной в указанный JSON-файл
    #[arg(long, value_name = "ФАЙЛ")]
    pub total: Option<String>,

    /// Configuration file path (optional; defaults apply when it does not exist)
    #[arg(short, long, default_value = "guessgame.toml")]
    pub config: String,

    /// Verbose diagnostics on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The selected mode and its validated round log name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Play(String),
    Report(String),
}

impl Mode {
    pub fn log_name(&self) -> &str {
        match self {
            Mode::Play(name) | Mode::Report(name) => name,
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Result<Mode, GuessError> {
        if let Some(start) = &self.start {
            return validate_log_name(start).map(|name| Mode::Play(name.to_string()));
        }
        if let Some(total) = &self.total {
            return validate_log_name(total).map(|name| Mode::Report(name.to_string()));
        }
        Err(GuessError::Usage(INVALID_COMMAND.to_string()))
    }
}
