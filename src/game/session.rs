//! Mode entry points: the interactive play loop and the one-shot report.
//!
//! Both take their input/output handles as parameters; `main` passes stdin/stdout, tests
//! pass byte slices and `Vec<u8>`.

use log::{debug, info, trace, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::engine::{Event, GameState, NumberSource};
use super::messages;
use super::round::History;
use crate::errors::GuessError;
use crate::logutil::escape_input;
use crate::stats::Summary;
use crate::storage::HistoryStore;

/// Run play mode until `input` reaches end-of-input.
///
/// Every resolved round is written to `out` as the outcome line, then the round log `name`
/// is rewritten, then the running statistics and the next round banner are printed.
/// A failed rewrite ends the session with the error. Returns the final history.
pub async fn play<R, W, S>(
    store: &HistoryStore,
    name: &str,
    mut input: R,
    out: &mut W,
    mut source: S,
) -> Result<History, GuessError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: NumberSource,
{
    info!("play session started, logging rounds to {}", store.path_for(name).display());
    let (mut state, first) = GameState::new(&mut source);
    render(out, store, name, &state, first)?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        for raw in input_lines(&buf) {
            trace!("input line: {}", escape_input(raw));
            let line = String::from_utf8_lossy(raw);
            let (next, events) = state.apply(&line, &mut source);
            state = next;
            for event in events {
                render(out, store, name, &state, event)?;
            }
        }
        out.flush()?;
    }

    info!("input closed after {} rounds", state.history().len());
    Ok(state.into_history())
}

/// Split one `read_until(b'\n')` chunk into lines. `\r\n`, `\n` and a lone `\r` all end a
/// line; a chunk cut off by end-of-input is a line too.
fn input_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}

fn render<W: Write>(
    out: &mut W,
    store: &HistoryStore,
    name: &str,
    state: &GameState,
    event: Event,
) -> Result<(), GuessError> {
    match event {
        Event::RoundStarted => {
            writeln!(out, "{}", messages::ROUND_SEPARATOR)?;
            writeln!(out, "{}", messages::ROUND_PROMPT)?;
        }
        Event::InvalidGuess => {
            debug!("rejected guess, re-prompting");
            writeln!(out, "{}", messages::INVALID_GUESS)?;
        }
        Event::Resolved(round) => {
            let text = if round.win { messages::WIN } else { messages::LOSS };
            writeln!(out, "{}", text)?;
            store.save(name, state.history())?;
            info!("round {} resolved (win: {})", round.number, round.win);
            writeln!(out, "{}", Summary::from_history(state.history()))?;
        }
    }
    Ok(())
}

/// Run report mode: print the statistics of round log `name`.
///
/// An unreadable log prints only the not-found message and returns `Ok(None)`.
pub async fn report<W: Write>(
    store: &HistoryStore,
    name: &str,
    out: &mut W,
) -> Result<Option<Summary>, GuessError> {
    match store.load(name).await {
        Ok(history) => {
            let summary = Summary::from_history(&history);
            writeln!(out, "{}", summary)?;
            Ok(Some(summary))
        }
        Err(GuessError::HistoryNotFound { path, source }) => {
            warn!("cannot read round log {}: {}", path.display(), source);
            writeln!(out, "{}", messages::FILE_NOT_FOUND)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
