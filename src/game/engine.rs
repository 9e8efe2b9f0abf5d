//! Round engine: a one-state machine ("awaiting guess") driven by input lines.
//!
//! [`GameState::apply`] is the whole transition function. It touches no I/O; the hidden
//! number comes from a [`NumberSource`] so tests can script the draws. The session driver
//! in [`crate::game::session`] turns the returned [`Event`]s into console output and
//! file rewrites.

use rand::Rng;
use std::collections::VecDeque;

use super::round::{History, Round};

/// Smallest and largest value the player can guess.
pub const MIN_GUESS: u8 = 1;
pub const MAX_GUESS: u8 = 2;

/// Supplies hidden numbers, one per round.
pub trait NumberSource {
    fn draw(&mut self) -> u8;
}

/// Uniform draw over `MIN_GUESS..=MAX_GUESS` from the thread RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl NumberSource for RandomSource {
    fn draw(&mut self) -> u8 {
        rand::thread_rng().gen_range(MIN_GUESS..=MAX_GUESS)
    }
}

/// Replays a fixed list of hidden numbers, then keeps repeating the last one.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    queue: VecDeque<u8>,
    last: u8,
}

impl SequenceSource {
    pub fn new(draws: impl IntoIterator<Item = u8>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
            last: MIN_GUESS,
        }
    }
}

impl NumberSource for SequenceSource {
    fn draw(&mut self) -> u8 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}

/// What happened while handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A fresh hidden number was drawn and the player is prompted.
    RoundStarted,
    /// The line was not 1 or 2; nothing changed.
    InvalidGuess,
    /// The round resolved and was appended to the history.
    Resolved(Round),
}

/// Coerce a line to a guess the way a numeric unary plus would: surrounding whitespace is
/// ignored, decimal, exponent and `0x`/`0o`/`0b` forms are understood. Only values equal to
/// 1 or 2 are guesses.
pub fn parse_guess(line: &str) -> Option<u8> {
    let value = coerce_number(line.trim())?;
    if value == f64::from(MIN_GUESS) {
        Some(MIN_GUESS)
    } else if value == f64::from(MAX_GUESS) {
        Some(MAX_GUESS)
    } else {
        None
    }
}

fn coerce_number(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.starts_with(['+', '-']) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }
    // `f64::from_str` accepts spellings like "inf" and "nan"; neither can equal 1 or 2.
    s.parse::<f64>().ok()
}

#[derive(Debug, Clone)]
pub struct GameState {
    hidden: u8,
    history: History,
}

impl GameState {
    /// Enter the first round.
    pub fn new(source: &mut impl NumberSource) -> (Self, Event) {
        let state = Self {
            hidden: source.draw(),
            history: History::new(),
        };
        (state, Event::RoundStarted)
    }

    /// Handle one input line. Invalid input leaves the state untouched; a valid guess
    /// resolves the round, appends it, and draws the next hidden number.
    pub fn apply(mut self, line: &str, source: &mut impl NumberSource) -> (Self, Vec<Event>) {
        let Some(guess) = parse_guess(line) else {
            return (self, vec![Event::InvalidGuess]);
        };
        let round = self.history.record(guess == self.hidden);
        self.hidden = source.draw();
        (self, vec![Event::Resolved(round), Event::RoundStarted])
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    #[cfg(test)]
    fn hidden(&self) -> u8 {
        self.hidden
    }
}
