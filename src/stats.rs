//! Aggregate statistics over a round history, printed after every resolved round and by
//! report mode.

use std::fmt;

use crate::game::messages::{ROUNDS_LABEL, WINS_LABEL};
use crate::game::round::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rounds: usize,
    pub wins: usize,
    /// Share of wins in whole percent, halves rounded up. Zero for an empty history.
    pub percent: u32,
}

impl Summary {
    pub fn from_history(history: &History) -> Self {
        Self::new(history.len(), history.wins())
    }

    pub fn new(rounds: usize, wins: usize) -> Self {
        let percent = if rounds > 0 {
            (wins as f64 / rounds as f64 * 100.0).round() as u32
        } else {
            0
        };
        Self {
            rounds,
            wins,
            percent,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", ROUNDS_LABEL, self.rounds)?;
        write!(f, "{}: {} ({}%)", WINS_LABEL, self.wins, self.percent)
    }
}
