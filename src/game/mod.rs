//! The guessing game itself.
//!
//! - [`round`] - round records and the in-memory history
//! - [`engine`] - hidden number draws, guess parsing, and the pure transition function
//! - [`session`] - play and report mode drivers that do the console and file I/O
//! - [`messages`] - player-facing text

pub mod engine;
pub mod messages;
pub mod round;
pub mod session;

pub use engine::{Event, GameState, NumberSource, RandomSource, SequenceSource};
pub use round::{History, Round};
pub use session::{play, report};
