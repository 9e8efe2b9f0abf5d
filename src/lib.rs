//! # guessgame - a two-choice guessing game for the terminal
//!
//! A hidden number (1 or 2) is drawn every round; the player types a guess per line on
//! stdin. Each resolved round is appended to an in-memory history which is written in full
//! to a JSON round log, and running statistics are printed. A saved log can later be
//! summarized without playing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guessgame::game::{play, RandomSource};
//! use guessgame::storage::HistoryStore;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let store = HistoryStore::new("logs");
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     let history = play(&store, "today.json", stdin, &mut std::io::stdout(), RandomSource).await?;
//!     println!("played {} rounds", history.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`] - flag parsing and mode selection
//! - [`game`] - round engine plus the play and report drivers
//! - [`storage`] - round log persistence
//! - [`stats`] - round count, wins and win percentage
//! - [`config`] - optional TOML configuration
//! - [`validation`] - round log name checks
//! - [`errors`] - the crate error type
//! - [`logutil`] - helpers for logging raw player input

pub mod cli;
pub mod config;
pub mod errors;
pub mod game;
pub mod logutil;
pub mod stats;
pub mod storage;
pub mod validation;
