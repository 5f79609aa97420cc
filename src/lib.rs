//! # Castlequest - a text adventure in a dragon-guarded castle
//!
//! A knight starts outside a castle, explores eleven connected rooms, collects
//! items, fights the soldiers on guard and finally the dragon, to rescue the
//! Queen. Everything is driven by short typed commands (`go north`,
//! `pick sword`, `fight`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use castlequest::adventure::{GameSession, Journal, TerminalConsole, ThreadRandom};
//!
//! fn main() -> anyhow::Result<()> {
//!     let journal = Journal::create("game_log.txt")?;
//!     let mut game = GameSession::new(TerminalConsole::new(), ThreadRandom, journal);
//!     let ending = game.play()?;
//!     println!("{:?}", ending);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`adventure`] - world model, combat, command dispatch and the game session
//! - [`config`] - TOML configuration for the binary

pub mod adventure;
pub mod config;
