//! Board logic for single-player minesweeper.
//!
//! A [`GameSession`] owns one [`Board`] together with its [`FlagTracker`]
//! and accepts coordinate-level [`Action`]s from whatever drives it,
//! answering each with an [`ActionReport`] for the renderer. Drawing,
//! input binding and difficulty pickers live outside this crate.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use flags::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod flags;
mod generator;
mod reveal;
mod session;
mod types;
