//! Puzzle session state for Nonet.
//!
//! [`PuzzleBoard`] owns the working grid of a single puzzle: which cells are
//! givens, what the player has filled in, and the solution computed once at
//! load time. Moves are validated before they are committed, so the board
//! always holds a valid partial fill; rejected moves come back as
//! [`RejectedMove`] values without touching the board.

pub use self::{board::*, cell::*, error::*};

mod board;
mod cell;
mod error;
