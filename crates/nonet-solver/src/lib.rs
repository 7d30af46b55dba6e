//! Backtracking solver for Nonet puzzles.
//!
//! See [`solve`] and [`solve_in_place`] for the two entry points. Solving is
//! a pure search over a [`nonet_core::DigitGrid`]; an unsolvable grid yields
//! a negative result, not an error.

pub use self::backtracking::*;

mod backtracking;
