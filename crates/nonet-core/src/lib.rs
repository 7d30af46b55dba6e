//! Core data structures for the Nonet puzzle workspace.
//!
//! This crate provides the fundamental types for representing a 9x9
//! number-placement puzzle. These types are shared by the solver and the
//! interactive board built on top of them.
//!
//! # Overview
//!
//! The crate is organized around three layers:
//!
//! 1. **Scalar types** - Single values with their invariants built in
//!    - [`digit`]: Type-safe representation of the digits 1-9
//!    - [`position`]: Board position (x, y) coordinate type
//!
//! 2. **Structural types** - The shape of the board
//!    - [`house`]: The 27 constraint groups (rows, columns, and 3x3 boxes)
//!    - [`digit_set`]: A compact set of digits, used for candidate tracking
//!
//! 3. **The grid** - The board substrate
//!    - [`grid`]: An 81-cell grid of optional digits with the constraint
//!      queries ([`is_conflicting`], [`candidates_at`], [`is_consistent`])
//!      that both validation and solving are built on.
//!
//! [`is_conflicting`]: DigitGrid::is_conflicting
//! [`candidates_at`]: DigitGrid::candidates_at
//! [`is_consistent`]: DigitGrid::is_consistent
//!
//! # Examples
//!
//! ```
//! use nonet_core::{Digit, DigitGrid, Position};
//!
//! // Start from an empty grid and place a digit
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // The placed digit constrains its row, column, and box
//! let candidates = grid.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5)); // 5 blocked in the same column
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::{DigitSet, DigitSetIter},
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
