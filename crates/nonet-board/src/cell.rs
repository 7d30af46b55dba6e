use nonet_core::Digit;

/// The state of a single board cell.
///
/// Given cells come from the puzzle literal and stay fixed for the lifetime
/// of the board; filled cells hold player input and can be replaced or
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue from the puzzle literal; immutable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
