/// Reasons a move on a [`PuzzleBoard`](crate::PuzzleBoard) is rejected.
///
/// A rejected move never mutates the board; the caller reports the reason
/// and waits for new input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RejectedMove {
    /// The targeted cell is one of the puzzle's givens.
    #[display("cannot modify a given cell")]
    GivenCell,
    /// The digit already appears elsewhere in the cell's row, column, or box.
    #[display("digit conflicts with its row, column, or box")]
    Conflict,
}

/// Error returned by [`PuzzleBoard::load`](crate::PuzzleBoard::load) when the
/// puzzle literal admits no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("puzzle has no solution")]
pub struct UnsolvablePuzzle;
