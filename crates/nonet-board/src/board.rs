use nonet_core::{Digit, DigitGrid, DigitSet, Position};
use nonet_solver::solve;

use crate::{CellState, RejectedMove, UnsolvablePuzzle};

/// A puzzle session: the working grid, its givens, and the solution.
///
/// The board is created from a puzzle literal by [`load`](Self::load), which
/// marks the literal's digits as given cells and solves a copy of the grid
/// once to obtain the solution. Afterwards every move goes through
/// [`set_digit`](Self::set_digit) or [`clear_cell`](Self::clear_cell), which
/// validate before committing: a rejected move leaves the board exactly as it
/// was. The working grid is therefore a valid partial fill at all times.
///
/// # Examples
///
/// ```
/// use nonet_board::{CellState, PuzzleBoard};
/// use nonet_core::{Digit, DigitGrid, Position};
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .expect("valid puzzle grid");
///
/// let mut board = PuzzleBoard::load(puzzle)?;
/// assert_eq!(board.cell(Position::new(0, 0)), CellState::Given(Digit::D5));
/// assert!(!board.is_complete());
///
/// // The first empty cell accepts 1, 2, or 4.
/// let pos = Position::new(2, 0);
/// let candidates: Vec<_> = board.valid_candidates(pos).iter().collect();
/// assert_eq!(candidates, vec![Digit::D1, Digit::D2, Digit::D4]);
///
/// board.set_digit(pos, Digit::D4)?;
/// assert_eq!(board.cell(pos), CellState::Filled(Digit::D4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleBoard {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl PuzzleBoard {
    /// Creates a board from a puzzle literal.
    ///
    /// Cells holding a digit in `puzzle` become given cells; the rest start
    /// empty. The solver runs once against a copy of the literal and the
    /// first solution found is stored as the board's solution.
    ///
    /// # Errors
    ///
    /// Returns [`UnsolvablePuzzle`] if no solution exists, including when the
    /// givens already conflict with each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::PuzzleBoard;
    /// use nonet_core::DigitGrid;
    ///
    /// let board = PuzzleBoard::load(DigitGrid::new())?;
    /// assert_eq!(board.given_count(), 0);
    /// assert!(board.solution().is_solved());
    /// # Ok::<(), nonet_board::UnsolvablePuzzle>(())
    /// ```
    pub fn load(puzzle: DigitGrid) -> Result<Self, UnsolvablePuzzle> {
        let solution = solve(&puzzle).ok_or(UnsolvablePuzzle)?;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Ok(Self { cells, solution })
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns a snapshot of the working grid: givens and player fills as
    /// digits, everything else empty.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns true if `digit` can occupy `pos` without duplicating a digit
    /// in the same row, column, or box.
    ///
    /// The cell at `pos` itself is excluded from the check, so a placed digit
    /// re-validates as valid against its own cell, and the result does not
    /// change between calls while the board is unchanged. Whether the cell is
    /// a given is not considered here; [`set_digit`](Self::set_digit) checks
    /// that when committing.
    #[must_use]
    pub fn is_valid(&self, digit: Digit, pos: Position) -> bool {
        !self.is_conflicting(pos, digit)
    }

    /// Returns the digits that `pos` currently accepts, in ascending order.
    ///
    /// On a freshly loaded board every empty cell's candidates include the
    /// solution's digit for that cell.
    #[must_use]
    pub fn valid_candidates(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for peer_pos in pos.house_peers() {
            if let Some(digit) = self.cell(peer_pos).as_digit() {
                candidates.remove(digit);
            }
        }
        candidates
    }

    fn is_conflicting(&self, pos: Position, digit: Digit) -> bool {
        for peer_pos in pos.house_peers() {
            if self.cell(peer_pos).as_digit() == Some(digit) {
                return true;
            }
        }
        false
    }

    /// Places `digit` at `pos` as player input.
    ///
    /// An empty cell becomes filled; a filled cell has its digit replaced.
    /// The move is validated first and the board is only mutated when it
    /// passes.
    ///
    /// # Errors
    ///
    /// Returns [`RejectedMove::GivenCell`] if the cell is a given, or
    /// [`RejectedMove::Conflict`] if the digit would duplicate a digit in the
    /// cell's row, column, or box. The board is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_board::{CellState, PuzzleBoard, RejectedMove};
    /// use nonet_core::{Digit, DigitGrid, Position};
    ///
    /// let mut board = PuzzleBoard::load(DigitGrid::new())?;
    /// let pos = Position::new(0, 0);
    ///
    /// board.set_digit(pos, Digit::D5)?;
    /// assert_eq!(board.cell(pos), CellState::Filled(Digit::D5));
    ///
    /// // 5 is now taken for the whole row.
    /// assert_eq!(
    ///     board.set_digit(Position::new(8, 0), Digit::D5),
    ///     Err(RejectedMove::Conflict)
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), RejectedMove> {
        if self.cell(pos).is_given() {
            return Err(RejectedMove::GivenCell);
        }
        if self.is_conflicting(pos, digit) {
            return Err(RejectedMove::Conflict);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at `pos`.
    ///
    /// A filled cell becomes empty; clearing an already-empty cell is an
    /// accepted no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RejectedMove::GivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), RejectedMove> {
        if self.cell(pos).is_given() {
            return Err(RejectedMove::GivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Clears every player-filled cell, restoring the board to its loaded
    /// state. Given cells and the stored solution are untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns true if every cell matches the stored solution.
    ///
    /// This is the board's sole win condition. A full grid that satisfies
    /// the one-per-house rule but differs from the stored solution is not
    /// reported complete; for a literal with several solutions only the one
    /// the solver found first is accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.to_digit_grid() == self.solution
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given()).count()
    }

    /// Returns how many cells currently hold `digit`, counting both givens
    /// and player fills.
    #[must_use]
    pub fn digit_count(&self, digit: Digit) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.as_digit() == Some(digit))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const CLASSIC_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn classic_board() -> PuzzleBoard {
        let puzzle = CLASSIC_PUZZLE.parse().expect("valid puzzle grid");
        PuzzleBoard::load(puzzle).expect("solvable puzzle")
    }

    fn classic_solution() -> DigitGrid {
        CLASSIC_SOLUTION.parse().expect("valid solution grid")
    }

    fn empty_positions(board: &PuzzleBoard) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| board.cell(pos).is_empty())
            .collect()
    }

    #[test]
    fn test_load_marks_givens_and_solves() {
        let board = classic_board();

        assert_eq!(board.cell(Position::new(0, 0)), CellState::Given(Digit::D5));
        assert_eq!(board.cell(Position::new(2, 0)), CellState::Empty);
        assert_eq!(board.given_count(), 30);
        assert_eq!(board.solution(), &classic_solution());
    }

    #[test]
    fn test_load_preserves_givens_in_solution() {
        let board = classic_board();
        let puzzle: DigitGrid = CLASSIC_PUZZLE.parse().expect("valid puzzle grid");

        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(board.solution()[pos], Some(digit));
            }
        }
    }

    #[test]
    fn test_load_rejects_conflicting_givens() {
        let mut puzzle = DigitGrid::new();
        puzzle.set(Position::new(0, 0), Some(Digit::D1));
        puzzle.set(Position::new(8, 0), Some(Digit::D1));
        assert_eq!(PuzzleBoard::load(puzzle), Err(UnsolvablePuzzle));
    }

    #[test]
    fn test_load_rejects_candidate_starved_puzzle() {
        // Conflict-free givens, but (0, 0) sees 1-8 in its row and 9 in its
        // column.
        let mut puzzle = DigitGrid::new();
        for (x, digit) in (1..9).zip(Digit::ALL) {
            puzzle.set(Position::new(x, 0), Some(digit));
        }
        puzzle.set(Position::new(0, 1), Some(Digit::D9));
        assert!(puzzle.is_consistent());
        assert_eq!(PuzzleBoard::load(puzzle), Err(UnsolvablePuzzle));
    }

    #[test]
    fn test_set_digit_fills_and_replaces() {
        let mut board = classic_board();
        let pos = Position::new(2, 0);

        board.set_digit(pos, Digit::D1).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D1));

        // A filled cell accepts a different valid digit.
        board.set_digit(pos, Digit::D2).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D2));

        // Re-entering the same digit passes validation against itself.
        board.set_digit(pos, Digit::D2).unwrap();
        assert_eq!(board.cell(pos), CellState::Filled(Digit::D2));
    }

    #[test]
    fn test_set_digit_rejects_given_cell_without_mutation() {
        let mut board = classic_board();
        let before = board.clone();

        assert_eq!(
            board.set_digit(Position::new(0, 0), Digit::D1),
            Err(RejectedMove::GivenCell)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_digit_rejects_conflict_without_mutation() {
        let mut board = classic_board();
        let before = board.clone();

        // Row 0 already holds a given 5.
        assert_eq!(
            board.set_digit(Position::new(2, 0), Digit::D5),
            Err(RejectedMove::Conflict)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_cell_operations() {
        let mut board = classic_board();
        let pos = Position::new(2, 0);

        board.set_digit(pos, Digit::D1).unwrap();
        board.clear_cell(pos).unwrap();
        assert_eq!(board.cell(pos), CellState::Empty);

        // Clearing an empty cell is a no-op.
        board.clear_cell(pos).unwrap();
        assert_eq!(board.cell(pos), CellState::Empty);

        assert_eq!(
            board.clear_cell(Position::new(0, 0)),
            Err(RejectedMove::GivenCell)
        );
    }

    #[test]
    fn test_is_valid_matches_constraint() {
        let board = classic_board();
        let pos = Position::new(2, 0);

        assert!(board.is_valid(Digit::D1, pos));
        assert!(!board.is_valid(Digit::D5, pos)); // row duplicate
        assert!(!board.is_valid(Digit::D8, pos)); // column and box duplicate

        // A given re-validates against its own cell.
        assert!(board.is_valid(Digit::D5, Position::new(0, 0)));
    }

    #[test]
    fn test_is_valid_is_idempotent() {
        let board = classic_board();
        for pos in [Position::new(2, 0), Position::new(4, 4)] {
            for digit in Digit::ALL {
                let first = board.is_valid(digit, pos);
                assert_eq!(board.is_valid(digit, pos), first);
            }
        }
    }

    #[test]
    fn test_is_valid_sees_player_fills() {
        let mut board = classic_board();
        // (2, 3) shares column 2 with (2, 0) and accepts 1 initially.
        assert!(board.is_valid(Digit::D1, Position::new(2, 3)));

        board.set_digit(Position::new(2, 0), Digit::D1).unwrap();
        assert!(!board.is_valid(Digit::D1, Position::new(2, 3)));
    }

    #[test]
    fn test_valid_candidates_ascending() {
        let board = classic_board();
        let candidates: Vec<_> = board.valid_candidates(Position::new(2, 0)).iter().collect();
        assert_eq!(candidates, vec![Digit::D1, Digit::D2, Digit::D4]);
    }

    #[test]
    fn test_valid_candidates_include_solution_digit() {
        let board = classic_board();
        for pos in empty_positions(&board) {
            let digit = board.solution()[pos].expect("solution is complete");
            assert!(board.valid_candidates(pos).contains(digit));
        }
    }

    #[test]
    fn test_is_complete_lifecycle() {
        let mut board = classic_board();
        assert!(!board.is_complete());

        let empty = empty_positions(&board);
        let (last, rest) = empty.split_last().expect("puzzle has empty cells");

        for &pos in rest {
            let digit = board.solution()[pos].expect("solution is complete");
            board.set_digit(pos, digit).unwrap();
            assert!(!board.is_complete());
        }

        let digit = board.solution()[*last].expect("solution is complete");
        board.set_digit(*last, digit).unwrap();
        assert!(board.is_complete());

        // Wrong again as soon as a cell is cleared.
        board.clear_cell(*last).unwrap();
        assert!(!board.is_complete());
    }

    #[test]
    fn test_solved_grid_is_consistent() {
        let mut board = classic_board();
        for pos in empty_positions(&board) {
            let digit = board.solution()[pos].expect("solution is complete");
            board.set_digit(pos, digit).unwrap();
        }
        // Every placed digit re-validates against the finished grid.
        let grid = board.to_digit_grid();
        assert!(grid.is_solved());
        for pos in Position::ALL {
            let digit = grid[pos].expect("grid is full");
            assert!(board.is_valid(digit, pos));
        }
    }

    #[test]
    fn test_reset_restores_loaded_state() {
        let mut board = classic_board();
        let fresh = board.clone();

        for pos in empty_positions(&board).into_iter().take(5) {
            let digit = board.solution()[pos].expect("solution is complete");
            board.set_digit(pos, digit).unwrap();
        }
        assert_ne!(board, fresh);

        board.reset();
        assert_eq!(board, fresh);
    }

    #[test]
    fn test_to_digit_grid_snapshot() {
        let board = classic_board();
        let puzzle: DigitGrid = CLASSIC_PUZZLE.parse().expect("valid puzzle grid");
        assert_eq!(board.to_digit_grid(), puzzle);
    }

    #[test]
    fn test_digit_count_tracks_moves() {
        let mut board = classic_board();
        assert_eq!(board.digit_count(Digit::D5), 3);

        // (6, 2) is where the solution puts its next 5.
        let pos = Position::new(6, 2);
        board.set_digit(pos, Digit::D5).unwrap();
        assert_eq!(board.digit_count(Digit::D5), 4);

        board.clear_cell(pos).unwrap();
        assert_eq!(board.digit_count(Digit::D5), 3);
    }
}
