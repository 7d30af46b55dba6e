//! Depth-first backtracking search over a [`DigitGrid`].
//!
//! The search fills the first empty cell in row-major order, trying its
//! candidate digits in ascending order. Each placement recurses; a dead end
//! unplaces the digit and moves on to the next candidate. The first complete
//! grid found is returned, so for a grid with several solutions the result is
//! the one that is lexicographically smallest in row-major reading order.
//!
//! An unsolvable grid is an ordinary outcome of the search, not an error:
//! [`solve`] returns `None` and [`solve_in_place`] returns `false`.

use nonet_core::DigitGrid;

/// Statistics collected during a backtracking search.
///
/// # Examples
///
/// ```
/// use nonet_core::DigitGrid;
/// use nonet_solver::solve_in_place;
///
/// let mut grid = DigitGrid::new();
/// let (solved, stats) = solve_in_place(&mut grid);
/// assert!(solved);
/// // Every placement that survived filled one of the empty cells.
/// assert_eq!(stats.placements - stats.backtracks, 81);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of digits placed, including ones later retracted.
    pub placements: usize,
    /// Number of placements retracted after hitting a dead end.
    pub backtracks: usize,
}

impl SolveStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Solves `grid`, returning the first solution found.
///
/// The input grid is not modified. Returns `None` if the grid has no
/// solution, including when its givens already violate a constraint.
///
/// # Examples
///
/// ```
/// use nonet_core::{Digit, DigitGrid, Position};
/// use nonet_solver::solve;
///
/// let solution = solve(&DigitGrid::new()).unwrap();
/// assert!(solution.is_solved());
///
/// // A contradictory grid has no solution.
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D1));
/// grid.set(Position::new(8, 0), Some(Digit::D1));
/// assert_eq!(solve(&grid), None);
/// ```
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    let mut working = grid.clone();
    let (solved, _stats) = solve_in_place(&mut working);
    solved.then_some(working)
}

/// Solves `grid` in place, filling its empty cells with the first solution
/// found.
///
/// # Returns
///
/// Returns a tuple `(solved, stats)` where:
/// * `solved` - `true` if the grid now holds a complete solution
/// * `stats` - Counts of placements made and retracted during the search
///
/// If no solution exists the grid is left exactly as it was: every trial
/// placement is retracted on the way out, and a grid whose filled cells
/// already conflict with each other is rejected before the search starts.
///
/// # Examples
///
/// ```
/// use nonet_core::DigitGrid;
/// use nonet_solver::solve_in_place;
///
/// let mut grid: DigitGrid = "
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
/// .parse()?;
///
/// let (solved, _stats) = solve_in_place(&mut grid);
/// assert!(solved);
/// assert!(grid.is_solved());
/// # Ok::<(), nonet_core::ParseGridError>(())
/// ```
pub fn solve_in_place(grid: &mut DigitGrid) -> (bool, SolveStats) {
    let mut stats = SolveStats::new();
    if !grid.is_consistent() {
        return (false, stats);
    }
    let solved = search(grid, &mut stats);
    (solved, stats)
}

fn search(grid: &mut DigitGrid, stats: &mut SolveStats) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in grid.candidates_at(pos) {
        grid.set(pos, Some(digit));
        stats.placements += 1;
        if search(grid, stats) {
            return true;
        }
        grid.set(pos, None);
        stats.backtracks += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use nonet_core::{Digit, Position};

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

    fn classic_puzzle() -> DigitGrid {
        CLASSIC_PUZZLE.parse().expect("valid puzzle grid")
    }

    fn classic_solution() -> DigitGrid {
        CLASSIC_SOLUTION.parse().expect("valid solution grid")
    }

    /// A grid whose filled cells are conflict-free but whose top-left cell
    /// has no candidate left: row 0 supplies 1-8 and column 0 supplies 9.
    fn candidate_starved_grid() -> DigitGrid {
        let mut grid = DigitGrid::new();
        for (x, digit) in (1..9).zip(Digit::ALL) {
            grid.set(Position::new(x, 0), Some(digit));
        }
        grid.set(Position::new(0, 1), Some(Digit::D9));
        grid
    }

    #[test]
    fn test_solve_in_place_classic_puzzle() {
        let mut grid = classic_puzzle();
        let (solved, stats) = solve_in_place(&mut grid);
        assert!(solved);
        assert_eq!(grid, classic_solution());
        // 51 empty cells were filled; the rest of the placements were
        // retracted along the way.
        assert_eq!(stats.placements - stats.backtracks, 51);
    }

    #[test]
    fn test_solve_in_place_already_solved_grid() {
        let mut grid = classic_solution();
        let (solved, stats) = solve_in_place(&mut grid);
        assert!(solved);
        assert_eq!(grid, classic_solution());
        assert_eq!(stats, SolveStats::new());
    }

    #[test]
    fn test_solve_in_place_empty_grid_fills_ascending() {
        let mut grid = DigitGrid::new();
        let (solved, _stats) = solve_in_place(&mut grid);
        assert!(solved);
        assert!(grid.is_solved());
        // With no constraints, row 0 takes the digits in ascending order.
        for (x, digit) in (0..9).zip(Digit::ALL) {
            assert_eq!(grid[Position::new(x, 0)], Some(digit));
        }
    }

    #[test]
    fn test_solve_in_place_rejects_conflicting_givens() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(8, 0), Some(Digit::D1));
        let original = grid.clone();

        let (solved, stats) = solve_in_place(&mut grid);
        assert!(!solved);
        assert_eq!(grid, original);
        // The search never starts on an inconsistent grid.
        assert_eq!(stats, SolveStats::new());
    }

    #[test]
    fn test_solve_in_place_failure_leaves_grid_unchanged() {
        let mut grid = candidate_starved_grid();
        assert!(grid.is_consistent());
        let original = grid.clone();

        let (solved, _stats) = solve_in_place(&mut grid);
        assert!(!solved);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_solve_returns_solution_without_mutating_input() {
        let grid = classic_puzzle();
        assert_eq!(solve(&grid), Some(classic_solution()));
        assert_eq!(grid, classic_puzzle());
    }

    #[test]
    fn test_solve_returns_none_for_unsolvable_grids() {
        assert_eq!(solve(&candidate_starved_grid()), None);

        let mut duplicate_box = DigitGrid::new();
        duplicate_box.set(Position::new(0, 0), Some(Digit::D7));
        duplicate_box.set(Position::new(2, 2), Some(Digit::D7));
        assert_eq!(solve(&duplicate_box), None);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let grid = classic_puzzle();
        assert_eq!(solve(&grid), solve(&grid));

        // A nearly empty grid has many solutions; the search still picks the
        // same one every time.
        let mut sparse = DigitGrid::new();
        sparse.set(Position::new(4, 4), Some(Digit::D5));
        assert_eq!(solve(&sparse), solve(&sparse));
    }
}
