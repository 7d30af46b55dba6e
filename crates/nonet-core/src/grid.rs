//! The 9x9 digit grid and its constraint queries.

use std::{fmt, ops::Index, str::FromStr};

use crate::{Digit, DigitSet, House, Position};

/// A 9x9 grid of optional digits, indexed by [`Position`].
///
/// This is the shared substrate of the whole workspace: the puzzle literal,
/// the working grid, and the solution grid are all `DigitGrid`s. The
/// constraint check ([`is_conflicting`]) and the candidate enumerator
/// ([`candidates_at`]) live here so that board validation and the solver use
/// the exact same rule.
///
/// [`is_conflicting`]: DigitGrid::is_conflicting
/// [`candidates_at`]: DigitGrid::candidates_at
///
/// # Text form
///
/// Grids parse from an 81-cell string: digits place themselves, `.` and `_`
/// are empty cells, and whitespace is ignored, so grids can be laid out as
/// readable 9-line blocks. [`Display`](fmt::Display) renders the same form
/// back, one row per line with `.` for empty.
///
/// # Examples
///
/// ```
/// use nonet_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
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
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(2, 0)], None);
/// assert_eq!(grid.first_empty(), Some(Position::new(2, 0)));
/// # Ok::<(), nonet_core::ParseGridError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from nine rows of nine cell values, where 0 denotes an
    /// empty cell. `rows[y][x]` becomes the cell at column `x` of row `y`.
    ///
    /// This is the loading form for compiled-in puzzle literals.
    ///
    /// # Panics
    ///
    /// Panics if any cell value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::{Digit, DigitGrid, Position};
    ///
    /// let mut rows = [[0; 9]; 9];
    /// rows[2][7] = 6;
    /// let grid = DigitGrid::from_rows(rows);
    /// assert_eq!(grid[Position::new(7, 2)], Some(Digit::D6));
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for (y, row) in (0..9).zip(&rows) {
            for (x, &value) in (0..9).zip(row) {
                if value != 0 {
                    grid.set(Position::new(x, y), Some(Digit::from_value(value)));
                }
            }
        }
        grid
    }

    /// Returns the cell value at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos` to `digit` (`None` empties the cell).
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns true if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns true if placing `digit` at `pos` would duplicate a digit in
    /// the same row, column, or box.
    ///
    /// The cell at `pos` itself is excluded from the check, so re-validating
    /// a cell against its own already-placed value reports no conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    ///
    /// assert!(grid.is_conflicting(Position::new(8, 0), Digit::D5)); // same row
    /// assert!(grid.is_conflicting(Position::new(0, 8), Digit::D5)); // same column
    /// assert!(grid.is_conflicting(Position::new(1, 1), Digit::D5)); // same box
    /// assert!(!grid.is_conflicting(Position::new(8, 8), Digit::D5));
    /// // The queried cell's own value does not conflict with itself.
    /// assert!(!grid.is_conflicting(Position::new(0, 0), Digit::D5));
    /// ```
    #[must_use]
    pub fn is_conflicting(&self, pos: Position, digit: Digit) -> bool {
        for peer_pos in pos.house_peers() {
            if self[peer_pos] == Some(digit) {
                return true;
            }
        }
        false
    }

    /// Returns the digits that can be placed at `pos` without conflicting
    /// with the current grid, in ascending order.
    ///
    /// The queried cell's own value is ignored, and whether the cell is
    /// currently occupied is not considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::{Digit, DigitGrid, Position};
    ///
    /// let mut grid = DigitGrid::new();
    /// grid.set(Position::new(0, 0), Some(Digit::D1));
    /// grid.set(Position::new(8, 4), Some(Digit::D2));
    ///
    /// let candidates = grid.candidates_at(Position::new(0, 4));
    /// assert!(!candidates.contains(Digit::D1)); // blocked by column
    /// assert!(!candidates.contains(Digit::D2)); // blocked by row
    /// assert_eq!(candidates.len(), 7);
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for peer_pos in pos.house_peers() {
            if let Some(digit) = self[peer_pos] {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns true if no house contains a duplicate digit.
    ///
    /// Empty cells are ignored; an empty grid is trivially consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.iter().all(|&house| !self.house_has_duplicate(house))
    }

    /// Returns true if the grid is full and every house contains each digit
    /// exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_consistent()
    }

    fn house_has_duplicate(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            if let Some(digit) = self[pos] {
                if seen.contains(digit) {
                    return true;
                }
                seen.insert(digit);
            }
        }
        false
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y != 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DigitGrid [")?;
        for line in self.to_string().lines() {
            writeln!(f, "    {line}")?;
        }
        write!(f, "]")
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '.' | '_' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                '7' => Some(Digit::D7),
                '8' => Some(Digit::D8),
                '9' => Some(Digit::D9),
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            if let Some(cell) = cells.get_mut(count) {
                *cell = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

/// Error parsing a [`DigitGrid`] from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contained a character other than a digit, `.`, `_`, or
    /// whitespace.
    #[display("unexpected character {ch:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

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

    #[test]
    fn test_from_rows_matches_parsed_text() {
        let rows = [
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ];
        assert_eq!(DigitGrid::from_rows(rows), classic_puzzle());
    }

    #[test]
    fn test_get_set_and_index() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 6);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Some(Digit::D7));
        assert_eq!(grid.get(pos), Some(Digit::D7));
        assert_eq!(grid[pos], Some(Digit::D7));

        grid.set(pos, None);
        assert_eq!(grid[pos], None);
    }

    #[test]
    fn test_first_empty_scans_row_major() {
        assert_eq!(DigitGrid::new().first_empty(), Some(Position::new(0, 0)));
        assert_eq!(classic_puzzle().first_empty(), Some(Position::new(2, 0)));
        assert_eq!(classic_solution().first_empty(), None);
    }

    #[test]
    fn test_empty_count() {
        assert_eq!(DigitGrid::new().empty_count(), 81);
        assert_eq!(classic_puzzle().empty_count(), 51);
        assert_eq!(classic_solution().empty_count(), 0);
    }

    #[test]
    fn test_is_conflicting_detects_each_house() {
        let grid = classic_puzzle();
        // Row 0 holds 5 at (0, 0); column 4 holds 9 at (4, 1); box 0 holds 8
        // at (2, 2).
        assert!(grid.is_conflicting(Position::new(2, 0), Digit::D5));
        assert!(grid.is_conflicting(Position::new(4, 8), Digit::D9));
        assert!(grid.is_conflicting(Position::new(1, 1), Digit::D8));
        assert!(!grid.is_conflicting(Position::new(2, 0), Digit::D1));
    }

    #[test]
    fn test_is_conflicting_excludes_queried_cell() {
        let grid = classic_puzzle();
        // Every given re-validates against its own value.
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                assert!(!grid.is_conflicting(pos, digit));
            }
        }
    }

    #[test]
    fn test_is_conflicting_is_idempotent() {
        let grid = classic_puzzle();
        let pos = Position::new(2, 0);
        let first = grid.is_conflicting(pos, Digit::D4);
        assert_eq!(grid.is_conflicting(pos, Digit::D4), first);
        assert_eq!(grid.is_conflicting(pos, Digit::D4), first);
    }

    #[test]
    fn test_candidates_at() {
        let grid = classic_puzzle();
        // (2, 0) sees 5, 3, 7 in its row, 8 in its column, and 5, 3, 6, 9, 8
        // in its box.
        let candidates: Vec<_> = grid.candidates_at(Position::new(2, 0)).iter().collect();
        assert_eq!(candidates, vec![Digit::D1, Digit::D2, Digit::D4]);
    }

    #[test]
    fn test_candidates_on_solved_grid_reduce_to_own_digit() {
        let grid = classic_solution();
        for pos in Position::ALL {
            let candidates = grid.candidates_at(pos);
            assert_eq!(candidates.as_single(), grid[pos]);
        }
    }

    #[test]
    fn test_is_consistent() {
        assert!(DigitGrid::new().is_consistent());
        assert!(classic_puzzle().is_consistent());
        assert!(classic_solution().is_consistent());

        let mut duplicate_row = DigitGrid::new();
        duplicate_row.set(Position::new(0, 0), Some(Digit::D5));
        duplicate_row.set(Position::new(7, 0), Some(Digit::D5));
        assert!(!duplicate_row.is_consistent());

        let mut duplicate_box = DigitGrid::new();
        duplicate_box.set(Position::new(0, 0), Some(Digit::D5));
        duplicate_box.set(Position::new(2, 2), Some(Digit::D5));
        assert!(!duplicate_box.is_consistent());
    }

    #[test]
    fn test_is_solved() {
        assert!(classic_solution().is_solved());
        assert!(!classic_puzzle().is_solved());
        assert!(!DigitGrid::new().is_solved());

        // Full but inconsistent.
        let all_ones: DigitGrid = "1".repeat(81).parse().expect("valid grid text");
        assert!(all_ones.is_full());
        assert!(!all_ones.is_solved());
    }

    #[test]
    fn test_display_round_trip() {
        let grid = classic_puzzle();
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 9);
        assert!(rendered.starts_with("53..7...."));
        let reparsed: DigitGrid = rendered.parse().expect("display output parses");
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
        assert_eq!(
            "1".repeat(80).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::WrongCellCount { count: 82 })
        );
    }

    proptest! {
        #[test]
        fn prop_candidates_agree_with_conflict_check(
            placements in proptest::collection::vec((0..81_usize, 1..=9_u8), 0..40),
            cell in 0..81_usize,
            value in 1..=9_u8,
        ) {
            // Build an arbitrary consistent partial grid by skipping
            // conflicting placements, mirroring how a board accepts moves.
            let mut grid = DigitGrid::new();
            for (index, value) in placements {
                let pos = Position::ALL[index];
                let digit = Digit::from_value(value);
                if grid[pos].is_none() && !grid.is_conflicting(pos, digit) {
                    grid.set(pos, Some(digit));
                }
            }
            prop_assert!(grid.is_consistent());

            let pos = Position::ALL[cell];
            let digit = Digit::from_value(value);
            prop_assert_eq!(
                grid.candidates_at(pos).contains(digit),
                !grid.is_conflicting(pos, digit)
            );
        }
    }
}
