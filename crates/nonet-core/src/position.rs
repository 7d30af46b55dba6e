//! Board position types.

/// A cell coordinate on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions are validated at construction, so every `Position`
/// value is in range.
///
/// # Examples
///
/// ```
/// use nonet_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(pos.index(), 22); // row-major: 2 * 9 + 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order: left to right, then top to
    /// bottom. This is the scan order of the solver.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[1], Position::new(1, 0));
    /// assert_eq!(Position::ALL[9], Position::new(0, 1));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i: u8 = 0;
        while i < 81 {
            all[i as usize] = Self { x: i % 9, y: i / 9 };
            i += 1;
        }
        all
    };

    /// The positions of each row: `ROWS[y][i]` is the cell at column `i` of
    /// row `y`.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y: u8 = 0;
        while y < 9 {
            let mut x: u8 = 0;
            while x < 9 {
                rows[y as usize][x as usize] = Self { x, y };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// The positions of each column: `COLUMNS[x][i]` is the cell at row `i`
    /// of column `x`.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x: u8 = 0;
        while x < 9 {
            let mut y: u8 = 0;
            while y < 9 {
                columns[x as usize][y as usize] = Self { x, y };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The positions of each 3x3 box: `BOXES[b][i]` is cell `i` (row-major
    /// within the box) of box `b`.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut box_index: u8 = 0;
        while box_index < 9 {
            let mut cell_index: u8 = 0;
            while cell_index < 9 {
                boxes[box_index as usize][cell_index as usize] =
                    Self::from_box(box_index, cell_index);
                cell_index += 1;
            }
            box_index += 1;
        }
        boxes
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9);
        assert!(y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within the box (0-8, row-major).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is 9 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// assert_eq!(Position::from_box(0, 0), Position::new(0, 0));
    /// assert_eq!(Position::from_box(4, 4), Position::new(4, 4));
    /// assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9);
        assert!(cell_index < 9);
        Self::new(
            box_index % 3 * 3 + cell_index % 3,
            box_index / 3 * 3 + cell_index / 3,
        )
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3x3 box containing this position (0-8, left
    /// to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns true if the two positions share a row, column, or box.
    ///
    /// Note that every position shares all three houses with itself.
    #[must_use]
    pub const fn shares_house(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y || self.box_index() == other.box_index()
    }

    /// Returns the 20 peer positions that share a row, column, or box with
    /// this one. The position itself is not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonet_core::Position;
    ///
    /// let peers = Position::new(0, 0).house_peers();
    /// assert_eq!(peers.len(), 20);
    /// assert!(!peers.contains(&Position::new(0, 0)));
    /// assert!(peers.contains(&Position::new(8, 0))); // same row
    /// assert!(peers.contains(&Position::new(0, 8))); // same column
    /// assert!(peers.contains(&Position::new(2, 2))); // same box
    /// ```
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut count = 0;
        for pos in Self::ALL {
            if pos != self && self.shares_house(pos) {
                peers[count] = pos;
                count += 1;
            }
        }
        debug_assert_eq!(count, 20);
        peers
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.y == 0 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y - 1,
            })
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.y == 8 {
            None
        } else {
            Some(Self {
                x: self.x,
                y: self.y + 1,
            })
        }
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.x == 0 {
            None
        } else {
            Some(Self {
                x: self.x - 1,
                y: self.y,
            })
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.x == 8 {
            None
        } else {
            Some(Self {
                x: self.x + 1,
                y: self.y,
            })
        }
    }
}
