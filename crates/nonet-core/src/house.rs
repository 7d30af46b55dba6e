//! Rows, columns, and boxes.

use crate::Position;

/// A house (row, column, or 3x3 box).
///
/// The uniqueness constraint ranges over houses: a digit may appear at most
/// once in each of the 27 houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y: u8 = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x: u8 = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index: u8 = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i: u8 = 0;
        while i < 9 {
            all[i as usize] = Self::Row { y: i };
            all[i as usize + 9] = Self::Column { x: i };
            all[i as usize + 18] = Self::Box { index: i };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8, or if the house's own index is
    /// out of range.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this house, in cell-index
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the house's own index is out of range.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        match self {
            Self::Row { y } => Position::ROWS[y as usize],
            Self::Column { x } => Position::COLUMNS[x as usize],
            Self::Box { index } => Position::BOXES[index as usize],
        }
    }
}
