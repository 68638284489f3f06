// Copyright (C) 2020-2026 Andy Kurnia.

use super::square::Square;

// A lane is one full row (across) or one full column (down) of the grid.
// idx runs along the lane, at() maps it back to the cell index.
#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn base(&self) -> i16 {
        self.base
    }

    #[inline(always)]
    pub fn step(&self) -> i8 {
        self.step
    }

    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

/// Only two orientations exist. `Down` walks along a column (row increases),
/// `Across` walks along a row (column increases).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "down")]
    Down,
    #[serde(rename = "across")]
    Across,
}

impl Direction {
    #[inline(always)]
    pub fn is_down(self) -> bool {
        self == Direction::Down
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Down => Direction::Across,
            Direction::Across => Direction::Down,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Across => write!(f, "across"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    // The lane through square in the given direction, and the square's idx on it.
    #[inline(always)]
    pub fn lane_through(&self, square: Square, direction: Direction) -> (Strider, i8) {
        match direction {
            Direction::Down => (self.down(square.col), square.row),
            Direction::Across => (self.across(square.row), square.col),
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn square_at(&self, idx: usize) -> Square {
        let cols = self.cols as usize;
        Square::new((idx / cols) as i8, (idx % cols) as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striders_cover_rows_and_columns() {
        let dim = Dim { rows: 28, cols: 7 };
        let row = dim.across(2);
        assert_eq!(row.len(), 7);
        assert_eq!(row.at(0), 14);
        assert_eq!(row.at(6), 20);
        let col = dim.down(3);
        assert_eq!(col.len(), 28);
        assert_eq!(col.at(0), 3);
        assert_eq!(col.at(2), 17);
    }

    #[test]
    fn lane_through_picks_orientation() {
        let dim = Dim { rows: 10, cols: 8 };
        let sq = Square::new(4, 5);
        let (strider, idx) = dim.lane_through(sq, Direction::Down);
        assert_eq!(idx, 4);
        assert_eq!(strider.at(idx), dim.at_row_col(4, 5));
        let (strider, idx) = dim.lane_through(sq, Direction::Across);
        assert_eq!(idx, 5);
        assert_eq!(strider.at(idx), dim.at_row_col(4, 5));
        assert_eq!(dim.square_at(dim.at_row_col(4, 5)), sq);
    }

    #[test]
    fn contains_checks_both_axes() {
        let dim = Dim { rows: 10, cols: 2 };
        assert!(dim.contains(9, 1));
        assert!(!dim.contains(10, 0));
        assert!(!dim.contains(0, 2));
        assert!(!dim.contains(-1, 0));
    }

    #[test]
    fn perpendicular_flips() {
        assert_eq!(Direction::Down.perpendicular(), Direction::Across);
        assert_eq!(Direction::Across.perpendicular(), Direction::Down);
    }
}
