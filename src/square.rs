// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

// 0-based. Text form is column letter then 1-based row: (7, 5) is "f8".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    // None if stepping leaves the grid.
    #[inline(always)]
    pub fn step(self, dim: &matrix::Dim, direction: matrix::Direction) -> Option<Square> {
        let (row, col) = match direction {
            matrix::Direction::Down => (self.row.checked_add(1)?, self.col),
            matrix::Direction::Across => (self.row, self.col.checked_add(1)?),
        };
        dim.contains(row, col).then_some(Square { row, col })
    }

    /// Parses the column-row form (`d7`), rejecting squares outside `dim`.
    pub fn parse_column_row(s: &str, dim: &matrix::Dim) -> error::Returns<Square> {
        let t = s.trim();
        let mut chars = t.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='z') => (c as u8 - b'a') as i32,
            _ => {
                return_error!(format!("bad square: {:?}", s));
            }
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return_error!(format!("bad square: {:?}", s));
        }
        let row = match digits.parse::<i32>() {
            Ok(n) => n - 1,
            Err(_) => {
                return_error!(format!("bad square: {:?}", s));
            }
        };
        if row < 0 || row >= dim.rows as i32 || col >= dim.cols as i32 {
            return_error!(format!("square out of bounds: {:?}", s));
        }
        Ok(Square::new(row as i8, col as i8))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row as i16 + 1)
    }
}
