// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix, square::Square};

// Word case carries meaning: uppercase places or matches a normal tile,
// lowercase places or matches a wildcard bound to that letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Play {
    Pass,
    Place {
        word: String,
        start: Square,
        direction: matrix::Direction,
    },
}

impl Play {
    pub fn place(word: &str, start: Square, direction: matrix::Direction) -> Play {
        Play::Place {
            word: word.to_string(),
            start,
            direction,
        }
    }

    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        matches!(self, Play::Pass)
    }

    /// Parses move text. `,` passes. `WORD,f8` (column first) plays down,
    /// `WORD,10b` (row first) plays across.
    pub fn parse(line: &str, dim: &matrix::Dim) -> error::Returns<Play> {
        let t = line.trim();
        if t == "," {
            return Ok(Play::Pass);
        }
        let (word, pos) = match t.split_once(',') {
            Some((word, pos)) if !pos.contains(',') => (word.trim(), pos.trim()),
            _ => {
                return_error!(format!("illegal move format: {:?}", line));
            }
        };
        if word.is_empty() || pos.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return_error!(format!("illegal move format: {:?}", line));
        }
        let pos = pos.to_ascii_lowercase();
        let bytes = pos.as_bytes();
        let (start, direction) = if bytes[0].is_ascii_alphabetic() {
            (
                Square::parse_column_row(&pos, dim)
                    .map_err(|_| error::new(format!("illegal move format: {:?}", line)))?,
                matrix::Direction::Down,
            )
        } else if bytes[0].is_ascii_digit() && bytes[bytes.len() - 1].is_ascii_alphabetic() {
            let (row_part, col_part) = pos.split_at(pos.len() - 1);
            // reuse the column-row parser by swapping the parts around
            (
                Square::parse_column_row(&format!("{}{}", col_part, row_part), dim)
                    .map_err(|_| error::new(format!("illegal move format: {:?}", line)))?,
                matrix::Direction::Across,
            )
        } else {
            return_error!(format!("illegal move format: {:?}", line));
        };
        Ok(Play::Place {
            word: word.to_string(),
            start,
            direction,
        })
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Play::Pass => write!(f, ","),
            Play::Place {
                word,
                start,
                direction: matrix::Direction::Down,
            } => write!(f, "{},{}", word, start),
            Play::Place {
                word,
                start,
                direction: matrix::Direction::Across,
            } => write!(f, "{},{}{}", word, start.row as i16 + 1, (b'a' + start.col as u8) as char),
        }
    }
}
