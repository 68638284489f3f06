// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix, square::Square};

// Factors are fixed when the board is built and may be zero or negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Premium {
    Normal,
    Letter(i8),
    Word(i8),
}

impl Premium {
    #[inline(always)]
    pub fn letter_multiplier(self) -> i8 {
        match self {
            Premium::Letter(f) => f,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i8 {
        match self {
            Premium::Word(f) => f,
            _ => 1,
        }
    }
}

pub const MIN_FACTOR: i8 = -9;
pub const MAX_FACTOR: i8 = 99;

// Limits enforced on board files only.
pub const MIN_FILE_COLS: i32 = 7;
pub const MAX_FILE_COLS: i32 = 26;
pub const MIN_FILE_ROWS: i32 = 10;
pub const MAX_FILE_ROWS: i32 = 99;
pub const MIN_FILE_CELLS: i32 = 192;

#[derive(Clone, Debug)]
pub struct BoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    start: Square,
}

impl BoardLayout {
    pub fn new(dim: matrix::Dim, start: Square, premiums: Box<[Premium]>) -> error::Returns<Self> {
        if dim.rows <= 0 || dim.cols <= 0 || dim.cols > 26 {
            return_error!(format!("bad board size {}x{}", dim.cols, dim.rows));
        }
        if premiums.len() != dim.num_cells() {
            return_error!(format!(
                "board: need {} cells, found {}",
                dim.num_cells(),
                premiums.len()
            ));
        }
        if !dim.contains(start.row, start.col) {
            return_error!(format!("start square {} is off the board", start));
        }
        Ok(Self {
            premiums,
            dim,
            start,
        })
    }

    pub fn plain(dim: matrix::Dim, start: Square) -> error::Returns<Self> {
        Self::new(
            dim,
            start,
            vec![Premium::Normal; dim.num_cells()].into_boxed_slice(),
        )
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        &self.premiums
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[self.dim.at_row_col(row, col)]
    }

    /// Reads the board file format: M, N, start square, then N rows of M
    /// tokens (`.`, `[f]`, `<f>`).
    pub fn from_text(text: &str) -> error::Returns<Self> {
        let mut lines = text.lines();
        let cols = parse_int_line(lines.next(), "M")?;
        let rows = parse_int_line(lines.next(), "N")?;
        if !(MIN_FILE_COLS..=MAX_FILE_COLS).contains(&cols) {
            return_error!(format!("M out of range: {}", cols));
        }
        if !(MIN_FILE_ROWS..=MAX_FILE_ROWS).contains(&rows) {
            return_error!(format!("N out of range: {}", rows));
        }
        if cols * rows < MIN_FILE_CELLS {
            return_error!(format!(
                "M*N must be at least {}, found {}",
                MIN_FILE_CELLS,
                cols * rows
            ));
        }
        let dim = matrix::Dim {
            rows: rows as i8,
            cols: cols as i8,
        };
        let start = match lines.next() {
            Some(line) => Square::parse_column_row(line, &dim)
                .map_err(|e| error::new(format!("invalid start square: {}", e)))?,
            None => {
                return_error!("missing start square".into());
            }
        };
        let mut premiums = Vec::with_capacity(dim.num_cells());
        for row in 0..rows {
            let line = match lines.next() {
                Some(line) => line,
                None => {
                    return_error!(format!("missing board row {}", row + 1));
                }
            };
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.len() != cols as usize {
                return_error!(format!(
                    "row {} has {} tokens, expected {}",
                    row + 1,
                    tokens.len(),
                    cols
                ));
            }
            for token in tokens {
                premiums.push(parse_cell(token)?);
            }
        }
        Self::new(dim, start, premiums.into_boxed_slice())
    }

    pub fn from_file(path: &str) -> error::Returns<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text).map_err(|e| error::new(format!("{}: {}", path, e)).into())
    }
}

fn parse_int_line(line: Option<&str>, name: &str) -> error::Returns<i32> {
    match line {
        Some(s) => match s.trim().parse::<i32>() {
            Ok(n) => Ok(n),
            Err(_) => {
                return_error!(format!("invalid {}: {:?}", name, s));
            }
        },
        None => {
            return_error!(format!("missing {}", name));
        }
    }
}

fn parse_factor(digits: &str, token: &str) -> error::Returns<i8> {
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || unsigned.len() > 2 || !unsigned.bytes().all(|b| b.is_ascii_digit())
    {
        return_error!(format!("invalid token: {:?}", token));
    }
    let factor = digits
        .parse::<i8>()
        .map_err(|_| error::new(format!("invalid token: {:?}", token)))?;
    if !(MIN_FACTOR..=MAX_FACTOR).contains(&factor) {
        return_error!(format!("factor out of range: {}", factor));
    }
    Ok(factor)
}

fn parse_cell(token: &str) -> error::Returns<Premium> {
    if token == "." {
        Ok(Premium::Normal)
    } else if let Some(inner) = token.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        Ok(Premium::Letter(parse_factor(inner, token)?))
    } else if let Some(inner) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        Ok(Premium::Word(parse_factor(inner, token)?))
    } else {
        return_error!(format!("invalid token: {:?}", token));
    }
}

const TWS: Premium = Premium::Word(3);
const DWS: Premium = Premium::Word(2);
const TLS: Premium = Premium::Letter(3);
const DLS: Premium = Premium::Letter(2);
const FVS: Premium = Premium::Normal;

static STANDARD_PREMIUMS: [Premium; 225] = [
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout {
        premiums: STANDARD_PREMIUMS[..].into(),
        dim: matrix::Dim { rows: 15, cols: 15 },
        start: Square::new(7, 7),
    }
}

pub fn make_plain_board_layout() -> BoardLayout {
    BoardLayout {
        premiums: vec![Premium::Normal; 225].into_boxed_slice(),
        dim: matrix::Dim { rows: 15, cols: 15 },
        start: Square::new(7, 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize, m: usize, token: &str) -> String {
        let mut s = String::new();
        for _ in 0..n {
            s.push_str(&vec![token; m].join(" "));
            s.push('\n');
        }
        s
    }

    #[test]
    fn loads_valid_board() {
        let text = format!("7\n28\na1\n{}", rows(28, 7, "."));
        let layout = BoardLayout::from_text(&text).unwrap();
        assert_eq!(layout.dim(), matrix::Dim { rows: 28, cols: 7 });
        assert_eq!(layout.start(), Square::new(0, 0));
        assert_eq!(layout.premium_at(0, 0), Premium::Normal);
    }

    #[test]
    fn parses_premium_tokens() {
        let text = format!("7\n28\nd7\n[2] <3> [-9] <99> <0> [-1] .\n{}", rows(27, 7, "."));
        let layout = BoardLayout::from_text(&text).unwrap();
        assert_eq!(layout.start(), Square::new(6, 3));
        assert_eq!(layout.premium_at(0, 0), Premium::Letter(2));
        assert_eq!(layout.premium_at(0, 1), Premium::Word(3));
        assert_eq!(layout.premium_at(0, 2), Premium::Letter(-9));
        assert_eq!(layout.premium_at(0, 3), Premium::Word(99));
        assert_eq!(layout.premium_at(0, 4), Premium::Word(0));
        assert_eq!(layout.premium_at(0, 5), Premium::Letter(-1));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(BoardLayout::from_text(&format!("6\n28\na1\n{}", rows(28, 6, "."))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n9\na1\n{}", rows(9, 7, "."))).is_err());
        // 7*27 = 189 < 192
        assert!(BoardLayout::from_text(&format!("7\n27\na1\n{}", rows(27, 7, "."))).is_err());
        assert!(BoardLayout::from_text("x\n28\na1\n").is_err());
    }

    #[test]
    fn rejects_bad_rows_and_tokens() {
        assert!(BoardLayout::from_text(&format!("7\n28\na1\n{}", rows(27, 7, "."))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n28\na1\n{}", rows(28, 8, "."))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n28\na1\n{}", rows(28, 7, "[100]"))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n28\na1\n{}", rows(28, 7, "<-10>"))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n28\na1\n{}", rows(28, 7, "x"))).is_err());
        assert!(BoardLayout::from_text(&format!("7\n28\nh1\n{}", rows(28, 7, "."))).is_err());
    }

    #[test]
    fn standard_layout_is_symmetric() {
        let layout = make_standard_board_layout();
        let dim = layout.dim();
        for r in 0..dim.rows {
            for c in 0..dim.cols {
                assert_eq!(layout.premium_at(r, c), layout.premium_at(c, r));
                assert_eq!(layout.premium_at(r, c), layout.premium_at(14 - r, 14 - c));
            }
        }
        assert_eq!(layout.premium_at(0, 0), Premium::Word(3));
        assert_eq!(layout.premium_at(0, 3), Premium::Letter(2));
        assert_eq!(layout.start(), Square::new(7, 7));
    }

    #[test]
    fn new_checks_shape() {
        let dim = matrix::Dim { rows: 10, cols: 2 };
        assert!(BoardLayout::plain(dim, Square::new(0, 0)).is_ok());
        assert!(BoardLayout::plain(dim, Square::new(10, 0)).is_err());
        assert!(BoardLayout::new(dim, Square::new(0, 0), vec![Premium::Normal; 3].into()).is_err());
    }
}
