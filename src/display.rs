// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, grid, square::Square};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> char {
    if Square::new(row, col) == board_layout.start() {
        return '*';
    }
    match board_layout.premium_at(row, col) {
        board_layout::Premium::Normal => '.',
        board_layout::Premium::Letter(_) => 'L',
        board_layout::Premium::Word(_) => 'W',
    }
}

#[inline(always)]
pub fn board_label(grid: &grid::Grid, row: i8, col: i8) -> char {
    grid.tile_at(Square::new(row, col))
        .map(|t| t.display_char())
        .unwrap_or_else(|| empty_label(grid.layout(), row, col))
}

fn write_column_labels(s: &mut String, cols: i8) {
    s.push_str("   ");
    for c in 0..cols {
        s.push(' ');
        s.push(((c as u8) + b'a') as char);
    }
    s.push('\n');
}

fn write_border(s: &mut String, cols: i8) {
    s.push_str("   +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn fmt_board(grid: &grid::Grid) -> String {
    let dim = grid.dim();
    let mut s = String::new();
    write_column_labels(&mut s, dim.cols);
    write_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2} |", r as i16 + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(grid, r, c));
        }
        let _ = writeln!(s, "| {}", r as i16 + 1);
    }
    write_border(&mut s, dim.cols);
    write_column_labels(&mut s, dim.cols);
    s
}

pub fn print_board(grid: &grid::Grid) {
    print!("{}", fmt_board(grid));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_layout::make_standard_board_layout, tile::Tile};

    #[test]
    fn empty_cells_show_premium_kind() {
        let layout = make_standard_board_layout();
        assert_eq!(empty_label(&layout, 7, 7), '*');
        assert_eq!(empty_label(&layout, 0, 0), 'W');
        assert_eq!(empty_label(&layout, 0, 3), 'L');
        assert_eq!(empty_label(&layout, 0, 1), '.');
    }

    #[test]
    fn tiles_cover_labels() {
        let mut g = grid::Grid::new(make_standard_board_layout());
        g.place_tile(Square::new(7, 7), Tile::normal(b'H', 4).unwrap()).unwrap();
        let mut wild = Tile::wildcard();
        wild.bind(b'i').unwrap();
        g.place_tile(Square::new(7, 8), wild).unwrap();
        assert_eq!(board_label(&g, 7, 7), 'H');
        assert_eq!(board_label(&g, 7, 8), 'i');

        let text = fmt_board(&g);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 15 + 4);
        assert_eq!(lines[0], "    a b c d e f g h i j k l m n o");
        assert_eq!(lines[0], lines[18]);
        assert_eq!(lines[2], " 1 |W . . L . . . W . . . L . . W| 1");
        assert_eq!(lines[9], " 8 |W . . L . . . H i . . L . . W| 8");
    }
}
