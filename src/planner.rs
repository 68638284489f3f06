// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    error::IllegalMove,
    grid::{Grid, Placement},
    matrix::Direction,
    rack::Rack,
    square::Square,
    tile::Tile,
};

#[derive(Debug)]
pub struct Planned {
    // every square the word text covers, pre-existing tiles included
    pub path: Vec<Square>,
    // only the squares that were empty, with the rack tile going there
    pub placements: Vec<Placement>,
}

/// Walks `word.len()` squares from `start`, matching occupied squares against
/// the requested letter and drawing tiles from `rack` for empty ones.
/// `rack` is consumed from, so callers pass a disposable copy.
pub fn plan(
    grid: &Grid,
    rack: &mut Rack,
    word: &str,
    start: Square,
    direction: Direction,
) -> Result<Planned, IllegalMove> {
    let dim = grid.dim();
    let mut path = Vec::with_capacity(word.len());
    let mut placements = Vec::new();
    let mut square = Some(start).filter(|sq| dim.contains(sq.row, sq.col));
    for (i, ch) in word.bytes().enumerate() {
        if i > 0 {
            square = square.and_then(|sq| sq.step(&dim, direction));
        }
        let sq = square.ok_or(IllegalMove::DoesNotFit)?;
        if !ch.is_ascii_alphabetic() {
            return Err(IllegalMove::InvalidCharacter(ch as char));
        }
        path.push(sq);
        let wanted = ch.to_ascii_uppercase();
        match grid.tile_at(sq) {
            Some(existing) => {
                let existing = existing.letter().unwrap_or(b'_');
                if existing != wanted {
                    return Err(IllegalMove::ConflictsWithExistingTile {
                        square: sq.to_string(),
                        existing: existing as char,
                        wanted: wanted as char,
                    });
                }
            }
            None => placements.push(Placement {
                square: sq,
                tile: take_tile_for(rack, ch)?,
            }),
        }
    }
    Ok(Planned { path, placements })
}

fn take_tile_for(rack: &mut Rack, ch: u8) -> Result<Tile, IllegalMove> {
    if ch.is_ascii_uppercase() {
        rack.take_letter(ch)
            .ok_or(IllegalMove::MissingTile(ch as char))
    } else {
        let mut wildcard = rack
            .take_wildcard()
            .ok_or(IllegalMove::MissingWildcard(ch as char))?;
        // a wildcard that is already bound to something else cannot serve here
        wildcard
            .bind(ch)
            .map_err(|_| IllegalMove::MissingWildcard(ch as char))?;
        Ok(wildcard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_layout::BoardLayout, matrix::Dim};

    fn grid(rows: i8, cols: i8) -> Grid {
        Grid::new(BoardLayout::plain(Dim { rows, cols }, Square::new(0, 0)).unwrap())
    }

    fn t(letter: u8, value: i8) -> Tile {
        Tile::normal(letter, value).unwrap()
    }

    #[test]
    fn empty_path_consumes_rack() {
        let g = grid(28, 7);
        let mut rack = Rack(vec![t(b'H', 4), t(b'I', 1), t(b'X', 8)]);
        let planned = plan(&g, &mut rack, "HI", Square::new(0, 0), Direction::Down).unwrap();
        assert_eq!(planned.path, vec![Square::new(0, 0), Square::new(1, 0)]);
        assert_eq!(planned.placements.len(), 2);
        assert_eq!(planned.placements[1].square, Square::new(1, 0));
        assert_eq!(planned.placements[1].tile, t(b'I', 1));
        assert_eq!(rack, Rack(vec![t(b'X', 8)]));
    }

    #[test]
    fn existing_tiles_are_matched_not_placed() {
        let mut g = grid(28, 7);
        g.place_tile(Square::new(1, 0), t(b'N', 1)).unwrap();
        g.place_tile(Square::new(2, 0), t(b'O', 1)).unwrap();
        let mut rack = Rack(vec![t(b'S', 1), t(b'W', 4)]);
        let planned = plan(&g, &mut rack, "SNOW", Square::new(0, 0), Direction::Down).unwrap();
        assert_eq!(planned.path.len(), 4);
        let squares = planned.placements.iter().map(|p| p.square).collect::<Vec<_>>();
        assert_eq!(squares, vec![Square::new(0, 0), Square::new(3, 0)]);
        assert!(rack.is_empty());
    }

    #[test]
    fn lowercase_matches_existing_letter_too() {
        let mut g = grid(28, 7);
        g.place_tile(Square::new(0, 1), t(b'N', 1)).unwrap();
        let mut rack = Rack(vec![t(b'O', 1)]);
        let planned = plan(&g, &mut rack, "nO", Square::new(0, 1), Direction::Down).unwrap();
        assert_eq!(planned.placements.len(), 1);
    }

    #[test]
    fn conflicting_tile_fails() {
        let mut g = grid(28, 7);
        g.place_tile(Square::new(0, 1), t(b'A', 1)).unwrap();
        let mut rack = Rack(vec![t(b'H', 4), t(b'I', 1)]);
        let err = plan(&g, &mut rack, "HI", Square::new(0, 0), Direction::Across).unwrap_err();
        assert!(matches!(err, IllegalMove::ConflictsWithExistingTile { .. }));
    }

    #[test]
    fn running_off_the_grid_fails() {
        let g = grid(10, 2);
        for (start, direction) in [
            (Square::new(0, 1), Direction::Across),
            (Square::new(9, 0), Direction::Down),
            (Square::new(10, 0), Direction::Down),
        ] {
            let mut rack = Rack(vec![t(b'H', 4), t(b'I', 1)]);
            let err = plan(&g, &mut rack, "HI", start, direction).unwrap_err();
            assert_eq!(err, IllegalMove::DoesNotFit);
        }
    }

    #[test]
    fn missing_tiles_fail() {
        let g = grid(28, 7);
        let mut rack = Rack(vec![t(b'H', 4)]);
        let err = plan(&g, &mut rack, "HI", Square::new(0, 0), Direction::Down).unwrap_err();
        assert_eq!(err, IllegalMove::MissingTile('I'));
        let mut rack = Rack(vec![t(b'H', 4), t(b'I', 1)]);
        let err = plan(&g, &mut rack, "Hi", Square::new(0, 0), Direction::Down).unwrap_err();
        assert_eq!(err, IllegalMove::MissingWildcard('i'));
    }

    #[test]
    fn lowercase_binds_a_wildcard() {
        let g = grid(28, 7);
        let mut rack = Rack(vec![t(b'S', 1), Tile::wildcard(), t(b'O', 1), t(b'W', 4)]);
        let planned = plan(&g, &mut rack, "SnOW", Square::new(0, 0), Direction::Across).unwrap();
        assert_eq!(planned.placements.len(), 4);
        let wild = planned.placements[1].tile;
        assert!(wild.is_wildcard());
        assert_eq!(wild.display_char(), 'n');
        assert_eq!(wild.letter(), Some(b'N'));
    }
}
