// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, matrix, square::Square, tile::Tile};

// A tile a move newly puts on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub square: Square,
    pub tile: Tile,
}

// Cells are index-addressed (dim.at_row_col). Occupancy is one-way.
#[derive(Clone, Debug)]
pub struct Grid {
    layout: board_layout::BoardLayout,
    tiles: Box<[Option<Tile>]>,
}

impl Grid {
    pub fn new(layout: board_layout::BoardLayout) -> Self {
        let num_cells = layout.dim().num_cells();
        Self {
            layout,
            tiles: vec![None; num_cells].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> &board_layout::BoardLayout {
        &self.layout
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.layout.dim()
    }

    #[inline(always)]
    pub fn start(&self) -> Square {
        self.layout.start()
    }

    #[inline(always)]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        self.dim().contains(row, col)
    }

    #[inline(always)]
    pub fn premium_at(&self, square: Square) -> board_layout::Premium {
        self.layout.premium_at(square.row, square.col)
    }

    #[inline(always)]
    pub fn tile_at_idx(&self, idx: usize) -> Option<&Tile> {
        self.tiles[idx].as_ref()
    }

    #[inline(always)]
    pub fn tile_at(&self, square: Square) -> Option<&Tile> {
        self.tile_at_idx(self.dim().at_row_col(square.row, square.col))
    }

    #[inline(always)]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.tile_at(square).is_none()
    }

    pub fn is_board_empty(&self) -> bool {
        self.tiles.iter().all(|t| t.is_none())
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Puts a tile on an empty in-bounds square. A filled square is never
    /// overwritten.
    pub fn place_tile(&mut self, square: Square, tile: Tile) -> error::Returns<()> {
        if !self.in_bounds(square.row, square.col) {
            return_error!(format!("square {} is off the board", square));
        }
        if tile.letter().is_none() {
            return_error!(format!("unbound wildcard cannot be placed at {}", square));
        }
        let idx = self.dim().at_row_col(square.row, square.col);
        if let Some(existing) = &self.tiles[idx] {
            return_error!(format!(
                "square {} already holds {}",
                square,
                existing.display_char()
            ));
        }
        self.tiles[idx] = Some(tile);
        Ok(())
    }
}

// The grid as it reads with a move's placements laid over it, without
// touching the grid itself.
#[derive(Clone, Copy)]
pub struct Overlay<'a> {
    pub grid: &'a Grid,
    pub placements: &'a [Placement],
}

impl<'a> Overlay<'a> {
    #[inline(always)]
    pub fn new(grid: &'a Grid, placements: &'a [Placement]) -> Self {
        Self { grid, placements }
    }

    #[inline(always)]
    pub fn placed_at(&self, idx: usize) -> Option<&'a Placement> {
        let dim = self.grid.dim();
        self.placements
            .iter()
            .find(|p| dim.at_row_col(p.square.row, p.square.col) == idx)
    }

    // Placements take precedence, so this reads the same before and after the
    // placements are applied.
    #[inline(always)]
    pub fn tile_at_idx(&self, idx: usize) -> Option<&'a Tile> {
        match self.placed_at(idx) {
            Some(p) => Some(&p.tile),
            None => self.grid.tile_at_idx(idx),
        }
    }

    #[inline(always)]
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.tile_at_idx(idx).is_some()
    }
}
