// Copyright (C) 2020-2026 Andy Kurnia.

use super::tile::Tile;

// Unordered multiset of tiles. Clone is a full deep copy (tiles are values),
// which is what trial placement runs against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack(pub Vec<Tile>);

impl Rack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub fn push(&mut self, tile: Tile) {
        self.0.push(tile);
    }

    /// Removes one normal tile with this letter (case-insensitive).
    pub fn take_letter(&mut self, letter: u8) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        let pos = self
            .0
            .iter()
            .position(|t| matches!(t, Tile::Normal { letter: l, .. } if *l == letter))?;
        Some(self.0.remove(pos))
    }

    /// Removes one wildcard, preferring an unbound one.
    pub fn take_wildcard(&mut self) -> Option<Tile> {
        let pos = self
            .0
            .iter()
            .position(|t| matches!(t, Tile::Wildcard { bound: None }))
            .or_else(|| self.0.iter().position(|t| t.is_wildcard()))?;
        Some(self.0.remove(pos))
    }

    // End-game penalty.
    pub fn total_value(&self) -> i64 {
        self.0.iter().map(|t| t.value() as i64).sum()
    }
}
