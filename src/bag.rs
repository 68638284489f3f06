// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, rack::Rack, tile::Tile};
use rand::prelude::*;

// Tiles are drawn from the end.
#[derive(Clone, Debug, Default)]
pub struct Bag(pub Vec<Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Bag {
        let mut bag = Vec::with_capacity(
            (0..alphabet.len())
                .map(|idx| alphabet.freq(idx) as usize)
                .sum(),
        );
        for idx in 0..alphabet.len() {
            for _ in 0..alphabet.freq(idx) {
                bag.push(alphabet.make_tile(idx));
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<Tile> {
        self.0.pop()
    }

    // Up to n tiles, fewer if the bag runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let n = n.min(self.0.len());
        let mut drawn = self.0.split_off(self.0.len() - n);
        drawn.reverse();
        drawn
    }

    // Tops the rack up to rack_size, or until the bag is empty.
    pub fn replenish(&mut self, rack: &mut Rack, rack_size: usize) {
        let wanted = rack_size.saturating_sub(rack.len());
        for tile in self.draw(wanted) {
            rack.push(tile);
        }
    }
}
