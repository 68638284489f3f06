// Copyright (C) 2020-2026 Andy Kurnia.

use super::{rack, tile};

// One entry per tile kind. Index 0 is the wildcard, 1..=26 are A..Z.
pub struct AlphabetTile {
    label: u8,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [AlphabetTile],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a AlphabetTile {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> u8 {
        self.get(idx).label
    }

    // Index of a letter, case-insensitive. Wildcard is not a letter.
    pub fn index_of(&self, letter: u8) -> Option<u8> {
        let letter = letter.to_ascii_uppercase();
        (1..self.len()).find(|&idx| self.get(idx).label == letter)
    }

    pub fn score(&self, letter: u8) -> Option<i8> {
        self.index_of(letter).map(|idx| self.get(idx).score)
    }

    pub fn make_tile(&self, idx: u8) -> tile::Tile {
        if idx == 0 {
            tile::Tile::wildcard()
        } else {
            let t = self.get(idx);
            tile::Tile::Normal {
                letter: t.label,
                value: t.score,
            }
        }
    }

    pub fn tile_for_letter(&self, letter: u8) -> Option<tile::Tile> {
        self.index_of(letter).map(|idx| self.make_tile(idx))
    }

    // Index into this alphabet for a rack tile; wildcards map to 0.
    pub fn index_of_tile(&self, t: &tile::Tile) -> Option<u8> {
        match t {
            tile::Tile::Wildcard { .. } => Some(0),
            tile::Tile::Normal { letter, .. } => self.index_of(*letter),
        }
    }

    pub fn fmt_rack(&self, rack: &rack::Rack) -> String {
        rack.tiles()
            .iter()
            .map(|t| match t {
                tile::Tile::Wildcard { .. } => format!("[_{}]", t.value()),
                tile::Tile::Normal { letter, .. } => (*letter as char).to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

macro_rules! t {
    ($label:expr, $freq:expr, $score:expr) => {
        AlphabetTile {
            label: $label,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        t!(b'_', 2, tile::WILDCARD_VALUE),
        t!(b'A', 9, 1),
        t!(b'B', 2, 3),
        t!(b'C', 2, 3),
        t!(b'D', 4, 2),
        t!(b'E', 12, 1),
        t!(b'F', 2, 4),
        t!(b'G', 3, 2),
        t!(b'H', 2, 4),
        t!(b'I', 9, 1),
        t!(b'J', 1, 8),
        t!(b'K', 1, 5),
        t!(b'L', 4, 1),
        t!(b'M', 2, 3),
        t!(b'N', 6, 1),
        t!(b'O', 8, 1),
        t!(b'P', 2, 3),
        t!(b'Q', 1, 10),
        t!(b'R', 6, 1),
        t!(b'S', 4, 1),
        t!(b'T', 6, 1),
        t!(b'U', 4, 1),
        t!(b'V', 2, 4),
        t!(b'W', 2, 4),
        t!(b'X', 1, 8),
        t!(b'Y', 2, 4),
        t!(b'Z', 1, 10),
    ],
});

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    match &ENGLISH_ALPHABET {
        Alphabet::Static(x) => Alphabet::Static(StaticAlphabet { tiles: x.tiles }),
    }
}
