// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    rack_size: i8,
    num_players: u8,
    min_word_len: i8,
    bingo_bonus: i16,
    num_passes_to_end: u8,
    open_game: bool,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    #[inline(always)]
    pub fn min_word_len(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.min_word_len,
        }
    }

    // consecutive passes (by anyone) that end the game
    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_passes_to_end,
        }
    }

    // both racks are shown to both players
    #[inline(always)]
    pub fn open_game(&self) -> bool {
        match self {
            GameConfig::Static(x) => x.open_game,
        }
    }

    // Only a move placing exactly a full rack earns the bonus.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i64 {
        match self {
            GameConfig::Static(x) => {
                if num_played == x.rack_size as usize {
                    x.bingo_bonus as i64
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        rack_size: 7,
        num_players: 2,
        min_word_len: 2,
        bingo_bonus: 60,
        num_passes_to_end: 4,
        open_game: false,
    })
}

pub fn make_open_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        rack_size: 7,
        num_players: 2,
        min_word_len: 2,
        bingo_bonus: 60,
        num_passes_to_end: 4,
        open_game: true,
    })
}
