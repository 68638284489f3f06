// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

pub const WILDCARD_VALUE: i8 = 8;

// Letters are stored as uppercase ASCII. A wildcard has no letter until bound,
// and once bound it stays bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Tile {
    #[serde(rename = "normal")]
    Normal { letter: u8, value: i8 },
    #[serde(rename = "wildcard")]
    Wildcard { bound: Option<u8> },
}

impl Tile {
    pub fn normal(letter: u8, value: i8) -> error::Returns<Tile> {
        if !letter.is_ascii_alphabetic() {
            return_error!(format!("tile letter must be A-Z, got {:?}", letter as char));
        }
        Ok(Tile::Normal {
            letter: letter.to_ascii_uppercase(),
            value,
        })
    }

    #[inline(always)]
    pub fn wildcard() -> Tile {
        Tile::Wildcard { bound: None }
    }

    #[inline(always)]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Tile::Wildcard { .. })
    }

    #[inline(always)]
    pub fn value(&self) -> i8 {
        match self {
            Tile::Normal { value, .. } => *value,
            Tile::Wildcard { .. } => WILDCARD_VALUE,
        }
    }

    // Uppercase letter this tile reads as on the board, if any.
    #[inline(always)]
    pub fn letter(&self) -> Option<u8> {
        match self {
            Tile::Normal { letter, .. } => Some(*letter),
            Tile::Wildcard { bound } => *bound,
        }
    }

    /// Binds a wildcard to `letter`. Binding again to the same letter is a
    /// no-op; binding to a different letter, or binding a normal tile, fails.
    pub fn bind(&mut self, letter: u8) -> error::Returns<()> {
        if !letter.is_ascii_alphabetic() {
            return_error!(format!("wildcard letter must be a-z, got {:?}", letter as char));
        }
        let letter = letter.to_ascii_uppercase();
        match self {
            Tile::Normal { letter: l, .. } => {
                return_error!(format!("not a wildcard tile: {}", *l as char));
            }
            Tile::Wildcard { bound } => match *bound {
                None => *bound = Some(letter),
                Some(b) if b == letter => {}
                Some(b) => {
                    return_error!(format!(
                        "wildcard already chosen: {}",
                        b.to_ascii_lowercase() as char
                    ));
                }
            },
        }
        Ok(())
    }

    // Normal tiles show uppercase, bound wildcards lowercase, unbound '_'.
    pub fn display_char(&self) -> char {
        match self {
            Tile::Normal { letter, .. } => *letter as char,
            Tile::Wildcard { bound: Some(b) } => b.to_ascii_lowercase() as char,
            Tile::Wildcard { bound: None } => '_',
        }
    }
}
