// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Every way a proposed move can be rejected. None of these are fatal to the
// game; the caller retries or passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    WordTooShort { len: usize, min_len: usize },
    InvalidCharacter(char),
    DoesNotFit,
    ConflictsWithExistingTile { square: String, existing: char, wanted: char },
    MissingTile(char),
    MissingWildcard(char),
    NoTilesPlaced,
    MustCoverStartSquare(String),
    CreatesAdditionalWord(String),
    NotInDictionary(String),
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::WordTooShort { len, min_len } => {
                write!(f, "word has {len} letters, need at least {min_len}")
            }
            IllegalMove::InvalidCharacter(c) => write!(f, "invalid character {c:?} in word"),
            IllegalMove::DoesNotFit => write!(f, "word does not fit on board"),
            IllegalMove::ConflictsWithExistingTile {
                square,
                existing,
                wanted,
            } => write!(
                f,
                "conflicts with existing tile {existing} at {square} (wanted {wanted})"
            ),
            IllegalMove::MissingTile(c) => write!(f, "missing tile: {c}"),
            IllegalMove::MissingWildcard(c) => write!(f, "missing wildcard for: {c}"),
            IllegalMove::NoTilesPlaced => write!(f, "move must place at least one tile"),
            IllegalMove::MustCoverStartSquare(square) => {
                write!(f, "first move must cover start square {square}")
            }
            IllegalMove::CreatesAdditionalWord(square) => {
                write!(f, "move creates additional word at {square}")
            }
            IllegalMove::NotInDictionary(word) => write!(f, "word not in dictionary: {word}"),
        }
    }
}

impl std::error::Error for IllegalMove {}
