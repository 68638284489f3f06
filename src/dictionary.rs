// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, fash};

// Case-insensitive word lookup. Must answer for any text.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline(always)]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

pub struct WordList {
    words: fash::MyHashSet<String>,
}

impl WordList {
    pub fn new<S: AsRef<str>, II: IntoIterator<Item = S>>(words: II) -> Self {
        let mut set = fash::MyHashSet::default();
        for w in words {
            let w = w.as_ref().trim();
            if !w.is_empty() {
                set.insert(w.to_ascii_uppercase());
            }
        }
        Self { words: set }
    }

    // One word per line; blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut num_blank = 0usize;
        let list = Self::new(text.lines().filter(|line| {
            let blank = line.trim().is_empty();
            num_blank += blank as usize;
            !blank
        }));
        if num_blank > 0 {
            log::warn!("skipped {} blank lines in word list", num_blank);
        }
        list
    }

    pub fn from_file(path: &str) -> error::Returns<Self> {
        let text = std::fs::read_to_string(path)?;
        let list = Self::from_text(&text);
        if list.is_empty() {
            return_error!(format!("word list {} is empty", path));
        }
        log::info!("loaded {} words from {}", list.len(), path);
        Ok(list)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        let w = word.trim();
        !w.is_empty() && self.words.contains(&w.to_ascii_uppercase())
    }
}
