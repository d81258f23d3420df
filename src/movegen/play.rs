//! A candidate or committed move.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::board::{Dir, DIM};
use crate::game::rack::Rack;
use crate::game::tile::PlacedTile;

/// One move: where the primary word starts, which way it runs, the full
/// contiguous word (letters already on the board included, so scoring can
/// walk it; the newly placed tiles are exactly the ones landing on empty
/// squares), and the rack left after removing the placed tiles.
///
/// The empty play (no letters) stands for "pass or exchange".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub start: usize,
    pub dir: Dir,
    pub word: Vec<PlacedTile>,
    pub rack: Rack,
}

impl Play {
    /// The distinguished empty play.
    pub fn pass(rack: Rack) -> Self {
        Play {
            start: 0,
            dir: Dir::Across,
            word: Vec::new(),
            rack,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.word.is_empty()
    }

    /// The primary word as an uppercase string (blank faces included).
    pub fn word_string(&self) -> String {
        self.word.iter().map(|t| t.letter).collect()
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            return write!(f, "Play(pass)");
        }
        let row = self.start / DIM;
        let col = self.start % DIM;
        let word: String = self
            .word
            .iter()
            .map(|t| {
                if t.blank {
                    t.letter.to_ascii_lowercase()
                } else {
                    t.letter
                }
            })
            .collect();
        write!(f, "Play(start=({row}, {col}), dir={:?}, word={word})", self.dir)
    }
}
