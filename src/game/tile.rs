//! Letter tokens and the fixed per-letter point table.

use serde::{Deserialize, Serialize};

/// A rack/bag token: a natural letter `A..=Z`, or a blank that is assigned a
/// letter meaning only when placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Letter(char),
    Blank,
}

impl Tile {
    /// Intrinsic point value; blanks are worth nothing.
    pub fn points(self) -> i32 {
        match self {
            Tile::Letter(ch) => letter_points(ch),
            Tile::Blank => 0,
        }
    }
}

/// A letter as it sits on the board or inside a play: the face it shows plus
/// whether it was a blank. A blank scores 0 regardless of face and must be
/// recognized as a blank when removed from a rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub letter: char,
    pub blank: bool,
}

impl PlacedTile {
    pub fn natural(letter: char) -> Self {
        PlacedTile { letter, blank: false }
    }

    pub fn from_blank(letter: char) -> Self {
        PlacedTile { letter, blank: true }
    }

    pub fn points(self) -> i32 {
        if self.blank {
            0
        } else {
            letter_points(self.letter)
        }
    }

    /// The rack token this placement consumed.
    pub fn as_rack_tile(self) -> Tile {
        if self.blank {
            Tile::Blank
        } else {
            Tile::Letter(self.letter)
        }
    }
}

/// Standard Scrabble letter values.
pub fn letter_points(letter: char) -> i32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}
