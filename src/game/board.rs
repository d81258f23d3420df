//! The 15×15 board with its off-board border ring, bonus layout, anchor and
//! crossword computation, and play scoring.
//!
//! Squares live in a single row-major vector of side [`DIM`]; the square
//! directly below square `s` is `s + DOWN`. The outermost ring is entirely
//! [`Square::Off`], so scans in any direction terminate without bounds
//! checks, exactly like the sentinel border of a mailbox chess board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::tile::PlacedTile;
use crate::movegen::play::Play;
use crate::{EngineError, Result};

/// Full grid side, playable area plus the border ring.
pub const DIM: usize = 17;
/// Distance between vertically adjacent squares.
pub const DOWN: usize = DIM;
/// Playable side length.
pub const SIDE: usize = DIM - 2;
/// Bingo bonus for playing all 7 rack tiles in one move.
pub const BINGO_BONUS: i32 = 50;
/// Rough upper bound on a single player's final score, used to normalize
/// single-player search results into [0, 1].
pub const MAX_BOARD_SCORE: i32 = 1320;

/// Axis a play runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dir {
    Across,
    Down,
}

impl Dir {
    /// Index increment for one step in this direction.
    pub fn step(self) -> isize {
        match self {
            Dir::Across => 1,
            Dir::Down => DOWN as isize,
        }
    }

    pub fn other(self) -> Dir {
        match self {
            Dir::Across => Dir::Down,
            Dir::Down => Dir::Across,
        }
    }
}

/// Bonus marker of an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bonus {
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The opening anchor in the middle of the board; doubles the word like
    /// a double-word square.
    Star,
}

/// One board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    /// Border sentinel; never mutated.
    Off,
    Empty(Bonus),
    Occupied(PlacedTile),
}

impl Square {
    pub fn is_letter(self) -> bool {
        matches!(self, Square::Occupied(_))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty(_))
    }
}

/// Standard bonus layout for the playable 15×15 area.
/// `.` plain, `:` double letter, `;` triple letter, `-` double word,
/// `=` triple word, `*` the center star.
const STANDARD_LAYOUT: [&str; SIDE] = [
    "=..:...=...:..=",
    ".-...;...;...-.",
    "..-...:.:...-..",
    ":..-...:...-..:",
    "....-.....-....",
    ".;...;...;...;.",
    "..:...:.:...:..",
    "=..:...*...:..=",
    "..:...:.:...:..",
    ".;...;...;...;.",
    "....-.....-....",
    ":..-...:...-..:",
    "..-...:.:...-..",
    ".-...;...;...-.",
    "=..:...=...:..=",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
    /// The four scan directions (east, south, west, north), derived from the
    /// stride once at construction.
    directions: [isize; 4],
}

impl Board {
    /// The standard Scrabble board.
    pub fn standard() -> Self {
        Self::from_layout(&STANDARD_LAYOUT).expect("standard layout is well-formed")
    }

    /// Build a board from a 15×15 grid of bonus markers. Malformed input is
    /// a fatal configuration error.
    pub fn from_layout(rows: &[&str]) -> Result<Self> {
        if rows.len() != SIDE {
            return Err(EngineError::BoardLayout(format!(
                "expected {SIDE} rows, got {}",
                rows.len()
            )));
        }
        let mut squares = vec![Square::Off; DIM * DIM];
        let mut stars = 0;
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != SIDE {
                return Err(EngineError::BoardLayout(format!(
                    "row {r} has {} columns, expected {SIDE}",
                    row.chars().count()
                )));
            }
            for (c, marker) in row.chars().enumerate() {
                let bonus = match marker {
                    '.' => Bonus::Plain,
                    ':' => Bonus::DoubleLetter,
                    ';' => Bonus::TripleLetter,
                    '-' => Bonus::DoubleWord,
                    '=' => Bonus::TripleWord,
                    '*' => {
                        stars += 1;
                        Bonus::Star
                    }
                    other => {
                        return Err(EngineError::BoardLayout(format!(
                            "unknown bonus marker {other:?} at row {r}, column {c}"
                        )))
                    }
                };
                squares[(r + 1) * DIM + (c + 1)] = Square::Empty(bonus);
            }
        }
        if stars != 1 {
            return Err(EngineError::BoardLayout(format!(
                "expected exactly one star square, found {stars}"
            )));
        }
        Ok(Board {
            squares,
            directions: [1, DOWN as isize, -1, -(DOWN as isize)],
        })
    }

    /// Index of the opening star square.
    pub fn center(&self) -> usize {
        (DIM / 2) * DIM + DIM / 2
    }

    pub fn square(&self, s: usize) -> Square {
        self.squares[s]
    }

    /// True when no tiles have been placed yet.
    pub fn is_empty(&self) -> bool {
        self.tiles_on_board() == 0
    }

    pub fn letter_at(&self, s: usize) -> Option<PlacedTile> {
        match self.squares[s] {
            Square::Occupied(t) => Some(t),
            _ => None,
        }
    }

    /// Step from `s` by a signed offset. Never leaves the vector as long as
    /// callers stop on [`Square::Off`], which borders every scan line.
    fn offset(s: usize, step: isize) -> usize {
        (s as isize + step) as usize
    }

    /// A square where a new word may start or pass through: the opening star,
    /// or an empty square with at least one occupied neighbor.
    pub fn is_anchor(&self, s: usize) -> bool {
        match self.squares[s] {
            Square::Empty(Bonus::Star) => true,
            Square::Empty(_) => self
                .directions
                .iter()
                .any(|&d| self.squares[Self::offset(s, d)].is_letter()),
            _ => false,
        }
    }

    /// All anchors on the current board, recomputed from scratch.
    pub fn all_anchors(&self) -> Vec<usize> {
        (0..self.squares.len())
            .filter(|&s| self.is_anchor(s))
            .collect()
    }

    /// The last square, walking from `s` by `step`, that still holds a letter
    /// on the far side (i.e. keep moving while the *next* square is a letter).
    pub fn scan_letters(&self, mut s: usize, step: isize) -> usize {
        while self.squares[Self::offset(s, step)].is_letter() {
            s = Self::offset(s, step);
        }
        s
    }

    /// The last square, walking from `s` by `step`, before hitting the board
    /// edge or another anchor. Bounds the free space a rack prefix may use.
    pub fn scan_to_anchor(&self, mut s: usize, step: isize) -> usize {
        loop {
            let next = Self::offset(s, step);
            if self.squares[next] == Square::Off || self.is_anchor(next) {
                return s;
            }
            s = next;
        }
    }

    /// The maximal contiguous run of letters through `s` perpendicular to
    /// `dir`, with `'.'` standing in for `s` itself if it is empty.
    pub fn crossword(&self, s: usize, dir: Dir) -> String {
        let step = dir.other().step();
        let start = self.scan_letters(s, -step);
        let end = self.scan_letters(s, step);
        let mut word = String::new();
        let mut cur = start;
        loop {
            word.push(match self.squares[cur] {
                Square::Occupied(t) => t.letter,
                _ => '.',
            });
            if cur == end {
                break;
            }
            cur = Self::offset(cur, step);
        }
        word
    }

    /// (square, letter) pairs for each tile along the play's primary word.
    fn enumerate_play<'a>(play: &'a Play) -> impl Iterator<Item = (usize, PlacedTile)> + 'a {
        let step = play.dir.step();
        play.word
            .iter()
            .enumerate()
            .map(move |(i, &t)| (Self::offset(play.start, step * i as isize), t))
    }

    /// Points for a single word: letter bonuses apply to the letter, word
    /// bonuses stack multiplicatively, and both only on squares not already
    /// covered by a previous move.
    fn word_score(&self, play: &Play) -> i32 {
        let mut total = 0;
        let mut word_bonus = 1;
        for (s, tile) in Self::enumerate_play(play) {
            let (letter_mult, word_mult) = match self.squares[s] {
                Square::Empty(Bonus::DoubleLetter) => (2, 1),
                Square::Empty(Bonus::TripleLetter) => (3, 1),
                Square::Empty(Bonus::DoubleWord) | Square::Empty(Bonus::Star) => (1, 2),
                Square::Empty(Bonus::TripleWord) => (1, 3),
                _ => (1, 1),
            };
            word_bonus *= word_mult;
            total += tile.points() * letter_mult;
        }
        word_bonus * total
    }

    /// How many of the play's tiles land on empty squares (came from the
    /// rack, as opposed to letters already on the board).
    pub fn letters_played(&self, play: &Play) -> usize {
        Self::enumerate_play(play)
            .filter(|&(s, _)| self.squares[s].is_empty())
            .count()
    }

    fn bingo(&self, play: &Play) -> i32 {
        if play.rack.is_empty() && self.letters_played(play) == 7 {
            BINGO_BONUS
        } else {
            0
        }
    }

    /// Every perpendicular word newly formed by a tile this play drops on an
    /// empty square, expressed as a one-word play so it can be scored with
    /// the same machinery.
    fn cross_plays(&self, play: &Play) -> Vec<Play> {
        let cross = play.dir.other();
        let cstep = cross.step();
        let mut out = Vec::new();
        for (s, tile) in Self::enumerate_play(play) {
            if !self.squares[s].is_empty() {
                continue;
            }
            let has_neighbor = self.squares[Self::offset(s, -cstep)].is_letter()
                || self.squares[Self::offset(s, cstep)].is_letter();
            if !has_neighbor {
                continue;
            }
            let start = self.scan_letters(s, -cstep);
            let end = self.scan_letters(s, cstep);
            let mut word = Vec::new();
            let mut cur = start;
            loop {
                word.push(match self.squares[cur] {
                    Square::Occupied(t) => t,
                    _ => tile,
                });
                if cur == end {
                    break;
                }
                cur = Self::offset(cur, cstep);
            }
            out.push(Play {
                start,
                dir: cross,
                word,
                rack: play.rack.clone(),
            });
        }
        out
    }

    /// The number of points scored by making this play on the current board:
    /// the primary word, the bingo bonus if it applies, and every crossing
    /// word the new tiles complete.
    pub fn score(&self, play: &Play) -> i32 {
        self.word_score(play)
            + self.bingo(play)
            + self
                .cross_plays(play)
                .iter()
                .map(|cp| self.word_score(cp))
                .sum::<i32>()
    }

    /// Write the play's letters onto the board. The caller (the move
    /// generator) is responsible for legality; landing on the border is a
    /// generator bug.
    pub fn apply(&mut self, play: &Play) {
        for (s, tile) in Self::enumerate_play(play) {
            match self.squares[s] {
                Square::Empty(_) => self.squares[s] = Square::Occupied(tile),
                Square::Occupied(existing) => {
                    assert_eq!(
                        existing.letter, tile.letter,
                        "play letter disagrees with board at square {s}"
                    );
                }
                Square::Off => panic!("play runs off the board at square {s}"),
            }
        }
    }

    /// Total number of tiles sitting on the board.
    pub fn tiles_on_board(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_letter()).count()
    }

    /// Does any square hold this letter face?
    pub fn contains_letter(&self, letter: char) -> bool {
        self.squares.iter().any(
            |sq| matches!(sq, Square::Occupied(t) if t.letter == letter.to_ascii_uppercase()),
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 1..=SIDE {
            for c in 1..=SIDE {
                let ch = match self.squares[r * DIM + c] {
                    Square::Occupied(t) if t.blank => t.letter.to_ascii_lowercase(),
                    Square::Occupied(t) => t.letter,
                    Square::Empty(Bonus::Plain) => '.',
                    Square::Empty(Bonus::DoubleLetter) => ':',
                    Square::Empty(Bonus::TripleLetter) => ';',
                    Square::Empty(Bonus::DoubleWord) => '-',
                    Square::Empty(Bonus::TripleWord) => '=',
                    Square::Empty(Bonus::Star) => '*',
                    Square::Off => '#',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
