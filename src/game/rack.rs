//! A player's rack: an unordered multiset of up to 7 tiles.

use serde::{Deserialize, Serialize};

use crate::game::tile::{PlacedTile, Tile};

pub const RACK_SIZE: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Rack { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Every distinct letter obtainable from this rack. A resident blank can
    /// stand for any of the 26 letters (marked as a blank placement).
    pub fn candidate_letters(&self) -> Vec<PlacedTile> {
        let mut seen = [false; 26];
        let mut out = Vec::new();
        let mut has_blank = false;
        for &tile in &self.tiles {
            match tile {
                Tile::Letter(ch) => {
                    let idx = (ch as u8 - b'A') as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        out.push(PlacedTile::natural(ch));
                    }
                }
                Tile::Blank => has_blank = true,
            }
        }
        if has_blank {
            for ch in 'A'..='Z' {
                out.push(PlacedTile::from_blank(ch));
            }
        }
        out
    }

    /// Remove the rack token consumed by a placement (the natural letter, or
    /// a blank if the placement was blank-backed). The generator only builds
    /// plays from tokens present in the rack, so a miss is a caller bug.
    pub fn remove_placed(&mut self, placed: PlacedTile) {
        let target = placed.as_rack_tile();
        let pos = self
            .tiles
            .iter()
            .position(|&t| t == target)
            .unwrap_or_else(|| panic!("tile {target:?} not present in rack"));
        self.tiles.swap_remove(pos);
    }

    /// Remove `n` tiles chosen by index order of `indices` (for exchanges).
    pub fn take_at(&mut self, mut indices: Vec<usize>) -> Vec<Tile> {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices.into_iter().map(|i| self.tiles.remove(i)).collect()
    }

    /// Sum of intrinsic point values, used by the end-game adjustment.
    pub fn point_value(&self) -> i32 {
        self.tiles.iter().map(|t| t.points()).sum()
    }

    /// Count of a specific letter (blanks are `Tile::Blank`).
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Rack {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// Convenience for tests and the CLI: build a rack from a string, `_` for a
/// blank.
pub fn rack_from_str(s: &str) -> Rack {
    s.chars()
        .map(|ch| {
            if ch == '_' {
                Tile::Blank
            } else {
                Tile::Letter(ch.to_ascii_uppercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_letters_distinct() {
        let rack = rack_from_str("AABBC");
        let letters = rack.candidate_letters();
        assert_eq!(letters.len(), 3);
        assert!(letters.contains(&PlacedTile::natural('A')));
        assert!(letters.contains(&PlacedTile::natural('B')));
        assert!(letters.contains(&PlacedTile::natural('C')));
    }

    #[test]
    fn test_candidate_letters_with_blank() {
        let rack = rack_from_str("A_");
        let letters = rack.candidate_letters();
        // One natural A plus all 26 blank-backed letters.
        assert_eq!(letters.len(), 27);
        assert!(letters.contains(&PlacedTile::natural('A')));
        assert!(letters.contains(&PlacedTile::from_blank('A')));
        assert!(letters.contains(&PlacedTile::from_blank('Z')));
    }

    #[test]
    fn test_remove_placed_prefers_declared_source() {
        let mut rack = rack_from_str("Q_");
        rack.remove_placed(PlacedTile::from_blank('Q'));
        // The natural Q stays; the blank is spent.
        assert_eq!(rack.count(Tile::Letter('Q')), 1);
        assert_eq!(rack.count(Tile::Blank), 0);
    }

    #[test]
    #[should_panic(expected = "not present in rack")]
    fn test_remove_missing_tile_panics() {
        let mut rack = rack_from_str("AB");
        rack.remove_placed(PlacedTile::natural('Z'));
    }

    #[test]
    fn test_point_value() {
        assert_eq!(rack_from_str("QZ_").point_value(), 20);
        assert_eq!(rack_from_str("").point_value(), 0);
    }
}
