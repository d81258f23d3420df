//! The shared pool of undrawn tiles.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::rack::{Rack, RACK_SIZE};
use crate::game::tile::Tile;

/// Fixed starting distribution: (letter, count). `None` is the blank.
const DISTRIBUTION: &[(Option<char>, usize)] = &[
    (Some('Q'), 1),
    (Some('Z'), 1),
    (Some('J'), 1),
    (Some('X'), 1),
    (Some('K'), 1),
    (Some('F'), 2),
    (Some('H'), 2),
    (Some('V'), 2),
    (Some('W'), 2),
    (Some('Y'), 2),
    (Some('B'), 2),
    (Some('C'), 2),
    (Some('M'), 2),
    (Some('P'), 2),
    (None, 2),
    (Some('G'), 3),
    (Some('D'), 4),
    (Some('U'), 4),
    (Some('S'), 4),
    (Some('L'), 4),
    (Some('T'), 6),
    (Some('R'), 6),
    (Some('N'), 6),
    (Some('O'), 8),
    (Some('I'), 9),
    (Some('A'), 9),
    (Some('E'), 12),
];

/// How many rack tiles a single exchange may swap.
pub const EXCHANGE_COUNT: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// A freshly filled, shuffled bag.
    pub fn full<R: Rng>(rng: &mut R) -> Self {
        let mut tiles = Vec::new();
        for &(letter, count) in DISTRIBUTION {
            let tile = match letter {
                Some(ch) => Tile::Letter(ch),
                None => Tile::Blank,
            };
            tiles.extend(std::iter::repeat_n(tile, count));
        }
        tiles.shuffle(rng);
        Bag { tiles }
    }

    pub fn empty() -> Self {
        Bag { tiles: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Fill `rack` up to 7 tiles, as long as the bag lasts.
    pub fn replenish(&mut self, rack: &mut Rack) {
        while rack.len() < RACK_SIZE {
            match self.draw() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }

    /// Exchange up to [`EXCHANGE_COUNT`] random rack tiles: return them to
    /// the bag, reshuffle, then refill the rack.
    pub fn exchange<R: Rng>(&mut self, rack: &mut Rack, rng: &mut R) {
        let num = rack.len().min(EXCHANGE_COUNT);
        let indices = rand::seq::index::sample(rng, rack.len(), num).into_vec();
        let returned = rack.take_at(indices);
        self.tiles.extend(returned);
        self.tiles.shuffle(rng);
        self.replenish(rack);
    }

    /// Remove one specific tile (used when simulating sampled replenishments).
    /// Returns false if the tile is not in the bag.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.tiles.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_bag_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let bag = Bag::full(&mut rng);
        let expected: usize = DISTRIBUTION.iter().map(|&(_, n)| n).sum();
        assert_eq!(bag.len(), expected);
        assert_eq!(bag.tiles().iter().filter(|&&t| t == Tile::Blank).count(), 2);
        assert_eq!(
            bag.tiles()
                .iter()
                .filter(|&&t| t == Tile::Letter('E'))
                .count(),
            12
        );
    }

    #[test]
    fn test_replenish_to_rack_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = Bag::full(&mut rng);
        let mut rack = Rack::default();
        bag.replenish(&mut rack);
        assert_eq!(rack.len(), RACK_SIZE);

        // Short bag: hand out whatever is left.
        let mut short = Bag {
            tiles: vec![Tile::Letter('A'), Tile::Letter('B')],
        };
        let mut rack = Rack::default();
        short.replenish(&mut rack);
        assert_eq!(rack.len(), 2);
        assert!(short.is_empty());
    }

    #[test]
    fn test_exchange_conserves_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = Bag::full(&mut rng);
        let mut rack = Rack::default();
        bag.replenish(&mut rack);

        let total = bag.len() + rack.len();
        bag.exchange(&mut rack, &mut rng);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.len() + rack.len(), total);
    }

    #[test]
    fn test_remove_specific_tile() {
        let mut bag = Bag {
            tiles: vec![Tile::Letter('A'), Tile::Blank],
        };
        assert!(bag.remove(Tile::Blank));
        assert!(!bag.remove(Tile::Blank));
        assert_eq!(bag.len(), 1);
    }
}
