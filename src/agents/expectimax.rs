//! Expectimax over play choices and sampled rack replenishments.
//!
//! MAX nodes branch on the highest-scoring plays and apply them without
//! refilling the rack; the refill is the chance event. A chance node samples
//! replenishments from the actual bag, deduplicates them, keeps the
//! best-balanced few and averages the values beneath them. Depth counts MAX
//! plies and is spent on the MAX-to-chance edge, so depth 0 collapses to the
//! greedy choice.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::game_state::GameState;
use crate::game::rack::RACK_SIZE;
use crate::game::tile::Tile;
use crate::movegen::play::Play;

use super::config::ExpectimaxConfig;
use super::heuristics::balanced_rack_value;
use super::Agent;

pub struct ExpectimaxAgent {
    config: ExpectimaxConfig,
    rng: StdRng,
}

impl ExpectimaxAgent {
    pub fn new(config: ExpectimaxConfig, seed: u64) -> Self {
        ExpectimaxAgent {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn max_value(&mut self, state: &GameState, depth: usize, agent: usize) -> (Play, f64) {
        let mut plays = state.all_plays();
        if plays.len() == 1 {
            // Only the pass is available; no point in recursing.
            let pass = plays.pop().expect("all_plays always yields the pass");
            return (pass, f64::from(state.players()[agent].score));
        }

        plays.sort_by_key(|p| state.score_play(p));
        let excess = plays.len().saturating_sub(self.config.top_k);
        let mut best: Option<(Play, f64)> = None;
        for play in plays.drain(excess..) {
            let mut next = state.clone();
            next.apply_play_partial(&play);
            let value = if depth == 0 || next.is_terminal() {
                f64::from(next.players()[agent].score)
            } else {
                self.chance_value(&next, depth - 1, agent)
            };
            if best.as_ref().is_none_or(|&(_, v)| value > v) {
                best = Some((play, value));
            }
        }
        best.expect("at least one candidate play was evaluated")
    }

    fn chance_value(&mut self, state: &GameState, depth: usize, agent: usize) -> f64 {
        if depth == 0 {
            return f64::from(state.players()[agent].score);
        }

        let players = state.players().len();
        // The mover whose rack is short: the turn already advanced past them.
        let mover = (state.current_index() + players - 1) % players;
        let samples = self.sample_replenishments(state, mover);

        let mut total = 0.0;
        for tiles in &samples {
            let mut next = state.clone();
            next.give_tiles(mover, tiles);
            total += self.max_value(&next, depth, agent).1;
        }
        total / samples.len() as f64
    }

    /// Candidate replenishments for `mover`: random draws from the bag,
    /// deduplicated up to tile order, ranked by the balance of the resulting
    /// rack. When the bag cannot cover a full refill there is exactly one
    /// possible draw.
    fn sample_replenishments(&mut self, state: &GameState, mover: usize) -> Vec<Vec<Tile>> {
        let rack = &state.players()[mover].rack;
        let need = RACK_SIZE.saturating_sub(rack.len());
        let bag = state.bag().tiles();

        if need == 0 || bag.is_empty() {
            return vec![Vec::new()];
        }
        if bag.len() <= need {
            return vec![bag.to_vec()];
        }

        let mut seen: HashSet<Vec<Tile>> = HashSet::new();
        // At least one draw, so a chance node always has a branch to average.
        for _ in 0..self.config.sample_size.max(1) {
            let mut draw: Vec<Tile> = bag
                .choose_multiple(&mut self.rng, need)
                .copied()
                .collect();
            draw.sort_unstable_by_key(|&t| tile_ord(t));
            seen.insert(draw);
        }

        let mut samples: Vec<Vec<Tile>> = seen.into_iter().collect();
        samples.sort_by(|a, b| {
            replenished_balance(rack.tiles(), a)
                .partial_cmp(&replenished_balance(rack.tiles(), b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let excess = samples.len().saturating_sub(self.config.top_k);
        samples.drain(..excess);
        samples
    }
}

fn tile_ord(tile: Tile) -> u32 {
    match tile {
        Tile::Blank => 0,
        Tile::Letter(ch) => ch as u32,
    }
}

fn replenished_balance(rack: &[Tile], draw: &[Tile]) -> f64 {
    let combined: Vec<Tile> = rack.iter().chain(draw).copied().collect();
    balanced_rack_value(&combined)
}

impl Agent for ExpectimaxAgent {
    fn choose_play(&mut self, state: &GameState) -> Play {
        let agent = state.current_index();
        let depth = self.config.depth;
        self.max_value(state, depth, agent).0
    }

    fn name(&self) -> &str {
        "expectimax"
    }
}
