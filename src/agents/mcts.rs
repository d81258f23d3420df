//! Monte Carlo Tree Search with UCT selection.
//!
//! The tree is an index arena: nodes hold indices of their parent and
//! children, never references, so the whole search is a single `Vec` with no
//! lifetime plumbing. Each node also carries the set of not-yet-expanded
//! candidate plays; a node is fully expanded once that set is empty.

use std::time::{Duration, Instant};

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::game_state::GameState;
use crate::movegen::play::Play;

use super::config::MctsConfig;
use super::heuristics::heavy_playout;
use super::Agent;

struct UctNode {
    parent: Option<usize>,
    /// The play whose application led from the parent to this node. `None`
    /// only at the root.
    play: Option<Play>,
    /// Player to move in this node's state; backpropagated results are taken
    /// from this player's perspective.
    player: usize,
    /// Candidate plays not yet expanded into children.
    remaining: Vec<Play>,
    children: Vec<usize>,
    result_sum: f64,
    visits: u32,
}

pub struct MctsAgent {
    config: MctsConfig,
    rng: StdRng,
}

impl MctsAgent {
    pub fn new(config: MctsConfig, seed: u64) -> Self {
        MctsAgent {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Candidate plays for a node, truncated to the configured limit by
    /// immediate score.
    fn candidates(&self, state: &GameState) -> Vec<Play> {
        if state.is_terminal() {
            return Vec::new();
        }
        let mut plays = state.all_plays();
        plays.sort_by_key(|p| state.score_play(p));
        let excess = plays.len().saturating_sub(self.config.candidate_limit);
        plays.drain(..excess);
        plays
    }

    fn ucb(&self, parent_visits: u32, node: &UctNode) -> f64 {
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let n = f64::from(node.visits);
        let avg = node.result_sum / n;
        avg + self.config.exploration * (2.0 * f64::from(parent_visits).ln() / n).sqrt()
    }

    fn best_child(&self, nodes: &[UctNode], parent: usize) -> usize {
        let pv = nodes[parent].visits;
        *nodes[parent]
            .children
            .iter()
            .max_by(|&&a, &&b| {
                self.ucb(pv, &nodes[a])
                    .partial_cmp(&self.ucb(pv, &nodes[b]))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("best_child called on a childless node")
    }

    fn rollout(&mut self, sim: &mut GameState) {
        for _ in 0..self.config.rollout_depth {
            if sim.is_terminal() {
                break;
            }
            let candidates = sim.all_plays();
            if candidates.iter().all(Play::is_pass) {
                break;
            }
            let play = heavy_playout(sim, &candidates);
            sim.apply_play(&play);
        }
    }
}

impl Agent for MctsAgent {
    fn choose_play(&mut self, state: &GameState) -> Play {
        let deadline = self
            .config
            .time_budget_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let mut nodes = vec![UctNode {
            parent: None,
            play: None,
            player: state.current_index(),
            remaining: self.candidates(state),
            children: Vec::new(),
            result_sum: 0.0,
            visits: 0,
        }];

        for iteration in 0..self.config.iterations {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                trace!("time budget hit after {iteration} iterations");
                break;
            }
            let mut sim = state.clone();
            let mut idx = 0;

            // Selection: descend through fully-expanded nodes by UCB.
            while nodes[idx].remaining.is_empty() && !nodes[idx].children.is_empty() {
                idx = self.best_child(&nodes, idx);
                let play = nodes[idx]
                    .play
                    .clone()
                    .expect("non-root node carries a play");
                sim.apply_play(&play);
            }

            // Expansion: realize one untried candidate as a new leaf.
            if !nodes[idx].remaining.is_empty() {
                let pick = self.rng.random_range(0..nodes[idx].remaining.len());
                let play = nodes[idx].remaining.swap_remove(pick);
                sim.apply_play(&play);
                let leaf = UctNode {
                    parent: Some(idx),
                    play: Some(play),
                    player: sim.current_index(),
                    remaining: self.candidates(&sim),
                    children: Vec::new(),
                    result_sum: 0.0,
                    visits: 0,
                };
                nodes.push(leaf);
                let leaf_idx = nodes.len() - 1;
                nodes[idx].children.push(leaf_idx);
                idx = leaf_idx;
            }

            self.rollout(&mut sim);

            // Backpropagation, each node scored from its own player's view.
            let mut cursor = Some(idx);
            while let Some(i) = cursor {
                nodes[i].visits += 1;
                nodes[i].result_sum += sim.result_for(nodes[i].player);
                cursor = nodes[i].parent;
            }
        }

        // Robust child: most visits, ties broken by accumulated result.
        nodes[0]
            .children
            .iter()
            .max_by(|&&a, &&b| {
                (nodes[a].visits, nodes[a].result_sum)
                    .partial_cmp(&(nodes[b].visits, nodes[b].result_sum))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .and_then(|&best| nodes[best].play.clone())
            .unwrap_or_else(|| Play::pass(state.current_player().rack.clone()))
    }

    fn name(&self) -> &str {
        "mcts"
    }
}
