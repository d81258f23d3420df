//! Tunable search hyperparameters.
//!
//! The specific limits and weights are approximations with no single correct
//! value; treat them as configuration. The mechanisms they bound (candidate
//! truncation, replenishment sampling, rollout depth) are the contract.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// MCTS/UCT parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Iteration budget per decision.
    pub iterations: usize,

    /// Exploration constant C in `avg + C * sqrt(2 ln N / n)`.
    pub exploration: f64,

    /// Keep only this many highest-scoring candidate plays per node.
    pub candidate_limit: usize,

    /// Lookahead moves per rollout (heuristic playout, not to terminal).
    pub rollout_depth: usize,

    /// Optional wall-clock budget; checked at the start of each iteration.
    pub time_budget_ms: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            exploration: 1.0,
            candidate_limit: 100,
            rollout_depth: 2,
            time_budget_ms: None,
        }
    }
}

/// Expectimax parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectimaxConfig {
    /// Search depth in MAX plies; 0 degenerates to greedy.
    pub depth: usize,

    /// Keep only this many highest-scoring plays at a MAX node, and this
    /// many best-balanced replenishments at a chance node.
    pub top_k: usize,

    /// Random replenishment draws per chance node before deduplication.
    pub sample_size: usize,
}

impl Default for ExpectimaxConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            top_k: 20,
            sample_size: 200,
        }
    }
}

/// Combined configuration for every search agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mcts: MctsConfig,
    pub expectimax: ExpectimaxConfig,
}

impl SearchConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            EngineError::Config(format!("cannot open config {}: {e}", path.display()))
        })?;
        serde_json::from_reader(file)
            .map_err(|e| EngineError::Config(format!("invalid config {}: {e}", path.display())))
    }
}
