//! Decision agents: strategies that pick one play from the legal set.

pub mod config;
pub mod expectimax;
pub mod greedy;
pub mod heuristics;
pub mod mcts;

pub use config::{ExpectimaxConfig, MctsConfig, SearchConfig};
pub use expectimax::ExpectimaxAgent;
pub use greedy::GreedyAgent;
pub use mcts::MctsAgent;

use crate::game::game_state::GameState;
use crate::movegen::play::Play;

/// A move-selection policy. Implementations treat the state and the move
/// generator as black boxes and may keep internal RNG state across turns.
pub trait Agent {
    fn choose_play(&mut self, state: &GameState) -> Play;

    fn name(&self) -> &str;
}

/// Agent selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    Greedy,
    Mcts,
    Expectimax,
}

impl AgentKind {
    pub fn build(self, config: &SearchConfig, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Greedy => Box::new(GreedyAgent),
            AgentKind::Mcts => Box::new(MctsAgent::new(config.mcts.clone(), seed)),
            AgentKind::Expectimax => {
                Box::new(ExpectimaxAgent::new(config.expectimax.clone(), seed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_kind() {
        let config = SearchConfig::default();
        assert_eq!(AgentKind::Greedy.build(&config, 1).name(), "greedy");
        assert_eq!(AgentKind::Mcts.build(&config, 1).name(), "mcts");
        assert_eq!(AgentKind::Expectimax.build(&config, 1).name(), "expectimax");
    }
}
