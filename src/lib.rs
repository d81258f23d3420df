//! # Scrabble Engine Library
//!
//! A two-part engine for the tile-placement word game Scrabble:
//!
//! - **Move generator**: given a board state and a player's rack, enumerates
//!   every legal word placement and its score by intersecting a
//!   dictionary-derived prefix set with an anchor-based scan of the board.
//! - **Decision agents**: a greedy baseline, a Monte Carlo Tree Search (UCT)
//!   agent, and a sampled-chance expectimax agent, all consuming the game
//!   state and move generator as black boxes.
//!
//! ## Usage
//!
//! ```no_run
//! use scrabble_engine::agents::{Agent, GreedyAgent};
//! use scrabble_engine::game::GameState;
//! use scrabble_engine::lexicon::Lexicon;
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(Lexicon::from_file("words.txt").unwrap());
//! let mut state = GameState::two_players(lexicon, 42);
//! let play = GreedyAgent.choose_play(&state);
//! state.apply_play(&play);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Decision agents: greedy, MCTS/UCT, expectimax
pub mod agents;

/// Board, tiles, rack, bag and game state
pub mod game;

/// Dictionary word and prefix membership
pub mod lexicon;

/// Legal move generation
pub mod movegen;

/// Logger bootstrap for the CLI
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Scrabble engine library
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Board layout error: {0}")]
    BoardLayout(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EngineError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
