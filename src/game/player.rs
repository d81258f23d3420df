//! One seat at the table.

use serde::{Deserialize, Serialize};

use crate::game::rack::Rack;

/// Voluntary exchanges each player may make per game.
pub const EXCHANGES_PER_PLAYER: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: i32,
    pub rack: Rack,
    /// Remaining voluntary-exchange allowance.
    pub exchanges_left: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            score: 0,
            rack: Rack::default(),
            exchanges_left: EXCHANGES_PER_PLAYER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let p = Player::new("p1");
        assert_eq!(p.name, "p1");
        assert_eq!(p.score, 0);
        assert!(p.rack.is_empty());
        assert_eq!(p.exchanges_left, EXCHANGES_PER_PLAYER);
    }
}
