//! One-ply baseline: play whatever scores the most right now.

use crate::game::game_state::GameState;
use crate::movegen::play::Play;

use super::Agent;

#[derive(Debug, Default)]
pub struct GreedyAgent;

impl Agent for GreedyAgent {
    fn choose_play(&mut self, state: &GameState) -> Play {
        state
            .all_plays()
            .into_iter()
            .max_by_key(|p| state.score_play(p))
            .unwrap_or_else(|| Play::pass(state.current_player().rack.clone()))
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bag::Bag;
    use crate::game::board::Board;
    use crate::game::player::Player;
    use crate::game::rack::rack_from_str;
    use crate::lexicon::Lexicon;
    use std::sync::Arc;

    #[test]
    fn test_greedy_picks_highest_score() {
        let lexicon = Arc::new(Lexicon::from_words(["CAT", "AT", "A"]).unwrap());
        let mut players = vec![Player::new("p1")];
        players[0].rack = rack_from_str("CAT");
        let state = GameState::from_parts(
            Board::standard(),
            players,
            Bag::empty(),
            lexicon,
            1,
        );

        let mut agent = GreedyAgent;
        let play = agent.choose_play(&state);
        assert_eq!(play.word_string(), "CAT");
        assert_eq!(state.score_play(&play), 10);
    }

    #[test]
    fn test_greedy_passes_when_nothing_fits() {
        let lexicon = Arc::new(Lexicon::from_words(["CAT"]).unwrap());
        let mut players = vec![Player::new("p1")];
        players[0].rack = rack_from_str("XYZ");
        let state = GameState::from_parts(
            Board::standard(),
            players,
            Bag::empty(),
            lexicon,
            1,
        );

        let mut agent = GreedyAgent;
        assert!(agent.choose_play(&state).is_pass());
    }
}
