//! Cheap static evaluation used by rollouts and replenishment ranking.

use crate::game::board::Board;
use crate::game::game_state::GameState;
use crate::game::tile::Tile;
use crate::movegen::play::Play;

/// Value of holding the first copy of a letter.
fn first_copy_value(tile: Tile) -> f64 {
    match tile {
        Tile::Blank => 24.5,
        Tile::Letter(ch) => match ch {
            'A' => 1.0,
            'B' => -3.5,
            'C' => -0.5,
            'D' => 0.0,
            'E' => 4.0,
            'F' => -2.0,
            'G' => -2.0,
            'H' => 0.5,
            'I' => -0.5,
            'J' => -3.0,
            'K' => -2.5,
            'L' => -1.0,
            'M' => -1.0,
            'N' => 0.5,
            'O' => -1.5,
            'P' => -1.5,
            'Q' => -11.5,
            'R' => 1.5,
            'S' => 7.5,
            'T' => 0.0,
            'U' => -3.0,
            'V' => -5.5,
            'W' => -4.0,
            'X' => 3.5,
            'Y' => -2.0,
            'Z' => 2.0,
            _ => 0.0,
        },
    }
}

/// Penalty (usually) for each additional copy of the same letter.
fn extra_copy_value(tile: Tile) -> f64 {
    match tile {
        Tile::Blank => -15.0,
        Tile::Letter(ch) => match ch {
            'A' => -3.0,
            'B' => -3.0,
            'C' => -3.5,
            'D' => -2.5,
            'E' => -2.5,
            'F' => -2.0,
            'G' => -2.5,
            'H' => -3.5,
            'I' => -4.0,
            'J' => -3.0,
            'K' => -2.5,
            'L' => -2.0,
            'M' => -2.0,
            'N' => -2.5,
            'O' => -3.5,
            'P' => -2.5,
            'Q' => -11.5,
            'R' => -3.5,
            'S' => -4.0,
            'T' => -2.5,
            'U' => -3.0,
            'V' => -3.5,
            'W' => -4.5,
            'X' => 3.5,
            'Y' => -4.5,
            'Z' => 2.0,
            _ => 0.0,
        },
    }
}

fn is_vowel(tile: Tile) -> bool {
    matches!(tile, Tile::Letter('A' | 'E' | 'I' | 'O' | 'U'))
}

/// Static quality of a set of held tiles: per-letter values with diminishing
/// returns on duplicates, plus Gordon's vowel/consonant ratio term.
pub fn balanced_rack_value(tiles: &[Tile]) -> f64 {
    let n = tiles.len() as f64;
    let vowels = tiles.iter().filter(|&&t| is_vowel(t)).count() as f64;

    let mut balance = 0.0;
    let mut seen: Vec<Tile> = Vec::new();
    for &tile in tiles {
        let copies_before = seen.iter().filter(|&&t| t == tile).count() as f64;
        balance += first_copy_value(tile) + copies_before * extra_copy_value(tile);
        seen.push(tile);
    }

    let ratio = (3.0 * vowels + 1.0 - n).min(2.0 * n - 3.0 * vowels);
    balance + ratio
}

const HOLDING_U_INCENTIVE: f64 = 6.0;

/// Reward hanging on to a U while the Q is still unaccounted for, unless
/// this very play pairs them up.
pub fn holding_u_for_q_value(board: &Board, play: &Play) -> f64 {
    let rack_has = |ch: char| play.rack.tiles().contains(&Tile::Letter(ch));
    let word_has = |ch: char| play.word.iter().any(|t| t.letter == ch);

    let holds_u = rack_has('U') || word_has('U');
    if !holds_u || board.contains_letter('Q') {
        return 0.0;
    }
    if (word_has('Q') && rack_has('U')) || (rack_has('Q') && word_has('U')) {
        return 0.0;
    }
    HOLDING_U_INCENTIVE
}

/// Heavy playout policy: pick the candidate maximizing immediate score plus
/// the balance of the rack left behind. The rack evaluated is the partial
/// one before replenishing, since the bag's contents are unknown.
pub fn heavy_playout(state: &GameState, candidates: &[Play]) -> Play {
    candidates
        .iter()
        .max_by(|a, b| {
            playout_value(state, a)
                .partial_cmp(&playout_value(state, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .unwrap_or_else(|| Play::pass(state.current_player().rack.clone()))
}

fn playout_value(state: &GameState, play: &Play) -> f64 {
    balanced_rack_value(play.rack.tiles())
        + holding_u_for_q_value(state.board(), play)
        + f64::from(state.score_play(play))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bag::Bag;
    use crate::game::player::Player;
    use crate::game::rack::rack_from_str;
    use crate::game::tile::PlacedTile;
    use crate::lexicon::Lexicon;
    use std::sync::Arc;

    #[test]
    fn test_balanced_rack_prefers_variety() {
        let varied = rack_from_str("SATIRE");
        let clumped = rack_from_str("IIISSS");
        assert!(
            balanced_rack_value(varied.tiles()) > balanced_rack_value(clumped.tiles())
        );
    }

    #[test]
    fn test_balanced_rack_known_value() {
        // S: 7.5 - 4.0; I: -0.5 - 4.0 - 4.0; ratio term for n=5, v=3:
        // min(3*3 + 1 - 5, 2*5 - 3*3) = 1.
        let rack = rack_from_str("IIISS");
        assert!((balanced_rack_value(rack.tiles()) - (-4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_holding_u_incentive() {
        let board = Board::standard();
        let play = Play {
            start: board.center(),
            dir: crate::game::board::Dir::Across,
            word: vec![PlacedTile::natural('A')],
            rack: rack_from_str("U"),
        };
        assert_eq!(holding_u_for_q_value(&board, &play), HOLDING_U_INCENTIVE);

        // Playing the Q alongside a held U cancels the incentive.
        let qu_play = Play {
            start: board.center(),
            dir: crate::game::board::Dir::Across,
            word: vec![PlacedTile::natural('Q')],
            rack: rack_from_str("U"),
        };
        assert_eq!(holding_u_for_q_value(&board, &qu_play), 0.0);

        // No U anywhere: nothing to protect.
        let no_u = Play {
            start: board.center(),
            dir: crate::game::board::Dir::Across,
            word: vec![PlacedTile::natural('A')],
            rack: rack_from_str("B"),
        };
        assert_eq!(holding_u_for_q_value(&board, &no_u), 0.0);
    }

    #[test]
    fn test_heavy_playout_prefers_scoring() {
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

        let plays = state.all_plays();
        let choice = heavy_playout(&state, &plays);
        // CAT scores 10 and leaves an empty (neutral) rack; strictly better
        // than any shorter word here.
        assert_eq!(choice.word_string(), "CAT");
    }

    #[test]
    fn test_heavy_playout_empty_candidates_passes() {
        let lexicon = Arc::new(Lexicon::from_words(["CAT"]).unwrap());
        let state = GameState::from_parts(
            Board::standard(),
            vec![Player::new("p1")],
            Bag::empty(),
            lexicon,
            1,
        );
        let choice = heavy_playout(&state, &[]);
        assert!(choice.is_pass());
    }
}
