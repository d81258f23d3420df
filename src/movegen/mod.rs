//! Legal move generation: the centerpiece of the engine.
//!
//! For every anchor square and both axis directions, place every prefix that
//! could precede the anchor (either the one already on the board, or any
//! rack-derived prefix that fits in the open space), then extend one square
//! at a time past the anchor. Extensions survive only while the accumulated
//! string is a valid dictionary prefix and every perpendicular crossword
//! stays valid; they are emitted as plays whenever the string is a complete
//! word that existing board letters cannot silently extend.

pub mod play;
pub mod prefixes;

use log::trace;

use crate::game::board::{Board, Dir, Square};
use crate::game::rack::Rack;
use crate::game::tile::PlacedTile;
use crate::lexicon::Lexicon;
use crate::movegen::play::Play;
use crate::movegen::prefixes::rack_prefixes;

fn offset(s: usize, step: isize) -> usize {
    (s as isize + step) as usize
}

/// Every legal play for this rack on this board, plus the empty play.
/// Pure function of its inputs; recomputed from scratch each call.
pub fn all_plays(board: &Board, rack: &Rack, lexicon: &Lexicon) -> Vec<Play> {
    let mut plays = vec![Play::pass(rack.clone())];
    let prefixes = rack_prefixes(rack, lexicon);
    let anchors = board.all_anchors();
    trace!(
        "generating plays: {} anchors, {} rack prefixes",
        anchors.len(),
        prefixes.len()
    );
    for anchor in anchors {
        for dir in [Dir::Across, Dir::Down] {
            for start in prefix_plays(&prefixes, board, anchor, dir, rack) {
                extend_play(board, lexicon, &start, &mut plays);
            }
        }
    }
    plays
}

/// All candidate starting points whose word ends just before `anchor`.
fn prefix_plays(
    prefixes: &[Vec<PlacedTile>],
    board: &Board,
    anchor: usize,
    dir: Dir,
    rack: &Rack,
) -> Vec<Play> {
    let step = dir.step();
    if board.letter_at(offset(anchor, -step)).is_some() {
        // Letters already on the board fix the one possible prefix.
        let start = board.scan_letters(anchor, -step);
        let mut word = Vec::new();
        let mut s = start;
        while s != anchor {
            let tile = board
                .letter_at(s)
                .expect("scan_letters returned a non-letter run");
            word.push(tile);
            s = offset(s, step);
        }
        vec![Play {
            start,
            dir,
            word,
            rack: rack.clone(),
        }]
    } else {
        // Any rack prefix that fits in the open space before the anchor,
        // bounded by the nearest other anchor or the board edge.
        let free = anchor - board.scan_to_anchor(anchor, -step);
        let max_len = free / step as usize;
        prefixes
            .iter()
            .filter(|p| p.len() <= max_len)
            .map(|p| {
                let mut remaining = rack.clone();
                for &tile in p {
                    remaining.remove_placed(tile);
                }
                Play {
                    start: offset(anchor, -step * p.len() as isize),
                    dir,
                    word: p.clone(),
                    rack: remaining,
                }
            })
            .collect()
    }
}

/// Explore every way of growing `play` by one square; push each complete
/// word onto `out` and keep extending, since longer words may share the
/// prefix.
fn extend_play(board: &Board, lexicon: &Lexicon, play: &Play, out: &mut Vec<Play>) {
    let step = play.dir.step();
    let s = offset(play.start, step * play.word.len() as isize);
    if board.square(s) == Square::Off {
        return;
    }

    let board_letter = board.letter_at(s);
    // A perpendicular crossword only needs validating when we drop a new
    // tile; a run through an existing letter is already a legal word.
    let crossword = match board_letter {
        None => Some(board.crossword(s, play.dir)),
        Some(_) => None,
    };
    let candidates = match board_letter {
        Some(tile) => vec![tile],
        None => play.rack.candidate_letters(),
    };

    let mut text = play.word_string();
    for cand in candidates {
        text.push(cand.letter);
        let ok = lexicon.is_prefix(&text)
            && crossword
                .as_ref()
                .map_or(true, |cw| crossword_valid(cw, cand.letter, lexicon));
        if ok {
            let mut extended = play.clone();
            extended.word.push(cand);
            if board_letter.is_none() {
                extended.rack.remove_placed(cand);
            }
            if lexicon.is_word(&text) && !board.square(offset(s, step)).is_letter() {
                out.push(extended.clone());
            }
            extend_play(board, lexicon, &extended, out);
        }
        text.pop();
    }
}

/// Placing `letter` is fine perpendicular-wise when there is no actual
/// crossing word (length 1), or when filling the placeholder yields a word.
fn crossword_valid(crossword: &str, letter: char, lexicon: &Lexicon) -> bool {
    if crossword.len() == 1 {
        return true;
    }
    let filled = crossword.replace('.', &letter.to_string());
    lexicon.is_word(&filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rack::rack_from_str;
    use crate::game::tile::Tile;
    use std::collections::HashSet;

    fn words(plays: &[Play]) -> HashSet<String> {
        plays
            .iter()
            .filter(|p| !p.is_pass())
            .map(|p| p.word_string())
            .collect()
    }

    #[test]
    fn test_empty_board_cat_scenario() {
        let board = Board::standard();
        let lexicon = Lexicon::from_words(["CAT", "AT", "A"]).unwrap();
        let rack = rack_from_str("CAT");

        let plays = all_plays(&board, &rack, &lexicon);

        // Every generated word is in the dictionary.
        let generated = words(&plays);
        assert!(generated.contains("CAT"));
        assert!(generated.contains("AT"));
        assert!(generated.contains("A"));
        assert_eq!(generated.len(), 3);

        // Every non-empty play covers the center star.
        let center = board.center();
        for play in plays.iter().filter(|p| !p.is_pass()) {
            let step = play.dir.step();
            let covered: Vec<usize> = (0..play.word.len())
                .map(|i| offset(play.start, step * i as isize))
                .collect();
            assert!(
                covered.contains(&center),
                "play {play} misses the center square"
            );
        }

        // A CAT through the center scores the letter sum doubled by the star.
        let board_score_cat = plays
            .iter()
            .filter(|p| p.word_string() == "CAT")
            .map(|p| board.score(p))
            .max()
            .unwrap();
        assert_eq!(board_score_cat, 10);

        // The empty play is always among the results.
        assert!(plays.iter().any(|p| p.is_pass()));
    }

    #[test]
    fn test_all_generated_words_and_crosswords_are_valid() {
        let lexicon =
            Lexicon::from_words(["CAT", "CATS", "AT", "A", "TO", "SO", "AS", "OAT"]).unwrap();
        let mut board = Board::standard();

        // Seed the board with CAT through the center.
        let first = all_plays(&board, &rack_from_str("CAT"), &lexicon)
            .into_iter()
            .find(|p| p.word_string() == "CAT")
            .unwrap();
        board.apply(&first);

        let plays = all_plays(&board, &rack_from_str("SOT"), &lexicon);
        assert!(plays.len() > 1, "expected some legal plays");

        for play in plays.iter().filter(|p| !p.is_pass()) {
            // Primary word is legal.
            assert!(
                lexicon.is_word(&play.word_string()),
                "illegal primary word {}",
                play.word_string()
            );
            // Apply to a scratch board and re-read every perpendicular run.
            let mut scratch = board.clone();
            scratch.apply(play);
            let cross_step = play.dir.other().step();
            let step = play.dir.step();
            for i in 0..play.word.len() {
                let s = offset(play.start, step * i as isize);
                let run_start = scratch.scan_letters(s, -cross_step);
                let run_end = scratch.scan_letters(s, cross_step);
                if run_start == run_end {
                    continue;
                }
                let mut word = String::new();
                let mut cur = run_start;
                loop {
                    word.push(scratch.letter_at(cur).unwrap().letter);
                    if cur == run_end {
                        break;
                    }
                    cur = offset(cur, cross_step);
                }
                assert!(lexicon.is_word(&word), "illegal crossword {word}");
            }
        }
    }

    #[test]
    fn test_board_prefix_is_forced() {
        let lexicon = Lexicon::from_words(["CAT", "CATS"]).unwrap();
        let mut board = Board::standard();
        let first = all_plays(&board, &rack_from_str("CAT"), &lexicon)
            .into_iter()
            .find(|p| p.word_string() == "CAT" && p.dir == Dir::Across)
            .unwrap();
        board.apply(&first);

        // With an S the only legal continuation is CATS.
        let plays = all_plays(&board, &rack_from_str("S"), &lexicon);
        let generated = words(&plays);
        assert_eq!(generated, HashSet::from(["CATS".to_string()]));

        // The CATS play keeps the board letters in its word but consumes
        // only the S from the rack.
        let cats = plays.iter().find(|p| !p.is_pass()).unwrap();
        assert_eq!(cats.word.len(), 4);
        assert!(cats.rack.is_empty());
    }

    #[test]
    fn test_blank_play_is_tracked_and_worthless() {
        let board = Board::standard();
        let lexicon = Lexicon::from_words(["AB"]).unwrap();
        let plays = all_plays(&board, &rack_from_str("A_"), &lexicon);

        let ab = plays
            .iter()
            .find(|p| p.word_string() == "AB")
            .expect("AB should be spellable with a blank");
        assert!(ab.word[1].blank);
        assert!(ab.rack.is_empty());
        // A(1) + blank B(0), doubled by the star.
        assert_eq!(board.score(ab), 2);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let lexicon = Lexicon::from_words(["CAT", "AT", "A", "TA"]).unwrap();
        let board = Board::standard();
        let rack = rack_from_str("CAT");

        let mut first = all_plays(&board, &rack, &lexicon);
        let mut second = all_plays(&board, &rack, &lexicon);
        let key = |p: &Play| {
            (
                p.start,
                p.dir == Dir::Down,
                p.word_string(),
                p.word.iter().map(|t| t.blank).collect::<Vec<_>>(),
            )
        };
        first.sort_by_key(key);
        second.sort_by_key(key);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_plays_without_usable_letters() {
        let board = Board::standard();
        let lexicon = Lexicon::from_words(["CAT"]).unwrap();
        let plays = all_plays(&board, &rack_from_str("XYZ"), &lexicon);
        assert_eq!(plays.len(), 1);
        assert!(plays[0].is_pass());
        assert_eq!(plays[0].rack.count(Tile::Letter('X')), 1);
    }
}
