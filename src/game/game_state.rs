//! The composed game: board + players + bag + turn index.
//!
//! A clone is a full independent copy (board, bag, racks, RNG), so search
//! agents can explore futures without corrupting the canonical state. All
//! randomness flows through the owned, explicitly seeded `StdRng`, making
//! every game and every simulation branch reproducible.

use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::bag::Bag;
use crate::game::board::{Board, MAX_BOARD_SCORE};
use crate::game::player::Player;
use crate::game::tile::Tile;
use crate::lexicon::Lexicon;
use crate::movegen;
use crate::movegen::play::Play;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    bag: Bag,
    current: usize,
    /// Shared count of empty-play turns still allowed to mutate the game;
    /// once exhausted, a full round of passes ends it.
    exchanges_remaining: i32,
    consecutive_passes: usize,
    terminal: bool,
    lexicon: Arc<Lexicon>,
    rng: StdRng,
}

impl GameState {
    /// Start a game: fresh shuffled bag, racks drawn to 7.
    pub fn new(lexicon: Arc<Lexicon>, names: &[&str], seed: u64) -> Self {
        assert!(!names.is_empty(), "a game needs at least one player");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bag = Bag::full(&mut rng);
        let mut players: Vec<Player> = names.iter().map(|&name| Player::new(name)).collect();
        for p in &mut players {
            bag.replenish(&mut p.rack);
        }
        let exchanges_remaining = 2 * players.len() as i32;
        GameState {
            board: Board::standard(),
            players,
            bag,
            current: 0,
            exchanges_remaining,
            consecutive_passes: 0,
            terminal: false,
            lexicon,
            rng,
        }
    }

    pub fn two_players(lexicon: Arc<Lexicon>, seed: u64) -> Self {
        Self::new(lexicon, &["p1", "p2"], seed)
    }

    /// Assemble a state from explicit parts. Used by tests and tools that
    /// need a position other than the opening one.
    pub fn from_parts(
        board: Board,
        players: Vec<Player>,
        bag: Bag,
        lexicon: Arc<Lexicon>,
        seed: u64,
    ) -> Self {
        let exchanges_remaining = 2 * players.len() as i32;
        GameState {
            board,
            players,
            bag,
            current: 0,
            exchanges_remaining,
            consecutive_passes: 0,
            terminal: false,
            lexicon,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Every legal play for the player to move. Delegates to the move
    /// generator; recomputed each call since the board mutates between turns.
    pub fn all_plays(&self) -> Vec<Play> {
        movegen::all_plays(&self.board, &self.current_player().rack, &self.lexicon)
    }

    /// Points this play would score on the current board.
    pub fn score_play(&self, play: &Play) -> i32 {
        if play.is_pass() {
            0
        } else {
            self.board.score(play)
        }
    }

    /// Commit a play: write it to the board, credit the score, replenish the
    /// mover's rack, advance the turn. The empty play exchanges up to 3
    /// tiles while the mover still has an exchange allowance, otherwise
    /// passes.
    pub fn apply_play(&mut self, play: &Play) {
        self.apply_play_inner(play, true);
    }

    /// Like [`apply_play`](Self::apply_play) but without replenishing the
    /// rack; expectimax replenishes explicitly at its chance nodes.
    pub fn apply_play_partial(&mut self, play: &Play) {
        self.apply_play_inner(play, false);
    }

    fn apply_play_inner(&mut self, play: &Play, replenish: bool) {
        let idx = self.current;
        if play.is_pass() {
            let player = &mut self.players[idx];
            if player.exchanges_left > 0 {
                player.exchanges_left -= 1;
                self.bag.exchange(&mut player.rack, &mut self.rng);
                debug!("{} exchanges tiles", self.players[idx].name);
            } else {
                debug!("{} passes", self.players[idx].name);
            }
            self.exchanges_remaining -= 1;
            self.consecutive_passes += 1;
            if self.consecutive_passes >= self.players.len() && self.exchanges_remaining < 0 {
                self.terminal = true;
            }
            self.advance_turn();
            return;
        }

        // Score before writing: bonuses only count on still-empty squares.
        let points = self.board.score(play);
        self.board.apply(play);
        let player = &mut self.players[idx];
        player.rack = play.rack.clone();
        player.score += points;
        if replenish {
            self.bag.replenish(&mut player.rack);
        }
        debug!(
            "{} plays {} for {} points",
            self.players[idx].name, play, points
        );
        self.consecutive_passes = 0;
        if self.players[idx].rack.is_empty() {
            self.finish_game(idx);
        }
        self.advance_turn();
    }

    /// End-game adjustment: every other player's remaining rack value moves
    /// to the player who went out.
    fn finish_game(&mut self, out_idx: usize) {
        let mut gained = 0;
        for (i, player) in self.players.iter_mut().enumerate() {
            if i == out_idx {
                continue;
            }
            let leftover = player.rack.point_value();
            player.score -= leftover;
            gained += leftover;
        }
        self.players[out_idx].score += gained;
        self.terminal = true;
        debug!(
            "{} goes out, collecting {} leftover points",
            self.players[out_idx].name, gained
        );
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Hand specific bag tiles to a player (sampled replenishment at an
    /// expectimax chance node). The tiles must come from the bag.
    pub fn give_tiles(&mut self, idx: usize, tiles: &[Tile]) {
        for &tile in tiles {
            let removed = self.bag.remove(tile);
            debug_assert!(removed, "sampled tile {tile:?} not in bag");
            self.players[idx].rack.push(tile);
        }
    }

    /// Result of the game from `idx`'s perspective: in single-player mode a
    /// normalized score fraction, otherwise 1.0 for holding the top score.
    pub fn result_for(&self, idx: usize) -> f64 {
        if self.players.len() == 1 {
            return f64::from(self.players[idx].score) / f64::from(MAX_BOARD_SCORE);
        }
        let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        if self.players[idx].score == best {
            1.0
        } else {
            0.0
        }
    }

    /// Total tokens across board, bag and racks; constant for a game's
    /// lifetime.
    pub fn total_tiles(&self) -> usize {
        self.board.tiles_on_board()
            + self.bag.len()
            + self.players.iter().map(|p| p.rack.len()).sum::<usize>()
    }
}
