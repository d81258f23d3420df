pub mod bag;
pub mod board;
pub mod game_state;
pub mod player;
pub mod rack;
pub mod tile;

pub use bag::Bag;
pub use board::{Board, Bonus, Dir, Square};
pub use game_state::GameState;
pub use player::Player;
pub use rack::Rack;
pub use tile::{PlacedTile, Tile};
