//! Connect Four board engine: grid representation, directional line scans,
//! player tokens, and the per-game state machine.

mod board;
mod player;
mod state;

pub use board::{Cell, Direction, Grid, COLS, LINE_NEIGHBOURS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
