//! Bulk simulation: plays many games between two agents and aggregates
//! win/stalemate statistics, sequentially or across a rayon thread pool.

mod game;
mod runner;
mod stats;

pub use game::{game_seed, play_game, GameRecord};
pub use runner::{SimulationConfig, Simulator};
pub use stats::{DirectionCounts, SimulationStats};
