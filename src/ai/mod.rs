//! Automated players: the [`Agent`] trait, the single-ply heuristic player
//! and a uniform random player.

mod agent;
mod heuristic;
mod random;

pub use agent::{Agent, AgentKind};
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;
