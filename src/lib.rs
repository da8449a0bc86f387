//! # Connect Four Simulator
//!
//! A Connect Four engine with automated players, built for running large
//! numbers of games and collecting win statistics. Games can be played on the
//! calling thread or spread across a rayon thread pool.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, player, state machine with win detection
//! - [`ai`]: Agent trait, rule-based heuristic player, uniform random player
//! - [`simulation`]: Game driver, batch runner, aggregated statistics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod simulation;
