use std::sync::atomic::{AtomicU64, Ordering};

use log::info;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::{AppConfig, BoardConfig, PlayersConfig};
use crate::error::SimulationError;
use crate::game::Player;

use super::game::{game_seed, play_game, GameRecord};
use super::stats::SimulationStats;

/// Simulation run configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: u64,
    pub log_interval: u64,
    /// Base seed; every game derives its own seed from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 300_000,
            log_interval: 10_000,
            seed: None,
            parallel: false,
        }
    }
}

/// Plays repeated games between the configured agents and aggregates the
/// results.
pub struct Simulator {
    config: SimulationConfig,
    board: BoardConfig,
    players: PlayersConfig,
}

impl Simulator {
    pub fn new(config: &AppConfig) -> Self {
        Simulator {
            config: config.simulation.clone(),
            board: config.board,
            players: config.players,
        }
    }

    /// Run every game, in parallel if configured.
    pub fn run(&self) -> Result<SimulationStats, SimulationError> {
        info!(
            "Starting {} games: {:?} (Player One) vs {:?} (Player Two) on {}x{}{}",
            self.config.num_games,
            self.players.player_one,
            self.players.player_two,
            self.board.rows,
            self.board.cols,
            if self.config.parallel { ", parallel" } else { "" }
        );

        let stats = if self.config.parallel {
            self.run_parallel()?
        } else {
            self.run_sequential()?
        };

        info!(
            "Simulation complete. Player One Wins: {}, Player Two Wins: {}, Stalemates: {}",
            stats.player_one_wins, stats.player_two_wins, stats.stalemates
        );
        Ok(stats)
    }

    /// Play all games one after another on the calling thread.
    pub fn run_sequential(&self) -> Result<SimulationStats, SimulationError> {
        let mut stats = SimulationStats::new();

        for game in 0..self.config.num_games {
            let record = self.play_single(game)?;
            stats.record(&record);

            let done = game + 1;
            if done % self.config.log_interval == 0 {
                info!(
                    "Games: {} | Player One Wins: {} | Player Two Wins: {} | Stalemates: {}",
                    done, stats.player_one_wins, stats.player_two_wins, stats.stalemates
                );
            }
        }

        Ok(stats)
    }

    /// Play all games across the rayon thread pool. Each game owns its board
    /// and agents; per-thread totals are merged at the end.
    pub fn run_parallel(&self) -> Result<SimulationStats, SimulationError> {
        let completed = AtomicU64::new(0);

        (0..self.config.num_games)
            .into_par_iter()
            .map(|game| self.play_single(game))
            .try_fold(SimulationStats::new, |mut stats, record| {
                stats.record(&record?);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % self.config.log_interval == 0 {
                    info!("Games: {} / {}", done, self.config.num_games);
                }
                Ok(stats)
            })
            .try_reduce(SimulationStats::new, |mut left, right| {
                left.merge(&right);
                Ok(left)
            })
    }

    /// Play game number `game` with freshly built agents.
    pub fn play_single(&self, game: u64) -> Result<GameRecord, SimulationError> {
        let seed = self.config.seed.map(|base| game_seed(base, game));
        let (rows, cols) = (self.board.rows, self.board.cols);

        let mut player_one = self.players.player_one.build(
            Player::One,
            rows,
            cols,
            seed.map(|s| game_seed(s, u64::from(Player::One.token()))),
        );
        let mut player_two = self.players.player_two.build(
            Player::Two,
            rows,
            cols,
            seed.map(|s| game_seed(s, u64::from(Player::Two.token()))),
        );

        play_game(game, player_one.as_mut(), player_two.as_mut(), rows, cols)
    }
}
