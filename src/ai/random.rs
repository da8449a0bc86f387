use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible simulations.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of `legal_moves` uniformly.
    pub fn choose_move(&mut self, legal_moves: &[usize]) -> Result<usize, AgentError> {
        if legal_moves.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..legal_moves.len());
        Ok(legal_moves[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        self.choose_move(state.legal_moves())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
