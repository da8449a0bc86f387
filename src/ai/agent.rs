use crate::error::AgentError;
use crate::game::{GameState, Player};

use super::{HeuristicAgent, RandomAgent};

/// Universal interface for automated players.
pub trait Agent {
    /// Select a 1-based column for the player to move in `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Selects which agent implementation plays a side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Heuristic,
}

impl AgentKind {
    /// Build an agent playing `player` on a `rows` x `cols` board.
    ///
    /// `seed` only affects agents that use randomness; without it they are
    /// seeded from the OS.
    pub fn build(self, player: Player, rows: usize, cols: usize, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentKind::Heuristic => Box::new(HeuristicAgent::with_dimensions(player, rows, cols)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        let random = AgentKind::Random.build(Player::One, 6, 7, Some(1));
        let heuristic = AgentKind::Heuristic.build(Player::Two, 6, 7, None);
        assert_eq!(random.name(), "Random");
        assert_eq!(heuristic.name(), "Heuristic");
    }

    #[test]
    fn test_agent_kind_serde_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            kind: AgentKind,
        }
        let parsed: Wrapper = toml::from_str("kind = \"heuristic\"").unwrap();
        assert_eq!(parsed.kind, AgentKind::Heuristic);
        assert!(toml::from_str::<Wrapper>("kind = \"minimax\"").is_err());
    }

    #[test]
    fn test_built_agents_play_legal_moves() {
        for kind in [AgentKind::Random, AgentKind::Heuristic] {
            let mut agent = kind.build(Player::One, 6, 7, Some(3));
            let state = GameState::initial();
            let column = agent.select_action(&state).unwrap();
            assert!(state.legal_moves().contains(&column));
        }
    }
}
