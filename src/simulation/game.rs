use crate::ai::Agent;
use crate::error::SimulationError;
use crate::game::{GameOutcome, GameState, Player};

/// Result of playing a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub move_count: usize,
    pub player_one_moves: Vec<usize>,
    pub player_two_moves: Vec<usize>,
}

impl GameRecord {
    fn from_state(state: &GameState) -> Self {
        GameRecord {
            outcome: state.outcome(),
            move_count: state.move_count(),
            player_one_moves: state.history(Player::One).to_vec(),
            player_two_moves: state.history(Player::Two).to_vec(),
        }
    }
}

/// Play one game to completion on a fresh `rows` x `cols` board, Player One
/// moving first. `game` only tags errors.
pub fn play_game<'a>(
    game: u64,
    player_one: &'a mut dyn Agent,
    player_two: &'a mut dyn Agent,
    rows: usize,
    cols: usize,
) -> Result<GameRecord, SimulationError> {
    let mut state = GameState::with_dimensions(rows, cols);

    while !state.is_complete() {
        let agent = match state.current_player() {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };
        let column = agent
            .select_action(&state)
            .map_err(|source| SimulationError::Agent { game, source })?;
        state
            .add_piece(column)
            .map_err(|source| SimulationError::Move { game, source })?;
    }

    Ok(GameRecord::from_state(&state))
}

/// Seed for game `game_index` of a run started from `base_seed`.
///
/// Distinct indices under the same base always give distinct seeds.
pub fn game_seed(base_seed: u64, game_index: u64) -> u64 {
    // splitmix64 step; the finalizer is a bijection
    let mut z = base_seed.wrapping_add(
        game_index
            .wrapping_add(1)
            .wrapping_mul(0x9e37_79b9_7f4a_7c15),
    );
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
