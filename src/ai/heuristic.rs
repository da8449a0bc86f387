use crate::error::AgentError;
use crate::game::{GameState, Grid, Player, COLS, LINE_NEIGHBOURS, ROWS};

use super::agent::Agent;

/// Single-ply heuristic player.
///
/// Candidate columns are scanned nearest-to-center first. The first column
/// that wins outright is played; failing that, the first column that stops
/// an opponent win; failing that, the column extending the longest own line
/// without handing the opponent a better slot directly above it; failing
/// that, the center-most legal column.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    player: Player,
    opponent: Player,
    rows: usize,
    cols: usize,
}

impl HeuristicAgent {
    /// Heuristic player on the standard 6x7 board.
    pub fn new(player: Player) -> Self {
        Self::with_dimensions(player, ROWS, COLS)
    }

    pub fn with_dimensions(player: Player, rows: usize, cols: usize) -> Self {
        HeuristicAgent {
            player,
            opponent: player.other(),
            rows,
            cols,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Pick a 1-based column from `legal_moves` given a read-only `grid` and
    /// the per-column `row_heights`.
    pub fn choose_move(
        &self,
        grid: &Grid,
        legal_moves: &[usize],
        row_heights: &[usize],
    ) -> Result<usize, AgentError> {
        self.check_view(grid, legal_moves, row_heights)?;

        let candidates = center_first(legal_moves, self.cols);
        let own = self.player.to_cell();
        let opponent = self.opponent.to_cell();

        let mut winning_move = None;
        let mut blocking_move = None;
        let mut best_move = None;
        let mut best_count = 0;

        for &column in &candidates {
            let col = column - 1;
            let row = row_heights[col];

            let own_count = grid.slot_count(row, col, own);
            if own_count == LINE_NEIGHBOURS {
                winning_move = Some(column);
                break;
            }

            if own_count > best_count && self.opponent_count_above(grid, row, col) <= own_count {
                best_move = Some(column);
                best_count = own_count;
            }

            if blocking_move.is_none() && grid.slot_count(row, col, opponent) == LINE_NEIGHBOURS {
                blocking_move = Some(column);
            }
        }

        Ok(winning_move
            .or(blocking_move)
            .or(best_move)
            .unwrap_or(candidates[0]))
    }

    /// Opponent's line count at the slot our piece would open up.
    fn opponent_count_above(&self, grid: &Grid, row: usize, col: usize) -> usize {
        if row + 1 < self.rows {
            grid.slot_count(row + 1, col, self.opponent.to_cell())
        } else {
            0
        }
    }

    fn check_view(
        &self,
        grid: &Grid,
        legal_moves: &[usize],
        row_heights: &[usize],
    ) -> Result<(), AgentError> {
        let expected = (self.rows, self.cols);
        if (grid.rows(), grid.cols()) != expected {
            return Err(AgentError::DimensionMismatch {
                expected,
                found: (grid.rows(), grid.cols()),
            });
        }
        if row_heights.len() != self.cols {
            return Err(AgentError::HeightsMismatch {
                expected: self.cols,
                found: row_heights.len(),
            });
        }
        if legal_moves.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        for &column in legal_moves {
            if column < 1 || column > self.cols || row_heights[column - 1] >= self.rows {
                return Err(AgentError::IllegalCandidate { column });
            }
        }
        Ok(())
    }
}

/// Legal columns ordered by distance from the board's horizontal midpoint.
/// Equally distant columns keep their relative order.
fn center_first(legal_moves: &[usize], cols: usize) -> Vec<usize> {
    let mut ordered = legal_moves.to_vec();
    // |c - (cols + 1) / 2| scaled by two to stay in integers
    ordered.sort_by_key(|&column| (2 * column).abs_diff(cols + 1));
    ordered
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        self.choose_move(state.grid(), state.legal_moves(), state.row_heights())
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
