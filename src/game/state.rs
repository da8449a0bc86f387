use log::{debug, trace};

use super::{Direction, Grid, Player, COLS, ROWS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won(Player, Direction),
    Stalemate,
}

impl GameOutcome {
    pub fn is_complete(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn victor(self) -> Option<Player> {
        match self {
            GameOutcome::Won(player, _) => Some(player),
            _ => None,
        }
    }
}

/// One game of Connect Four, mutated in place by [`add_piece`](Self::add_piece).
///
/// Once the outcome leaves [`GameOutcome::InProgress`] every further move is
/// rejected and the state no longer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    row_heights: Vec<usize>,
    // 1-based columns that are not full, ascending
    legal_moves: Vec<usize>,
    move_count: usize,
    player_one_moves: Vec<usize>,
    player_two_moves: Vec<usize>,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state on the standard 6x7 board
    pub fn initial() -> Self {
        Self::with_dimensions(ROWS, COLS)
    }

    /// Create an empty game on a `rows` x `cols` board.
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        let turns_each = (rows * cols).div_ceil(2);
        GameState {
            grid: Grid::with_dimensions(rows, cols),
            row_heights: vec![0; cols],
            legal_moves: (1..=cols).collect(),
            move_count: 0,
            player_one_moves: Vec::with_capacity(turns_each),
            player_two_moves: Vec::with_capacity(turns_each),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Occupied cells per column, which is also the row the next piece in
    /// that column lands on.
    pub fn row_heights(&self) -> &[usize] {
        &self.row_heights
    }

    /// 1-based columns that still have room, in ascending order.
    pub fn legal_moves(&self) -> &[usize] {
        &self.legal_moves
    }

    /// Total pieces placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns played by `player`, in the order they were played.
    pub fn history(&self, player: Player) -> &[usize] {
        match player {
            Player::One => &self.player_one_moves,
            Player::Two => &self.player_two_moves,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_complete()
    }

    pub fn victor(&self) -> Option<Player> {
        self.outcome.victor()
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Player {
        Player::for_move(self.move_count)
    }

    /// Drop the current player's piece into 1-based `column` and update the
    /// outcome. On error nothing is changed.
    pub fn add_piece(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_complete() {
            return Err(MoveError::GameAlreadyComplete);
        }
        let cols = self.cols();
        if column < 1 || column > cols {
            return Err(MoveError::InvalidColumn { column, cols });
        }

        let col = column - 1;
        let row = self.row_heights[col];
        if row == self.rows() {
            return Err(MoveError::ColumnFull { column });
        }

        let player = self.current_player();
        let cell = player.to_cell();
        self.grid.set(row, col, cell);
        match player {
            Player::One => self.player_one_moves.push(column),
            Player::Two => self.player_two_moves.push(column),
        }
        self.move_count += 1;
        self.row_heights[col] += 1;
        if self.row_heights[col] == self.rows() {
            if let Ok(pos) = self.legal_moves.binary_search(&column) {
                self.legal_moves.remove(pos);
            }
        }

        trace!(
            "Move: {}, {} @ column {}, row {}",
            self.move_count,
            player.name(),
            column,
            row + 1
        );
        trace!("\n{}", self.grid);

        if let Some(direction) = self.grid.winning_direction(row, col, cell) {
            self.outcome = GameOutcome::Won(player, direction);
            debug!(
                "{} wins, {} with final move at column {}, row {} (Move: {})",
                player.name(),
                direction,
                column,
                row + 1,
                self.move_count
            );
        } else if self.move_count == self.rows() * self.cols() {
            self.outcome = GameOutcome::Stalemate;
            debug!("Game ends in a Stalemate (Move: {})", self.move_count);
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
