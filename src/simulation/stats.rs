use std::fmt;

use crate::game::{Direction, GameOutcome, Player};

use super::game::GameRecord;

/// Wins broken down by the orientation of the winning line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DirectionCounts {
    pub diagonal_up: u64,
    pub horizontal: u64,
    pub diagonal_down: u64,
    pub vertical: u64,
}

impl DirectionCounts {
    pub fn get(&self, direction: Direction) -> u64 {
        match direction {
            Direction::DiagonalUp => self.diagonal_up,
            Direction::Horizontal => self.horizontal,
            Direction::DiagonalDown => self.diagonal_down,
            Direction::Vertical => self.vertical,
        }
    }

    fn increment(&mut self, direction: Direction) {
        let slot = match direction {
            Direction::DiagonalUp => &mut self.diagonal_up,
            Direction::Horizontal => &mut self.horizontal,
            Direction::DiagonalDown => &mut self.diagonal_down,
            Direction::Vertical => &mut self.vertical,
        };
        *slot += 1;
    }

    fn merge(&mut self, other: &DirectionCounts) {
        self.diagonal_up += other.diagonal_up;
        self.horizontal += other.horizontal;
        self.diagonal_down += other.diagonal_down;
        self.vertical += other.vertical;
    }
}

/// Aggregate results over many games.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SimulationStats {
    pub games: u64,
    pub player_one_wins: u64,
    pub player_two_wins: u64,
    pub stalemates: u64,
    pub wins_by_direction: DirectionCounts,
    pub total_moves: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game.
    pub fn record(&mut self, record: &GameRecord) {
        debug_assert!(record.outcome.is_complete(), "recorded an unfinished game");
        self.games += 1;
        self.total_moves += record.move_count as u64;
        match record.outcome {
            GameOutcome::Won(player, direction) => {
                match player {
                    Player::One => self.player_one_wins += 1,
                    Player::Two => self.player_two_wins += 1,
                }
                self.wins_by_direction.increment(direction);
            }
            GameOutcome::Stalemate => self.stalemates += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// Fold another set of results into this one.
    pub fn merge(&mut self, other: &SimulationStats) {
        self.games += other.games;
        self.player_one_wins += other.player_one_wins;
        self.player_two_wins += other.player_two_wins;
        self.stalemates += other.stalemates;
        self.wins_by_direction.merge(&other.wins_by_direction);
        self.total_moves += other.total_moves;
    }

    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    /// Fraction of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f64 {
        self.fraction(self.wins(player))
    }

    pub fn stalemate_rate(&self) -> f64 {
        self.fraction(self.stalemates)
    }

    /// Mean number of pieces placed per game.
    pub fn average_game_length(&self) -> f64 {
        self.fraction(self.total_moves)
    }

    fn fraction(&self, count: u64) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 / self.games as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games: {}", self.games)?;
        writeln!(
            f,
            "Player One Wins: {} ({:.1}%)",
            self.player_one_wins,
            self.win_rate(Player::One) * 100.0
        )?;
        writeln!(
            f,
            "Player Two Wins: {} ({:.1}%)",
            self.player_two_wins,
            self.win_rate(Player::Two) * 100.0
        )?;
        writeln!(
            f,
            "Stalemates: {} ({:.1}%)",
            self.stalemates,
            self.stalemate_rate() * 100.0
        )?;
        let by_direction = Direction::ALL
            .iter()
            .map(|&d| format!("{}: {}", d, self.wins_by_direction.get(d)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Wins by direction: {by_direction}")?;
        write!(f, "Average game length: {:.1}", self.average_game_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: GameOutcome, move_count: usize) -> GameRecord {
        GameRecord {
            outcome,
            move_count,
            player_one_moves: Vec::new(),
            player_two_moves: Vec::new(),
        }
    }

    #[test]
    fn test_record_counts_outcomes() {
        let mut stats = SimulationStats::new();
        for _ in 0..7 {
            stats.record(&record(GameOutcome::Won(Player::One, Direction::Horizontal), 10));
        }
        for _ in 0..2 {
            stats.record(&record(GameOutcome::Won(Player::Two, Direction::Vertical), 12));
        }
        stats.record(&record(GameOutcome::Stalemate, 42));

        assert_eq!(stats.games, 10);
        assert_eq!(stats.wins(Player::One), 7);
        assert_eq!(stats.wins(Player::Two), 2);
        assert_eq!(stats.stalemates, 1);
        assert_eq!(stats.wins_by_direction.get(Direction::Horizontal), 7);
        assert_eq!(stats.wins_by_direction.get(Direction::Vertical), 2);
        assert_eq!(stats.wins_by_direction.get(Direction::DiagonalUp), 0);
        assert!((stats.win_rate(Player::One) - 0.7).abs() < 1e-9);
        assert!((stats.stalemate_rate() - 0.1).abs() < 1e-9);
        assert!((stats.average_game_length() - 13.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats_rates_are_zero() {
        let stats = SimulationStats::new();
        assert_eq!(stats.win_rate(Player::One), 0.0);
        assert_eq!(stats.stalemate_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let records = [
            record(GameOutcome::Won(Player::One, Direction::DiagonalUp), 9),
            record(GameOutcome::Won(Player::Two, Direction::DiagonalDown), 14),
            record(GameOutcome::Stalemate, 42),
            record(GameOutcome::Won(Player::One, Direction::Vertical), 7),
        ];

        let mut whole = SimulationStats::new();
        records.iter().for_each(|r| whole.record(r));

        let mut left = SimulationStats::new();
        let mut right = SimulationStats::new();
        records[..1].iter().for_each(|r| left.record(r));
        records[1..].iter().for_each(|r| right.record(r));
        left.merge(&right);

        assert_eq!(left, whole);
    }

    #[test]
    fn test_display_summary() {
        let mut stats = SimulationStats::new();
        stats.record(&record(GameOutcome::Won(Player::One, Direction::Horizontal), 7));
        stats.record(&record(GameOutcome::Stalemate, 42));
        let text = stats.to_string();
        assert!(text.contains("Player One Wins: 1 (50.0%)"));
        assert!(text.contains("Player Two Wins: 0 (0.0%)"));
        assert!(text.contains("Stalemates: 1 (50.0%)"));
        assert!(text.contains("Horizontal: 1"));
        assert!(text.ends_with("Average game length: 24.5"));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut stats = SimulationStats::new();
        stats.record(&record(GameOutcome::Won(Player::Two, Direction::DiagonalUp), 11));
        let json: serde_json::Value = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["player_two_wins"], 1);
        assert_eq!(json["wins_by_direction"]["diagonal_up"], 1);
        assert_eq!(json["total_moves"], 11);
    }
}
