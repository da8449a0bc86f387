use std::path::Path;

use log::warn;

use crate::ai::AgentKind;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};
use crate::simulation::SimulationConfig;

/// Board geometry shared by the engine and the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

/// Which agent plays each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_one: AgentKind,
    pub player_two: AgentKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player_one: AgentKind::Heuristic,
            player_two: AgentKind::Random,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.simulation.num_games == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_games must be > 0".into(),
            ));
        }
        if self.simulation.log_interval == 0 {
            return Err(ConfigError::Validation(
                "simulation.log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!((config.board.rows, config.board.cols), (6, 7));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[simulation]
num_games = 1000
seed = 7
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.num_games, 1000);
        assert_eq!(config.simulation.seed, Some(7));
        // Other fields should be defaults
        assert_eq!(config.simulation.log_interval, 10_000);
        assert!(!config.simulation.parallel);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board, default.board);
        assert_eq!(config.simulation.num_games, default.simulation.num_games);
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn test_players_parse() {
        let toml_str = r#"
[players]
player_one = "random"
player_two = "heuristic"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.player_one, AgentKind::Random);
        assert_eq!(config.players.player_two, AgentKind::Heuristic);
    }

    #[test]
    fn test_unknown_player_kind_is_rejected() {
        let toml_str = r#"
[players]
player_one = "minimax"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.simulation.num_games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.simulation.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_board() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.simulation.num_games, 300_000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 5

[simulation]
num_games = 500
parallel = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.simulation.num_games, 500);
        assert!(config.simulation.parallel);
        assert_eq!(config.board.rows, 5);
        // Others are defaults
        assert_eq!(config.board.cols, 7);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[simulation]\nnum_games = 0\n").unwrap();

        match AppConfig::load(&path) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("num_games")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.players, PlayersConfig::default());
    }
}
