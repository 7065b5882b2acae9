use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Dimensions, Player, DEFAULT_COLUMNS, DEFAULT_CONNECT_LENGTH, DEFAULT_ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayerNames,
}

/// Grid used for the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    pub connect_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            connect_length: DEFAULT_CONNECT_LENGTH,
        }
    }
}

impl BoardConfig {
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Ok(Dimensions::new(self.columns, self.rows, self.connect_length)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            one: Player::One.name().to_string(),
            two: Player::Two.name().to_string(),
        }
    }
}

impl PlayerNames {
    pub fn get(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.dimensions()?;

        if self.players.one.trim().is_empty() || self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.players.one == self.players.two {
            return Err(ConfigError::Validation(
                "player names must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DimensionsError;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.dimensions().unwrap(), Dimensions::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.columns, 9);
        // Other fields should be defaults
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.connect_length, 4);
        assert_eq!(config.players, PlayerNames::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.players.get(Player::Two), "Player 2");
    }

    #[test]
    fn test_validation_rejects_connect_longer_than_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Dimensions(DimensionsError::ConnectExceedsRows { .. }))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.board.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_player_name() {
        let mut config = AppConfig::default();
        config.players.one = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_player_names() {
        let mut config = AppConfig::default();
        config.players.two = config.players.one.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.columns, 7);
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
columns = 5
rows = 5
connect_length = 3

[players]
one = "Red"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.dimensions().unwrap(), Dimensions::new(5, 5, 3).unwrap());
        assert_eq!(config.players.get(Player::One), "Red");
        // Others are defaults
        assert_eq!(config.players.get(Player::Two), "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\ncolumns = 3\nrows = 6\nconnect_length = 4\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Dimensions(DimensionsError::ConnectExceedsColumns { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("nonexistent_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.board, BoardConfig::default());
    }
}
