use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ConfigError};
use crate::grid::{Grid, MAX_BOARD_SPAN_PX, Position};

/// Default board width in pixels.
pub const DEFAULT_BOARD_WIDTH_PX: u32 = 1000;

/// Default board height in pixels.
pub const DEFAULT_BOARD_HEIGHT_PX: u32 = 800;

/// Default cell edge in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Segments in a fresh snake, all stacked on the start cell.
pub const DEFAULT_INITIAL_LENGTH: usize = 2;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Interval change applied on every food eaten.
pub const DEFAULT_TICK_INTERVAL_STEP_MS: u64 = 10;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Start cell of the snake, in cells from the top-left corner.
pub const SNAKE_START_CELL: (u32, u32) = (1, 1);

/// Start cell of the food, in cells from the top-left corner.
pub const FOOD_START_CELL: (u32, u32) = (3, 3);

/// Constants the controller hands to the game state at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_width_px: u32,
    pub board_height_px: u32,
    pub cell_size: u32,
    pub initial_length: usize,
    pub initial_tick_interval_ms: u64,
    pub tick_interval_step_ms: u64,
    pub min_tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width_px: DEFAULT_BOARD_WIDTH_PX,
            board_height_px: DEFAULT_BOARD_HEIGHT_PX,
            cell_size: DEFAULT_CELL_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tick_interval_step_ms: DEFAULT_TICK_INTERVAL_STEP_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Checks the values the game core relies on.
    ///
    /// The board must hold the fixed start cells of both the snake and the
    /// food.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.board_width_px > MAX_BOARD_SPAN_PX || self.board_height_px > MAX_BOARD_SPAN_PX {
            return Err(ConfigError::BoardTooLarge {
                width_px: self.board_width_px,
                height_px: self.board_height_px,
                max_px: MAX_BOARD_SPAN_PX,
            });
        }

        let min_cells = SNAKE_START_CELL.0.max(FOOD_START_CELL.0) + 1;
        let min_rows = SNAKE_START_CELL.1.max(FOOD_START_CELL.1) + 1;
        if self.board_width_px / self.cell_size < min_cells
            || self.board_height_px / self.cell_size < min_rows
        {
            return Err(ConfigError::BoardTooSmall {
                width_px: self.board_width_px,
                height_px: self.board_height_px,
                cell_size: self.cell_size,
            });
        }

        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        if self.initial_tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.min_tick_interval_ms > self.initial_tick_interval_ms {
            return Err(ConfigError::MinIntervalAboveInitial {
                min_ms: self.min_tick_interval_ms,
                initial_ms: self.initial_tick_interval_ms,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::from_pixels(self.board_width_px, self.board_height_px, self.cell_size)
    }

    #[must_use]
    pub fn start_position(&self) -> Position {
        self.grid().position_of(SNAKE_START_CELL.0, SNAKE_START_CELL.1)
    }

    #[must_use]
    pub fn food_start_position(&self) -> Position {
        self.grid().position_of(FOOD_START_CELL.0, FOOD_START_CELL.1)
    }
}

/// Loads a JSON game configuration. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<GameConfig, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str::<GameConfig>(&raw).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::{AppError, ConfigError};
    use crate::grid::Position;

    use super::{GameConfig, load_config};

    #[test]
    fn defaults_describe_the_classic_board() {
        let config = GameConfig::default();
        let grid = config.grid();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!((grid.width(), grid.height()), (25, 20));
        assert_eq!(config.start_position(), Position::new(40, 40));
        assert_eq!(config.food_start_position(), Position::new(120, 120));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn board_must_hold_start_cells() {
        let config = GameConfig {
            board_width_px: 120,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn board_beyond_coordinate_range_is_rejected() {
        let config = GameConfig {
            board_height_px: u32::MAX,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooLarge {
                width_px: 1000,
                height_px: u32::MAX,
                max_px: 2_147_483_647,
            })
        );
    }

    #[test]
    fn largest_representable_board_is_accepted() {
        let config = GameConfig {
            board_width_px: 2_147_483_647,
            cell_size: 1,
            ..GameConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.grid().width_px(), 2_147_483_647);
    }

    #[test]
    fn min_interval_cannot_exceed_initial() {
        let config = GameConfig {
            initial_tick_interval_ms: 50,
            min_tick_interval_ms: 60,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::MinIntervalAboveInitial {
                min_ms: 60,
                initial_ms: 50
            })
        );
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "cell_size": 20, "tick_interval_step_ms": 5 }"#);

        let config = load_config(&path).expect("partial config should load");

        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_interval_step_ms, 5);
        assert_eq!(config.board_width_px, 1000);
        cleanup_test_path(&path);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let path = unique_test_path("unknown");
        write_test_file(&path, r#"{ "cell_sise": 20 }"#);

        assert!(matches!(
            load_config(&path),
            Err(AppError::ConfigParse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let path = unique_test_path("missing");

        assert!(matches!(
            load_config(&path),
            Err(AppError::ConfigRead { .. })
        ));
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join(format!("grid-snake-config-{label}-{nanos}"))
            .join("config.json")
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
