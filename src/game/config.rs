use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;
use super::grid::{Cell, Grid};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one cell, in board units
    pub cell_size: i32,
    /// Side length of the square board, in board units
    pub grid_extent: i32,
    /// Period of the game tick, in milliseconds
    pub tick_ms: u64,
    /// Where the single-cell snake starts every round
    pub start_cell: Cell,
    /// Points awarded per food eaten
    pub score_per_food: u32,
    /// A pose prediction must exceed this probability to steer the snake
    pub confidence_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            grid_extent: 500,
            tick_ms: 500,
            start_cell: Cell::new(150, 150),
            score_per_food: 1,
            confidence_threshold: 0.85,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a small grid for testing: 5x5 cells of size 1
    pub fn small() -> Self {
        Self {
            cell_size: 1,
            grid_extent: 5,
            start_cell: Cell::new(2, 2),
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.grid_extent)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if self.grid_extent <= 0 {
            return Err(ConfigError::NonPositiveExtent(self.grid_extent));
        }
        if self.grid_extent % self.cell_size != 0 {
            return Err(ConfigError::MisalignedExtent {
                extent: self.grid_extent,
                cell_size: self.cell_size,
            });
        }

        let grid = self.grid();
        if grid.capacity() < 2 {
            return Err(ConfigError::GridTooSmall(grid.capacity()));
        }
        if !grid.is_in_bounds(self.start_cell) || !grid.is_aligned(self.start_cell) {
            return Err(ConfigError::InvalidStartCell {
                x: self.start_cell.x,
                y: self.start_cell.y,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.confidence_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 50);
        assert_eq!(config.grid_extent, 500);
        assert_eq!(config.tick_period(), Duration::from_millis(500));
        assert_eq!(config.start_cell, Cell::new(150, 150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_config_is_valid() {
        assert!(GameConfig::small().validate().is_ok());
        assert_eq!(GameConfig::small().grid().capacity(), 25);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "tick_ms": 250 }"#).unwrap();
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.cell_size, 50);
        assert_eq!(config.confidence_threshold, 0.85);
    }

    #[test]
    fn test_rejects_misaligned_extent() {
        let config = GameConfig {
            grid_extent: 510,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MisalignedExtent {
                extent: 510,
                cell_size: 50
            })
        );
    }

    #[test]
    fn test_rejects_bad_start_cell() {
        let outside = GameConfig {
            start_cell: Cell::new(500, 0),
            ..Default::default()
        };
        assert!(matches!(
            outside.validate(),
            Err(ConfigError::InvalidStartCell { .. })
        ));

        let unaligned = GameConfig {
            start_cell: Cell::new(155, 150),
            ..Default::default()
        };
        assert!(matches!(
            unaligned.validate(),
            Err(ConfigError::InvalidStartCell { .. })
        ));
    }

    #[test]
    fn test_rejects_single_cell_grid() {
        let config = GameConfig {
            cell_size: 50,
            grid_extent: 50,
            start_cell: Cell::new(0, 0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::GridTooSmall(1)));
    }

    #[test]
    fn test_rejects_threshold_and_tick() {
        let threshold = GameConfig {
            confidence_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(
            threshold.validate(),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );

        let tick = GameConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert_eq!(tick.validate(), Err(ConfigError::ZeroTickPeriod));
    }
}
