use thiserror::Error;

/// Errors raised by the game core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Every cell of the board is covered by the snake
    #[error("no free cell left for food ({occupied} of {capacity} cells occupied)")]
    GridFull { occupied: usize, capacity: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected `GameConfig` values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),

    #[error("grid extent must be positive, got {0}")]
    NonPositiveExtent(i32),

    #[error("grid extent {extent} is not a multiple of cell size {cell_size}")]
    MisalignedExtent { extent: i32, cell_size: i32 },

    #[error("grid must hold at least 2 cells, got {0}")]
    GridTooSmall(usize),

    #[error("start cell ({x}, {y}) is outside the grid or not aligned to a cell")]
    InvalidStartCell { x: i32, y: i32 },

    #[error("tick period must be non-zero")]
    ZeroTickPeriod,

    #[error("confidence threshold must lie in [0, 1], got {0}")]
    ThresholdOutOfRange(f32),
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    OutOfBounds,
    SelfCollision,
    GridFull,
}

impl GameOverCause {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverCause::OutOfBounds => "hit the wall",
            GameOverCause::SelfCollision => "ran into itself",
            GameOverCause::GridFull => "filled the board",
        }
    }
}
