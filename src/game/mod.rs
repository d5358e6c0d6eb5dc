//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Input producers talk to it through the direction arbiter; hosts drive it by
//! calling `GameEngine::tick` on a fixed period.

pub mod arbiter;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use arbiter::{DirectionArbiter, InputSource};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use error::{ConfigError, GameError, GameOverCause};
pub use food::place_food;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GameState, GameStatus};
