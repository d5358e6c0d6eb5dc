use super::arbiter::DirectionArbiter;
use super::error::GameOverCause;
use super::grid::Cell;
use super::snake::Snake;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Created, not started yet
    Idle,
    Running,
    Over(GameOverCause),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// Complete game state
///
/// Writers, one per field:
/// - `snake`, `food`, `score`, `status`, `ticks`: the game engine (tick and restart)
/// - `arbiter`: input producers through `DirectionArbiter::request`, the engine
///   through `sample` and `reset`
///
/// The renderer only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub status: GameStatus,
    pub arbiter: DirectionArbiter,
    /// Ticks elapsed in this round
    pub ticks: u32,
}

impl GameState {
    /// A fresh, idle round
    pub fn new(snake: Snake, food: Cell) -> Self {
        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Idle,
            arbiter: DirectionArbiter::new(),
            ticks: 0,
        }
    }

    /// Score as shown to the player: at least two digits
    pub fn score_display(&self) -> String {
        format!("{:02}", self.score)
    }
}
