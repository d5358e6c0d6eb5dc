use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    arbiter::InputSource,
    config::GameConfig,
    direction::Direction,
    error::{GameError, GameOverCause},
    food::place_food,
    grid::Grid,
    snake::Snake,
    state::{GameState, GameStatus},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The round is not running; nothing happened
    NotRunning,
    /// No direction has been chosen yet; the snake stayed put
    Stationary,
    /// The snake moved one cell
    Moved { ate_food: bool },
    /// The round ended during this tick
    GameOver {
        cause: GameOverCause,
        final_score: u32,
    },
}

/// Drives the round: owns the game state and advances it one tick at a time
///
/// Scheduling is left to the host, which calls [`tick`](Self::tick) once per
/// period while [`status`](Self::status) is running and stops when it is not.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create an idle engine with an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an idle engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid();
        let snake = Snake::new(config.start_cell);
        let food = place_food(&grid, &snake, &mut rng)?;

        Ok(Self {
            config,
            grid,
            rng,
            state: GameState::new(snake, food),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts that need to set up a position (tests, replays)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Forward a direction request from an input producer
    pub fn request_direction(&mut self, direction: Direction, source: InputSource) -> bool {
        self.state.arbiter.request(direction, source)
    }

    /// Leave the idle state. Has no effect once a round has started.
    pub fn start(&mut self) -> GameStatus {
        if self.state.status == GameStatus::Idle {
            self.restart()
        } else {
            self.state.status
        }
    }

    /// Reset snake, direction, score and food, then run a fresh round
    pub fn restart(&mut self) -> GameStatus {
        self.state.snake = Snake::new(self.config.start_cell);
        self.state.arbiter.reset();
        self.state.score = 0;
        self.state.ticks = 0;

        match place_food(&self.grid, &self.state.snake, &mut self.rng) {
            Ok(food) => {
                self.state.food = food;
                self.state.status = GameStatus::Running;
                info!(
                    "round started at ({}, {})",
                    self.config.start_cell.x, self.config.start_cell.y
                );
            }
            Err(err) => {
                warn!("cannot start round: {}", err);
                self.state.status = GameStatus::Over(GameOverCause::GridFull);
            }
        }
        self.state.status
    }

    /// Advance the round by one tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.status.is_running() {
            return TickOutcome::NotRunning;
        }
        self.state.ticks += 1;

        let direction = self.state.arbiter.sample();
        if direction.is_none() {
            return TickOutcome::Stationary;
        }

        let next_head = self
            .state
            .snake
            .compute_next_head(direction, self.grid.cell_size());
        if !self.grid.is_in_bounds(next_head) {
            return self.end_round(GameOverCause::OutOfBounds);
        }

        let ate_food = next_head == self.state.food;
        if ate_food {
            self.state.snake.grow(next_head);
            self.state.score += self.config.score_per_food;
            debug!(
                "ate food at ({}, {}), score {}",
                next_head.x, next_head.y, self.state.score
            );
            match place_food(&self.grid, &self.state.snake, &mut self.rng) {
                Ok(food) => self.state.food = food,
                Err(err) => {
                    warn!("{}", err);
                    return self.end_round(GameOverCause::GridFull);
                }
            }
        } else {
            self.state.snake.advance(next_head);
        }

        if self.state.snake.has_self_collision() {
            return self.end_round(GameOverCause::SelfCollision);
        }

        TickOutcome::Moved { ate_food }
    }

    fn end_round(&mut self, cause: GameOverCause) -> TickOutcome {
        self.state.status = GameStatus::Over(cause);
        info!(
            "game over after {} ticks: {}, final score {}",
            self.state.ticks,
            cause.describe(),
            self.state.score
        );
        TickOutcome::GameOver {
            cause,
            final_score: self.state.score,
        }
    }
}
