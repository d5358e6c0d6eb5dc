use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, InputSource, TickOutcome};
use crate::input::{InputHandler, InputMode, KeyAction, PoseInterpreter, Prediction};
use crate::render::Renderer;

/// Render at ~30 FPS, independent of the game tick
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// The periodic game tick, which can be cancelled and re-armed
///
/// While cancelled, [`next`](Self::next) never completes, so a cancelled tick
/// cannot fire.
pub struct TickSchedule {
    period: Duration,
    timer: Option<Interval>,
}

impl TickSchedule {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    /// Arm a fresh timer. The first tick fires immediately.
    pub fn start(&mut self) {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Wait for the next tick
    pub async fn next(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

/// Next classifier frame, or pending forever when there is no feed
async fn next_frame(feed: &mut Option<mpsc::Receiver<Vec<Prediction>>>) -> Option<Vec<Prediction>> {
    match feed.as_mut() {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Interactive play: keyboard and/or pose frames steer, a fixed tick moves
pub struct PlayMode {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    interpreter: PoseInterpreter,
    input_mode: InputMode,
    pose_feed: Option<mpsc::Receiver<Vec<Prediction>>>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, input_mode: InputMode, seed: Option<u64>) -> Result<Self> {
        let interpreter = PoseInterpreter::new(config.confidence_threshold);
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        }
        .context("Failed to create game")?;

        Ok(Self {
            engine,
            renderer: Renderer::new(input_mode),
            input_handler: InputHandler::new(input_mode),
            interpreter,
            input_mode,
            pose_feed: None,
            should_quit: false,
        })
    }

    /// Feed classifier frames into the game
    pub fn attach_pose_feed(&mut self, feed: mpsc::Receiver<Vec<Prediction>>) {
        self.pose_feed = Some(feed);
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut pose_feed = self.pose_feed.take();

        let mut schedule = TickSchedule::new(self.engine.config().tick_period());
        if self.engine.start().is_running() {
            schedule.start();
        }

        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut schedule);
                    }
                }

                // Pose classifier frames, on their own cadence
                frame = next_frame(&mut pose_feed) => {
                    match frame {
                        Some(frame) => self.handle_pose_frame(&frame),
                        None => {
                            info!("pose feed closed");
                            pose_feed = None;
                        }
                    }
                }

                // Game logic tick
                _ = schedule.next() => {
                    self.update_game(&mut schedule);
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, schedule: &mut TickSchedule) {
        let Event::Key(key) = event else {
            return;
        };

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.engine
                    .request_direction(direction, InputSource::Keyboard);
            }
            KeyAction::Restart => self.restart(schedule),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn handle_pose_frame(&mut self, frame: &[Prediction]) {
        if !self.input_mode.accepts_pose() {
            return;
        }
        if let Some(direction) = self.interpreter.interpret(frame) {
            self.engine.request_direction(direction, InputSource::Pose);
        }
    }

    fn update_game(&mut self, schedule: &mut TickSchedule) {
        match self.engine.tick() {
            TickOutcome::GameOver { .. } | TickOutcome::NotRunning => schedule.cancel(),
            TickOutcome::Stationary | TickOutcome::Moved { .. } => {}
        }
    }

    fn restart(&mut self, schedule: &mut TickSchedule) {
        schedule.cancel();
        if self.engine.restart().is_running() {
            schedule.start();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
