//! Input producers: keyboard events and pose classifier frames

pub mod handler;
pub mod pose;

pub use handler::{InputHandler, KeyAction};
pub use pose::{PoseInterpreter, Prediction};

use clap::ValueEnum;

/// Which producers may steer the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputMode {
    /// Arrow keys / WASD only
    Keyboard,
    /// Pose classifier only
    Pose,
    /// Keyboard and pose classifier
    #[default]
    Both,
}

impl InputMode {
    pub fn accepts_keyboard(&self) -> bool {
        matches!(self, InputMode::Keyboard | InputMode::Both)
    }

    pub fn accepts_pose(&self) -> bool {
        matches!(self, InputMode::Pose | InputMode::Both)
    }
}
