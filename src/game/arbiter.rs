use log::debug;

use super::direction::Direction;

/// Where a direction request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Pose,
}

/// Merges direction requests from independent producers into one pending direction
///
/// Producers call [`request`](Self::request) whenever they like; the game loop
/// calls [`sample`](Self::sample) once per tick. The last accepted request
/// before a tick wins. A request that would reverse the snake onto its neck is
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionArbiter {
    pending: Direction,
    current: Direction,
}

impl DirectionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for `candidate` to be used from the next tick on.
    /// Returns whether the request was accepted.
    pub fn request(&mut self, candidate: Direction, source: InputSource) -> bool {
        if candidate.is_opposite(self.current) {
            debug!(
                "{:?} request {} rejected: reverses {}",
                source,
                candidate.as_str(),
                self.current.as_str()
            );
            return false;
        }
        debug!("{:?} requested {}", source, candidate.as_str());
        self.pending = candidate;
        true
    }

    /// Commit the pending direction as this tick's direction and return it
    pub fn sample(&mut self) -> Direction {
        self.current = self.pending;
        self.current
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    /// Back to no movement
    pub fn reset(&mut self) {
        self.pending = Direction::None;
        self.current = Direction::None;
    }
}
