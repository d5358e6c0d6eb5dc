//! Terminal rendering of the board and the score/game-over display

pub mod renderer;

pub use renderer::{Renderer, Tile};
