//! Pose Snake - a Snake game steered by keyboard or a pose classifier
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food, direction arbiter, tick engine
//! - Input producers (input module): keyboard mapping and the pose prediction feed
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
