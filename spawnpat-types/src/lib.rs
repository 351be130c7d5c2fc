//! # spawnpat-types
//!
//! Shared type definitions for spawnpat.
//! This crate holds the value types used by both spawnpat-core and the shell:
//! phases and patterns (with their text format), the editor grid, settings,
//! and the action/result types that flow through dispatch.

pub mod action;
mod dispatch;
pub mod pattern;
pub mod reduce;
pub mod state;

pub use action::*;
pub use dispatch::Dispatcher;
pub use pattern::{ParseReport, ParseSkip, Pattern, Phase};

// Re-export all state types at crate root for convenience
pub use state::*;

/// A point or vector in scene units. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
