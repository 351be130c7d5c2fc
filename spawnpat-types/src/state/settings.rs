//! Default knobs for the editor and the simulation.
//!
//! spawnpat-core fills these from its TOML config; the values here are the
//! fallbacks when a key is missing.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EMITTERS: usize = 5;
pub const DEFAULT_PHASES: usize = 10;
pub const DEFAULT_TIME_INTERVAL: f64 = 0.1;

/// Upper bound on emitter slots. Spawn indices at or above it are rejected
/// by the parser, and emitter counts are clamped to it.
pub const MAX_EMITTERS: usize = 4096;

pub const DEFAULT_GRAVITY: f64 = 2.0;
pub const DEFAULT_APEX_HEIGHT: f64 = 40.0;
pub const DEFAULT_EMITTER_SPACING: f64 = 50.0;
pub const DEFAULT_EMITTER_Y_OFFSET: f64 = 130.0;
pub const DEFAULT_SCENE_WIDTH: f64 = 600.0;
pub const DEFAULT_FLOOR_Y: f64 = 0.0;

/// Initial dimensions and interval of the editor grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub emitters: usize,
    pub phases: usize,
    pub time_interval: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            emitters: DEFAULT_EMITTERS,
            phases: DEFAULT_PHASES,
            time_interval: DEFAULT_TIME_INTERVAL,
        }
    }
}

/// Scene geometry and physics for the preview simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub emitters: usize,
    /// Downward acceleration, units/s^2.
    pub gravity: f64,
    /// Height above its emitter a particle peaks at.
    pub apex_height: f64,
    /// Horizontal gap between neighbouring emitters.
    pub emitter_spacing: f64,
    /// Height of the emitter row above the scene origin.
    pub emitter_y_offset: f64,
    /// Emitters are centred on `scene_width / 2`.
    pub scene_width: f64,
    /// Particles below this height are removed.
    pub floor_y: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            emitters: DEFAULT_EMITTERS,
            gravity: DEFAULT_GRAVITY,
            apex_height: DEFAULT_APEX_HEIGHT,
            emitter_spacing: DEFAULT_EMITTER_SPACING,
            emitter_y_offset: DEFAULT_EMITTER_Y_OFFSET,
            scene_width: DEFAULT_SCENE_WIDTH,
            floor_y: DEFAULT_FLOOR_Y,
        }
    }
}
