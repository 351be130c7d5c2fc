// Re-export types that live in spawnpat-types
pub use spawnpat_types::{
    Clipboard, EditorGrid, EditorSettings, Pattern, Phase, SimulationSettings,
};

use crate::config::Config;
use crate::simulation::{FiredPhase, Simulation};

/// Top-level application state, owned by the shell and passed to dispatch.
#[derive(Debug, Clone)]
pub struct AppState {
    pub editor: EditorGrid,
    pub simulation: Simulation,
    pub clipboard: Clipboard,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_defaults(EditorSettings::default(), SimulationSettings::default())
    }

    pub fn new_with_defaults(editor: EditorSettings, simulation: SimulationSettings) -> Self {
        Self {
            editor: EditorGrid::from_settings(&editor),
            simulation: Simulation::new(simulation),
            clipboard: Clipboard::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new_with_defaults(config.editor_defaults(), config.simulation_defaults())
    }

    /// Drive the simulation one frame. `current_time` is in seconds.
    pub fn tick(&mut self, current_time: f64) -> Option<FiredPhase> {
        self.simulation.update(current_time)
    }
}
