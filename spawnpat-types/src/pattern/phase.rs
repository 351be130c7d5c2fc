use serde::{Deserialize, Serialize};

/// One scheduled spawn event.
///
/// When a phase fires, every emitter in `spawn_positions` launches a particle,
/// then playback waits `time_interval` seconds before firing the next phase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phase {
    /// Seconds until the next phase, measured from when this one fires.
    pub time_interval: f64,
    /// Emitter indices, in insertion order. Duplicates are allowed.
    pub spawn_positions: Vec<usize>,
}

impl Phase {
    pub fn new(time_interval: f64) -> Self {
        Self {
            time_interval,
            spawn_positions: Vec::new(),
        }
    }

    pub fn with_spawns(time_interval: f64, spawn_positions: Vec<usize>) -> Self {
        Self {
            time_interval,
            spawn_positions,
        }
    }

    /// Highest emitter index this phase spawns from.
    pub fn max_spawn(&self) -> Option<usize> {
        self.spawn_positions.iter().copied().max()
    }
}
