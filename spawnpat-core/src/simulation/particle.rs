//! Emitter slots, particles, and the ballistic motion between them.

use serde::Serialize;
use spawnpat_types::Vec2;

/// A fixed spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emitter {
    pub index: usize,
    pub position: Vec2,
}

/// A decorative particle. Particles never collide with anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    /// Index of the emitter that launched it.
    pub emitter: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    /// A particle at the emitter, moving straight up at `speed`.
    pub fn launch(emitter: &Emitter, speed: f64) -> Self {
        Self {
            emitter: emitter.index,
            position: emitter.position,
            velocity: Vec2::new(0.0, speed),
        }
    }

    /// Advance `dt` seconds under constant downward `gravity`.
    ///
    /// Uses the closed-form ballistic update, so the path does not depend on
    /// how the time is sliced into frames.
    pub fn step(&mut self, dt: f64, gravity: f64) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt - 0.5 * gravity * dt * dt;
        self.velocity.y -= gravity * dt;
    }
}

/// Launch speed that makes a particle peak `apex_height` above its start
/// under `gravity`: `sqrt(2 * g * h)`.
pub fn launch_speed(gravity: f64, apex_height: f64) -> f64 {
    (2.0 * gravity * apex_height).max(0.0).sqrt()
}

/// Lay out `count` emitters in a row, `spacing` apart and centred on
/// `center_x`, at height `y_offset`.
pub fn layout_emitters(count: usize, spacing: f64, y_offset: f64, center_x: f64) -> Vec<Emitter> {
    let x_offset = center_x - spacing * count.saturating_sub(1) as f64 / 2.0;
    (0..count)
        .map(|index| Emitter {
            index,
            position: Vec2::new(x_offset + index as f64 * spacing, y_offset),
        })
        .collect()
}
