//! Playback engine.
//!
//! Replays a [`Pattern`] against a row of emitters. The shell calls
//! [`Simulation::update`] once per frame with the current time in seconds;
//! each call moves in-flight particles and, when the schedule says so, pops
//! the next phase and launches one particle per spawn position.
//!
//! Playback consumes the pattern. To replay, hand it a fresh copy.

mod particle;

pub use particle::{launch_speed, layout_emitters, Emitter, Particle};

use serde::Serialize;
use spawnpat_types::{Pattern, SimulationSettings, MAX_EMITTERS};

/// Where playback stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    /// No pattern loaded, or every phase has fired.
    Idle,
    /// Phases remain. `None` means the next update fires regardless of time.
    Scheduled { next_phase_time: Option<f64> },
    /// Updates are ignored until resumed. Takes precedence over the others.
    Paused,
}

/// What a single update fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiredPhase {
    /// The `current_time` passed to the update that fired.
    pub time: f64,
    /// Emitters that launched a particle.
    pub spawned: Vec<usize>,
    /// Spawn positions with no matching emitter.
    pub skipped: Vec<usize>,
    pub next_phase_time: f64,
    /// Phases left in the pattern after this one.
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    settings: SimulationSettings,
    emitters: Vec<Emitter>,
    particles: Vec<Particle>,
    pattern: Option<Pattern>,
    next_phase_time: f64,
    fire_immediately: bool,
    paused: bool,
    /// Time of the last unpaused update, for particle integration.
    last_update: Option<f64>,
}

impl Simulation {
    /// `settings.emitters` is clamped to [`MAX_EMITTERS`].
    pub fn new(mut settings: SimulationSettings) -> Self {
        settings.emitters = settings.emitters.min(MAX_EMITTERS);
        let mut sim = Self {
            settings,
            emitters: Vec::new(),
            particles: Vec::new(),
            pattern: None,
            next_phase_time: 0.0,
            fire_immediately: false,
            paused: false,
            last_update: None,
        };
        sim.rebuild_emitters();
        sim
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Configured emitter count.
    pub fn emitter_count(&self) -> usize {
        self.settings.emitters
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The pattern being played, minus the phases already fired.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn remaining_phases(&self) -> usize {
        self.pattern.as_ref().map_or(0, Pattern::len)
    }

    pub fn next_phase_time(&self) -> f64 {
        self.next_phase_time
    }

    pub fn state(&self) -> PlaybackState {
        if self.paused {
            return PlaybackState::Paused;
        }
        if self.remaining_phases() == 0 {
            return PlaybackState::Idle;
        }
        PlaybackState::Scheduled {
            next_phase_time: (!self.fire_immediately).then_some(self.next_phase_time),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze or resume updates. The phase schedule is left as it was, so
    /// a phase that came due during the pause fires on the first update
    /// after resuming. Particles pick up where they stopped.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            self.last_update = None;
            log::debug!(target: "simulation", "{}", if paused { "paused" } else { "resumed" });
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    pub fn gravity(&self) -> f64 {
        self.settings.gravity
    }

    /// Set downward acceleration. Applies to particles already in flight as
    /// well as new launches. Zero, negative or non-finite values are ignored:
    /// without gravity nothing would launch or ever land.
    pub fn set_gravity(&mut self, gravity: f64) -> bool {
        if !gravity.is_finite() || gravity <= 0.0 {
            log::warn!(target: "simulation", "ignoring invalid gravity {}", gravity);
            return false;
        }
        self.settings.gravity = gravity;
        true
    }

    /// Launch speed for the current gravity and apex height.
    pub fn launch_speed(&self) -> f64 {
        launch_speed(self.settings.gravity, self.settings.apex_height)
    }

    /// Change the emitter count.
    ///
    /// Destructive: when the count changes, every emitter slot is recreated
    /// and in-flight particles are removed. Clamped to [`MAX_EMITTERS`].
    pub fn set_emitter_count(&mut self, emitters: usize) {
        let emitters = emitters.min(MAX_EMITTERS);
        if emitters == self.settings.emitters && self.emitters.len() == emitters {
            return;
        }
        self.settings.emitters = emitters;
        self.rebuild_emitters();
    }

    /// Re-centre the emitter row for a new scene width. Clears particles.
    pub fn set_scene_width(&mut self, scene_width: f64) {
        if !scene_width.is_finite() || scene_width == self.settings.scene_width {
            return;
        }
        self.settings.scene_width = scene_width;
        self.rebuild_emitters();
    }

    /// Remove every emitter slot and particle.
    pub fn clear_all(&mut self) {
        self.emitters.clear();
        self.particles.clear();
    }

    /// Remove particles only.
    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }

    /// Replace the loaded pattern and fire its first phase on the next
    /// update, whatever the time. Also resumes a paused simulation.
    pub fn play(&mut self, pattern: Pattern) {
        log::info!(
            target: "simulation",
            "playing pattern: {} phases, {} emitters",
            pattern.len(),
            pattern.count_emitters()
        );
        self.pattern = Some(pattern);
        self.fire_immediately = true;
        self.set_paused(false);
    }

    /// Advance to `current_time` (seconds).
    ///
    /// Does nothing while paused. Otherwise moves particles, then fires the
    /// next phase if it is due (`current_time >= next_phase_time`) or if a
    /// pattern was just loaded. At most one phase fires per call.
    pub fn update(&mut self, current_time: f64) -> Option<FiredPhase> {
        if self.paused {
            return None;
        }

        self.advance_particles(current_time);

        let pattern = self.pattern.as_mut()?;
        if pattern.is_empty() {
            return None;
        }
        if current_time < self.next_phase_time && !self.fire_immediately {
            return None;
        }

        self.fire_immediately = false;
        let phase = pattern.pop_next()?;
        let remaining = pattern.len();

        let mut spawned = Vec::with_capacity(phase.spawn_positions.len());
        let mut skipped = Vec::new();
        for &position in &phase.spawn_positions {
            if self.emit(position) {
                spawned.push(position);
            } else {
                skipped.push(position);
            }
        }
        if !skipped.is_empty() {
            log::warn!(
                target: "simulation",
                "no emitter for spawn positions {:?} ({} emitters)",
                skipped,
                self.emitters.len()
            );
        }

        self.next_phase_time = current_time + phase.time_interval;
        log::debug!(
            target: "simulation",
            "t={:.3} fired {:?}, next at {:.3}, {} left",
            current_time,
            spawned,
            self.next_phase_time,
            remaining
        );

        Some(FiredPhase {
            time: current_time,
            spawned,
            skipped,
            next_phase_time: self.next_phase_time,
            remaining,
        })
    }

    fn emit(&mut self, index: usize) -> bool {
        let Some(emitter) = self.emitters.get(index) else {
            return false;
        };
        let particle = Particle::launch(emitter, self.launch_speed());
        self.particles.push(particle);
        true
    }

    fn advance_particles(&mut self, current_time: f64) {
        let dt = self
            .last_update
            .map_or(0.0, |last| (current_time - last).max(0.0));
        self.last_update = Some(current_time);
        if dt == 0.0 || self.particles.is_empty() {
            return;
        }

        let gravity = self.settings.gravity;
        let floor_y = self.settings.floor_y;
        for particle in &mut self.particles {
            particle.step(dt, gravity);
        }
        self.particles.retain(|p| p.position.y >= floor_y);
    }

    fn rebuild_emitters(&mut self) {
        self.clear_all();
        self.emitters = layout_emitters(
            self.settings.emitters,
            self.settings.emitter_spacing,
            self.settings.emitter_y_offset,
            self.settings.scene_width / 2.0,
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}
