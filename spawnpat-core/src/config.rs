use std::path::{Path, PathBuf};

use serde::Deserialize;

use spawnpat_types::{EditorSettings, SimulationSettings};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

const DEFAULT_FRAME_RATE: u32 = 60;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    editor: EditorConfig,
    #[serde(default)]
    simulation: SimulationConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct EditorConfig {
    emitters: Option<usize>,
    phases: Option<usize>,
    time_interval: Option<f64>,
}

#[derive(Deserialize, Default)]
struct SimulationConfig {
    gravity: Option<f64>,
    apex_height: Option<f64>,
    emitter_spacing: Option<f64>,
    emitter_y_offset: Option<f64>,
    scene_width: Option<f64>,
    floor_y: Option<f64>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    frame_rate: Option<u32>,
}

pub struct Config {
    editor: EditorConfig,
    simulation: SimulationConfig,
    runtime: RuntimeConfig,
}

impl Config {
    /// Embedded defaults, overridden by the user's config file if there is one.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::embedded(),
        }
    }

    /// Embedded defaults, overridden by the file at `path`. A missing or
    /// malformed file is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut base = embedded_file();

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => {
                    merge_editor(&mut base.editor, user.editor);
                    merge_simulation(&mut base.simulation, user.simulation);
                    merge_runtime(&mut base.runtime, user.runtime);
                }
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }

        Self::from_file(base)
    }

    /// Embedded defaults only.
    pub fn embedded() -> Self {
        Self::from_file(embedded_file())
    }

    fn from_file(file: ConfigFile) -> Self {
        Config {
            editor: file.editor,
            simulation: file.simulation,
            runtime: file.runtime,
        }
    }

    pub fn editor_defaults(&self) -> EditorSettings {
        let fallback = EditorSettings::default();
        EditorSettings {
            emitters: self.editor.emitters.unwrap_or(fallback.emitters),
            phases: self.editor.phases.unwrap_or(fallback.phases),
            time_interval: non_negative(self.editor.time_interval)
                .unwrap_or(fallback.time_interval),
        }
    }

    /// Simulation settings. The emitter count follows the editor's so the
    /// grid columns and the emitter row start out matched.
    pub fn simulation_defaults(&self) -> SimulationSettings {
        let fallback = SimulationSettings::default();
        SimulationSettings {
            emitters: self.editor_defaults().emitters,
            gravity: positive(self.simulation.gravity).unwrap_or(fallback.gravity),
            apex_height: non_negative(self.simulation.apex_height)
                .unwrap_or(fallback.apex_height),
            emitter_spacing: non_negative(self.simulation.emitter_spacing)
                .unwrap_or(fallback.emitter_spacing),
            emitter_y_offset: finite(self.simulation.emitter_y_offset)
                .unwrap_or(fallback.emitter_y_offset),
            scene_width: non_negative(self.simulation.scene_width)
                .unwrap_or(fallback.scene_width),
            floor_y: finite(self.simulation.floor_y).unwrap_or(fallback.floor_y),
        }
    }

    /// Ticks per second for the shell's update loop (clamped to 1..=240).
    pub fn frame_rate(&self) -> u32 {
        self.runtime
            .frame_rate
            .unwrap_or(DEFAULT_FRAME_RATE)
            .clamp(1, 240)
    }
}

fn embedded_file() -> ConfigFile {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!(target: "config", "embedded config.toml is invalid: {}", e);
        ConfigFile::default()
    })
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("spawnpat").join("config.toml"))
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v >= 0.0)
}

fn positive(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v > 0.0)
}

fn merge_editor(base: &mut EditorConfig, user: EditorConfig) {
    if user.emitters.is_some() {
        base.emitters = user.emitters;
    }
    if user.phases.is_some() {
        base.phases = user.phases;
    }
    if user.time_interval.is_some() {
        base.time_interval = user.time_interval;
    }
}

fn merge_simulation(base: &mut SimulationConfig, user: SimulationConfig) {
    if user.gravity.is_some() {
        base.gravity = user.gravity;
    }
    if user.apex_height.is_some() {
        base.apex_height = user.apex_height;
    }
    if user.emitter_spacing.is_some() {
        base.emitter_spacing = user.emitter_spacing;
    }
    if user.emitter_y_offset.is_some() {
        base.emitter_y_offset = user.emitter_y_offset;
    }
    if user.scene_width.is_some() {
        base.scene_width = user.scene_width;
    }
    if user.floor_y.is_some() {
        base.floor_y = user.floor_y;
    }
}

fn merge_runtime(base: &mut RuntimeConfig, user: RuntimeConfig) {
    if user.frame_rate.is_some() {
        base.frame_rate = user.frame_rate;
    }
}
