use std::io::{self, Write};
use std::time::Duration;

use spawnpat_core::simulation::{FiredPhase, PlaybackState};
use spawnpat_core::state::{AppState, Pattern};

/// Time allowed after the last phase for particles to land.
pub const SETTLE_SECS: f64 = 60.0;

pub struct RunOptions {
    pub duration: f64,
    pub frame_rate: u32,
    pub json: bool,
    pub realtime: bool,
}

#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub phases_fired: usize,
    pub particles_launched: usize,
    pub emitters_skipped: usize,
    pub elapsed: f64,
}

/// Run length when none is given: the loaded pattern's schedule plus
/// [`SETTLE_SECS`].
pub fn default_duration(state: &AppState) -> f64 {
    state
        .simulation
        .pattern()
        .map_or(0.0, Pattern::total_duration)
        + SETTLE_SECS
}

/// Step the simulation on a fixed clock until playback is idle and every
/// particle has landed, or until `duration` runs out.
pub fn run<W: Write>(state: &mut AppState, opts: &RunOptions, out: &mut W) -> io::Result<RunSummary> {
    let fps = f64::from(opts.frame_rate.max(1));
    let last_frame = (opts.duration * fps).ceil() as u64;
    let mut summary = RunSummary::default();

    for i in 0..=last_frame {
        let now = i as f64 / fps;
        summary.elapsed = now;

        if let Some(fired) = state.tick(now) {
            summary.phases_fired += 1;
            summary.particles_launched += fired.spawned.len();
            summary.emitters_skipped += fired.skipped.len();
            write_phase(out, &fired, opts.json)?;
        }

        if state.simulation.state() == PlaybackState::Idle && state.simulation.particles().is_empty() {
            break;
        }
        if opts.realtime {
            std::thread::sleep(Duration::from_secs_f64(1.0 / fps));
        }
    }

    log::info!(
        "run finished at t={:.3}: {} phases, {} particles",
        summary.elapsed,
        summary.phases_fired,
        summary.particles_launched
    );
    Ok(summary)
}

fn write_phase<W: Write>(out: &mut W, fired: &FiredPhase, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(fired).map_err(io::Error::from)?;
        return writeln!(out, "{}", line);
    }

    write!(out, "t={:.3} emit {:?}", fired.time, fired.spawned)?;
    if !fired.skipped.is_empty() {
        write!(out, " missing {:?}", fired.skipped)?;
    }
    if fired.remaining > 0 {
        write!(out, " next t={:.3} ({} left)", fired.next_phase_time, fired.remaining)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(json: bool) -> RunOptions {
        RunOptions {
            duration: 30.0,
            frame_rate: 60,
            json,
            realtime: false,
        }
    }

    fn playing(text: &str) -> AppState {
        let mut state = AppState::new();
        let pattern = Pattern::parse(text);
        state.simulation.set_emitter_count(pattern.count_emitters());
        state.simulation.play(pattern);
        state
    }

    #[test]
    fn prints_each_phase() {
        let mut state = playing("0.5:0:2|0.5:1");
        let mut out = Vec::new();
        let summary = run(&mut state, &options(false), &mut out).unwrap();

        assert_eq!(summary.phases_fired, 2);
        assert_eq!(summary.particles_launched, 3);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "t=0.000 emit [0, 2] next t=0.500 (1 left)");
        assert!(lines[1].ends_with("emit [1]"));
    }

    #[test]
    fn stops_once_particles_land() {
        let mut state = playing("0.1:0");
        let mut out = Vec::new();
        let summary = run(&mut state, &options(false), &mut out).unwrap();
        // Launched at y=130 toward a floor at 0, so it lands well inside the cap.
        assert!(summary.elapsed < 30.0);
        assert!(state.simulation.particles().is_empty());
    }

    #[test]
    fn duration_caps_the_run() {
        let mut state = playing("5:0|5:1");
        let mut out = Vec::new();
        let opts = RunOptions {
            duration: 1.0,
            ..options(false)
        };
        let summary = run(&mut state, &opts, &mut out).unwrap();
        assert_eq!(summary.phases_fired, 1);
        assert!(summary.elapsed <= 1.0 + 1e-9);
    }

    #[test]
    fn default_duration_covers_the_schedule() {
        let state = playing("2:0|3:1|0.5");
        assert!((default_duration(&state) - (5.5 + SETTLE_SECS)).abs() < 1e-9);
        assert!((default_duration(&AppState::new()) - SETTLE_SECS).abs() < 1e-9);
    }

    #[test]
    fn json_lines() {
        let mut state = playing("0.2:1");
        let mut out = Vec::new();
        run(&mut state, &options(true), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["spawned"], serde_json::json!([1]));
        assert_eq!(value["remaining"], serde_json::json!(0));
    }
}
