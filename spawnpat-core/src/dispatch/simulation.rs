use crate::action::{DispatchResult, SimulationAction, StatusLevel};
use crate::state::AppState;

pub(super) fn dispatch_simulation(action: &SimulationAction, state: &mut AppState) -> DispatchResult {
    match action {
        SimulationAction::SetEmitterCount(n) => {
            state.simulation.set_emitter_count(*n);
            DispatchResult::none()
        }
        SimulationAction::SetGravity(g) => {
            if state.simulation.set_gravity(*g) {
                DispatchResult::none()
            } else {
                DispatchResult::with_status(
                    StatusLevel::Warning,
                    format!("Gravity must be a positive number, got {}", g),
                )
            }
        }
        SimulationAction::Play => {
            state.simulation.clear_particles();
            state.simulation.play(state.editor.to_pattern());
            DispatchResult::none()
        }
        SimulationAction::PlayPattern(pattern) => {
            state.simulation.play(pattern.clone());
            DispatchResult::none()
        }
        SimulationAction::TogglePause => {
            let paused = state.simulation.toggle_pause();
            DispatchResult::with_status(
                StatusLevel::Info,
                if paused { "Paused" } else { "Resumed" },
            )
        }
        SimulationAction::ClearParticles => {
            state.simulation.clear_particles();
            DispatchResult::none()
        }
        SimulationAction::ClearAll => {
            state.simulation.clear_all();
            DispatchResult::none()
        }
    }
}
