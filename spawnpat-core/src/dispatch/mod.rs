mod clipboard;
mod local;
mod simulation;

pub use local::LocalDispatcher;

use spawnpat_types::reduce::reduce_action;

use crate::action::{Action, DispatchResult};
use crate::state::AppState;

/// Dispatch an action. Returns a DispatchResult describing side effects for
/// the shell (status messages, clipboard text, refreshed editor fields).
///
/// Editor actions go through the pure reducers in spawnpat-types; simulation
/// and clipboard actions are handled here because they touch the engine.
pub fn dispatch_action(action: &Action, state: &mut AppState) -> DispatchResult {
    match action {
        Action::None => DispatchResult::none(),
        Action::Quit => DispatchResult::with_quit(),
        Action::Editor(a) => {
            log::debug!(target: "dispatch", "editor: {:?}", a);
            reduce_action(action, &mut state.editor);
            DispatchResult::none()
        }
        Action::Simulation(a) => simulation::dispatch_simulation(a, state),
        Action::Clipboard(a) => clipboard::dispatch_clipboard(a, state),
    }
}
