//! Pure state-mutation reducers.
//!
//! Reducers mutate the editor grid only. They do NOT touch the simulation,
//! the clipboard, or build a DispatchResult; spawnpat-core's dispatch handles
//! those and calls into this module for editor actions.

mod editor;

use crate::{Action, EditorGrid};

/// Check whether an action can be applied by a reducer alone.
pub fn is_reducible(action: &Action) -> bool {
    match action {
        Action::None | Action::Editor(_) => true,
        Action::Quit | Action::Simulation(_) | Action::Clipboard(_) => false,
    }
}

/// Apply an action's state mutations to the editor grid.
/// Returns true if the action was handled (state was mutated or no-op).
/// Returns false if the action needs core dispatch.
pub fn reduce_action(action: &Action, editor: &mut EditorGrid) -> bool {
    match action {
        Action::None => true,
        Action::Editor(a) => {
            editor::reduce(a, editor);
            true
        }
        Action::Quit | Action::Simulation(_) | Action::Clipboard(_) => false,
    }
}
