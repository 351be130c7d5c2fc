use crate::{EditorAction, EditorGrid};

pub(super) fn reduce(action: &EditorAction, editor: &mut EditorGrid) {
    match action {
        EditorAction::SetEmitterCount(n) => editor.set_emitter_count(*n),
        EditorAction::SetPhaseCount(n) => editor.set_phase_count(*n),
        EditorAction::SetTimeInterval(t) => {
            editor.set_time_interval(*t);
        }
        EditorAction::SetCell { x, y, checked } => editor.set_cell(*x, *y, *checked),
        EditorAction::ToggleCell { x, y } => editor.toggle_cell(*x, *y),
        EditorAction::ResetAll => editor.reset_all(),
    }
}
