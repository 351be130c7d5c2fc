use crate::action::{ClipboardAction, DispatchResult, EditorFields, StatusLevel};
use crate::state::{AppState, Pattern};

pub(super) fn dispatch_clipboard(action: &ClipboardAction, state: &mut AppState) -> DispatchResult {
    match action {
        ClipboardAction::Copy => {
            let text = state.editor.to_pattern().to_string();
            log::debug!(target: "clipboard", "copied {:?}", text);
            state.clipboard.set(text.clone());
            DispatchResult {
                clipboard: Some(text),
                ..DispatchResult::default()
            }
        }
        ClipboardAction::Paste(text) => paste(text, state),
    }
}

fn paste(text: &str, state: &mut AppState) -> DispatchResult {
    let report = Pattern::parse_with_report(text);
    for skip in &report.skipped {
        log::debug!(target: "clipboard", "{}", skip);
    }

    if report.pattern.is_empty() {
        log::info!(target: "clipboard", "paste produced no phases");
        return DispatchResult::with_status(
            StatusLevel::Warning,
            "Could not read a pattern from the clipboard",
        );
    }

    let mut result = DispatchResult::none();
    if !report.is_clean() {
        result.push_status(
            StatusLevel::Info,
            format!("Ignored {} malformed field(s)", report.skipped.len()),
        );
    }
    result.editor_fields = Some(load_pattern(report.pattern, state));
    result
}

/// Point both the simulation and the editor at `pattern` and start playing it.
fn load_pattern(pattern: Pattern, state: &mut AppState) -> EditorFields {
    state
        .simulation
        .set_emitter_count(pattern.count_emitters());
    if !state.editor.load_from(&pattern) {
        log::warn!(
            target: "clipboard",
            "pattern has no usable interval, keeping {}",
            state.editor.time_interval()
        );
    }
    state.simulation.play(pattern);

    EditorFields {
        emitters: state.editor.emitters(),
        phases: state.editor.phases(),
        time_interval: state.editor.time_interval(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PlaybackState;

    #[test]
    fn copy_serializes_editor() {
        let mut state = AppState::new();
        state.editor.resize(3, 4);
        state.editor.set_time_interval(0.5);
        state.editor.set_cell(0, 0, true);
        state.editor.set_cell(3, 0, true);
        state.editor.set_cell(1, 2, true);

        let result = dispatch_clipboard(&ClipboardAction::Copy, &mut state);
        assert_eq!(result.clipboard.as_deref(), Some("0.5:0:3|0.5|0.5:1"));
        assert_eq!(state.clipboard.text(), Some("0.5:0:3|0.5|0.5:1"));
    }

    #[test]
    fn paste_loads_editor_and_plays() {
        let mut state = AppState::new();
        let result = dispatch_clipboard(
            &ClipboardAction::Paste("0.2:0:6|0.2:3".to_string()),
            &mut state,
        );

        assert_eq!(
            result.editor_fields,
            Some(EditorFields {
                emitters: 7,
                phases: 2,
                time_interval: 0.2
            })
        );
        assert!(result.status.is_empty());
        assert!(state.editor.cell(0, 0));
        assert!(state.editor.cell(6, 0));
        assert!(state.editor.cell(3, 1));
        assert_eq!(state.simulation.emitters().len(), 7);
        assert_eq!(
            state.simulation.state(),
            PlaybackState::Scheduled { next_phase_time: None }
        );
        assert_eq!(state.tick(0.0).map(|f| f.spawned), Some(vec![0, 6]));
    }

    #[test]
    fn paste_garbage_changes_nothing() {
        let mut state = AppState::new();
        state.editor.set_cell(1, 1, true);
        let result = dispatch_clipboard(
            &ClipboardAction::Paste("hello world".to_string()),
            &mut state,
        );
        assert_eq!(result.status.len(), 1);
        assert_eq!(result.status[0].level, StatusLevel::Warning);
        assert!(result.editor_fields.is_none());
        assert!(state.editor.cell(1, 1));
        assert_eq!(state.simulation.state(), PlaybackState::Idle);
    }

    #[test]
    fn paste_reports_dropped_fields() {
        let mut state = AppState::new();
        let result = dispatch_clipboard(
            &ClipboardAction::Paste("abc:1|0.5:0:q".to_string()),
            &mut state,
        );
        assert_eq!(result.status[0].message, "Ignored 2 malformed field(s)");
        assert_eq!(result.editor_fields.map(|f| f.phases), Some(1));
    }

    #[test]
    fn paste_huge_index_is_skipped() {
        let mut state = AppState::new();
        let result = dispatch_clipboard(
            &ClipboardAction::Paste("1:4000000000000|0.5:1:18446744073709551615".to_string()),
            &mut state,
        );
        assert_eq!(result.status[0].message, "Ignored 2 malformed field(s)");
        assert_eq!(
            result.editor_fields.map(|f| (f.phases, f.emitters)),
            Some((2, 2))
        );
        assert_eq!(state.simulation.emitters().len(), 2);
        assert_eq!(state.tick(0.0).map(|f| f.spawned), Some(vec![]));
    }

    #[test]
    fn copy_then_paste_round_trips() {
        let mut state = AppState::new();
        state.editor.set_cell(2, 0, true);
        state.editor.set_cell(4, 5, true);
        let before = state.editor.clone();

        let copied = dispatch_clipboard(&ClipboardAction::Copy, &mut state)
            .clipboard
            .unwrap();
        state.editor.reset_all();
        dispatch_clipboard(&ClipboardAction::Paste(copied), &mut state);

        // Columns past the highest checked emitter are not part of the text.
        assert_eq!(state.editor.phases(), before.phases());
        assert_eq!(state.editor.emitters(), 5);
        assert_eq!(state.editor.to_pattern(), before.to_pattern());
    }
}
