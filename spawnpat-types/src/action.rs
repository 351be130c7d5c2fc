//! Action types for the dispatch system.
//!
//! Actions represent shell intents (a checkbox click, a button press, a
//! pasted string) that flow through dispatch into spawnpat-core.

use serde::{Deserialize, Serialize};

use crate::Pattern;

// ============================================================================
// Domain-specific action enums
// ============================================================================

/// Editor grid actions. Handled by the pure reducers in [`crate::reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    /// Rebuilds the grid (clears every cell) when the count changes.
    SetEmitterCount(usize),
    /// Rebuilds the grid (clears every cell) when the count changes.
    SetPhaseCount(usize),
    SetTimeInterval(f64),
    SetCell { x: usize, y: usize, checked: bool },
    ToggleCell { x: usize, y: usize },
    ResetAll,
}

/// Playback engine actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationAction {
    /// Recreates every emitter and clears in-flight particles when the count changes.
    SetEmitterCount(usize),
    SetGravity(f64),
    /// Clear particles, then play the editor's current pattern.
    Play,
    /// Play the given pattern as-is.
    PlayPattern(Pattern),
    TogglePause,
    ClearParticles,
    ClearAll,
}

/// Copy/paste of pattern text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClipboardAction {
    /// Serialize the editor's pattern.
    Copy,
    /// Parse text, load it into the editor and start playing it.
    Paste(String),
}

/// Top-level action dispatched by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Editor(EditorAction),
    Simulation(SimulationAction),
    Clipboard(ClipboardAction),
}

// ============================================================================
// StatusEvent and DispatchResult
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// A message for the shell to show the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub level: StatusLevel,
    pub message: String,
}

/// Editor fields the shell should refresh after a paste (its text boxes for
/// emitters, phases and interval).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorFields {
    pub emitters: usize,
    pub phases: usize,
    pub time_interval: f64,
}

/// Result of dispatching an action: side effects for the shell to process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchResult {
    pub quit: bool,
    pub status: Vec<StatusEvent>,
    /// Text to put on the system clipboard.
    pub clipboard: Option<String>,
    /// Set when the editor was replaced wholesale.
    pub editor_fields: Option<EditorFields>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    pub fn with_status(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            status: vec![StatusEvent {
                level,
                message: message.into(),
            }],
            ..Self::default()
        }
    }

    pub fn push_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status.push(StatusEvent {
            level,
            message: message.into(),
        });
    }
}
