//! Clipboard types for copy/paste of pattern text.

/// Last pattern text copied from the editor (lives in AppState).
///
/// The shell owns the system clipboard; this only remembers what the core
/// last produced so a shell without clipboard access can still paste it back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    pub contents: Option<String>,
}

impl Clipboard {
    pub fn set(&mut self, text: impl Into<String>) {
        self.contents = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}
