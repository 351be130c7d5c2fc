pub mod clipboard;
pub mod editor;
pub mod settings;

pub use clipboard::Clipboard;
pub use editor::EditorGrid;
pub use settings::*;
