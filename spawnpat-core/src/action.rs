//! Action types for the dispatch system.
//!
//! All action types live in spawnpat-types; they are re-exported here so
//! shells only need to depend on spawnpat-core.

pub use spawnpat_types::{
    Action, ClipboardAction, DispatchResult, EditorAction, EditorFields, SimulationAction,
    StatusEvent, StatusLevel,
};
