//! Dispatch abstraction between the shell and the state engine.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the state engine.
///
/// The shell only ever talks to the core through this trait, so a headless
/// driver and an interactive front end can share the same dispatch path.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
