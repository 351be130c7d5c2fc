//! LocalDispatcher: Dispatcher implementation for in-process state.

use spawnpat_types::{Action, DispatchResult, Dispatcher};

use crate::state::AppState;

use super::dispatch_action;

/// Dispatcher that executes actions directly on in-process state.
pub struct LocalDispatcher<'a> {
    pub state: &'a mut AppState,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state }
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        dispatch_action(action, self.state)
    }
}
