//! # spawnpat-core
//!
//! Backend library for spawnpat. Provides the playback engine, application
//! state, action dispatch and configuration, independent of any UI.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spawnpat_core::action::{Action, ClipboardAction};
//! use spawnpat_core::config::Config;
//! use spawnpat_core::dispatch::dispatch_action;
//! use spawnpat_core::state::AppState;
//!
//! // 1. Create state with defaults from config
//! let config = Config::load();
//! let mut state = AppState::from_config(&config);
//!
//! // 2. Dispatch shell intents
//! let result = dispatch_action(
//!     &Action::Clipboard(ClipboardAction::Paste("0.5:0:2|0.5:1".into())),
//!     &mut state,
//! );
//!
//! // 3. Drive playback from the shell's frame loop
//! let fired = state.tick(now_secs);
//! ```
//!
//! ## Module Overview
//!
//! - [`state`]: `AppState` (editor grid, simulation, clipboard)
//! - [`action`]: action enums and `DispatchResult`, re-exported from spawnpat-types
//! - [`dispatch`]: `dispatch_action()`, the single entry point for state mutation
//! - [`simulation`]: the playback engine and particle physics
//! - [`config`]: TOML configuration loading (embedded defaults + user override)

pub mod action;
pub mod config;
pub mod dispatch;
pub mod simulation;
pub mod state;
