//! jianji-app
//!
//! The UI-shell state layer. Owns the single assessment record, exposes
//! the whole-substructure replacement commands the rendering layer calls,
//! persists after every mutation, and runs the detached AI formulation
//! task. The rendering layer itself (windows, widgets, printing) sits
//! above this crate.

pub mod commands;
pub mod config;
pub mod formulation;
pub mod logging;
pub mod report;
pub mod state;

pub use state::AppState;
