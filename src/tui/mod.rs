//! TUI module for the interactive form.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: data types (Screen, Action, Transition)
//! - `update`: transitions driving the form store
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
