//! job-form: a terminal job application form with client-side validation.

pub mod application;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod report;
pub mod tui;
pub mod types;
