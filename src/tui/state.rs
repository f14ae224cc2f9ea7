//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (focus, skill
//! cursor). Form values and errors live in the store owned by [`App`] and
//! change only through its operations.

use crate::application::{Field, JobApplication};
use crate::form::FormStore;

/// Message shown when a submission passes validation.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully";

/// The job application store as driven by the TUI.
pub type JobForm = FormStore<JobApplication>;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries focus state.
    pub screen: Screen,

    /// Form values and errors.
    pub form: JobForm,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Filling in the form.
    Editing {
        /// Focused field; always a visible one.
        focus: Field,
        /// Highlighted checkbox when the skills field has focus.
        skill_cursor: usize,
    },

    /// Blocking acknowledgment. Nothing else reacts until it is dismissed.
    Notice {
        message: String,
        /// Field to return focus to.
        focus: Field,
    },
}

/// Default screen is the form with the first field focused.
impl Default for Screen {
    fn default() -> Self {
        Screen::editing(Field::FullName)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the next visible field.
    NextField,
    /// Focus the previous visible field.
    PrevField,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character / digit of the focused field.
    DeleteChar,
    /// Previous option, lower number, or skill cursor left.
    Left,
    /// Next option, higher number, or skill cursor right.
    Right,
    /// Toggle the skill under the cursor (a space in text fields).
    Toggle,
    /// Validate the form (or acknowledge a notice).
    Submit,
    /// Leave the form (or dismiss a notice).
    Back,
    /// Quit from anywhere.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App editing the given initial values.
    pub fn new(initial: JobApplication) -> Self {
        App {
            screen: Screen::default(),
            form: FormStore::new(initial),
            should_quit: false,
        }
    }
}

impl Screen {
    /// Editing screen focused on `focus`, skill cursor at the start.
    pub fn editing(focus: Field) -> Self {
        Screen::Editing {
            focus,
            skill_cursor: 0,
        }
    }

    /// Notice confirming a successful submission.
    pub fn submitted(focus: Field) -> Self {
        Screen::Notice {
            message: SUBMITTED_MESSAGE.to_string(),
            focus,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
