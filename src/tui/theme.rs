//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: success, checked skills
//! - Red: validation errors
//! - Cyan: focus and keybinding hints
//! - Dim: placeholders
//! - Bold: labels and titles

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success — green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Validation error — red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Focused element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Placeholder text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Field label.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Skill checkbox under the cursor.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Checkbox: checked.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Checkbox: unchecked.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);
