//! State transitions: (Screen, Action, store) → Transition.
//!
//! The renderer side of the form contract. Key actions become store
//! mutations; Submit hands the validation rules to the store and turns
//! the settled outcome into the next screen. Fully testable without a
//! terminal.

use log::info;

use crate::application::{Field, SKILLS, cycle_position, validate, visible_fields};
use crate::form::{FormModel, SubmitOutcome};
use crate::types::FieldValue;

use super::state::{Action, JobForm, Screen, Transition};

/// Apply an action to the current screen and form.
pub fn update(screen: Screen, action: &Action, form: &mut JobForm) -> Transition {
    match screen {
        Screen::Editing {
            focus,
            skill_cursor,
        } => update_editing(focus, skill_cursor, action, form),
        Screen::Notice { message, focus } => update_notice(message, focus, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Notice: blocks everything except acknowledgment and quit.
fn update_notice(message: String, focus: Field, action: &Action) -> Transition {
    match action {
        Action::Submit | Action::Back => Transition::Screen(Screen::editing(focus)),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Notice { message, focus }),
    }
}

/// Editing: navigation, field edits, submit.
fn update_editing(
    focus: Field,
    skill_cursor: usize,
    action: &Action,
    form: &mut JobForm,
) -> Transition {
    let stay = |focus, skill_cursor| Transition::Screen(Screen::Editing { focus, skill_cursor });

    match action {
        Action::NextField => Transition::Screen(Screen::editing(step_focus(form, focus, true))),
        Action::PrevField => Transition::Screen(Screen::editing(step_focus(form, focus, false))),
        Action::Input(c) => {
            type_char(form, focus, *c);
            stay(focus, skill_cursor)
        }
        Action::DeleteChar => {
            delete_char(form, focus);
            stay(focus, skill_cursor)
        }
        Action::Left | Action::Right => {
            let forward = *action == Action::Right;
            let skill_cursor = step_option(form, focus, skill_cursor, forward);
            stay(focus, skill_cursor)
        }
        Action::Toggle => {
            if focus == Field::AdditionalSkills {
                if let Some(skill) = SKILLS.get(skill_cursor) {
                    form.toggle_list_membership(Field::AdditionalSkills, skill);
                }
            } else {
                type_char(form, focus, ' ');
            }
            stay(focus, skill_cursor)
        }
        Action::Submit => submit(form, focus, skill_cursor),
        Action::Back | Action::Quit => Transition::Quit,
    }
}

/// Validate and react to the settled outcome in the same step, so the
/// reaction always follows the errors it is about.
fn submit(form: &mut JobForm, focus: Field, skill_cursor: usize) -> Transition {
    match form.submit(validate) {
        SubmitOutcome::Accepted => {
            info!("application accepted");
            Transition::Screen(Screen::submitted(focus))
        }
        SubmitOutcome::Rejected { errors } => {
            info!("application rejected with {} error(s)", errors);
            let values = form.values();
            match form.errors().keys().find(|f| f.is_visible(values)) {
                Some(&first) if first != focus => Transition::Screen(Screen::editing(first)),
                _ => Transition::Screen(Screen::Editing {
                    focus,
                    skill_cursor,
                }),
            }
        }
    }
}

// ============================================================================
// FIELD EDITING
// ============================================================================

/// Move focus through the visible fields, wrapping at either end.
fn step_focus(form: &JobForm, focus: Field, forward: bool) -> Field {
    let fields = visible_fields(form.values());
    let len = fields.len();
    let Some(index) = fields.iter().position(|&f| f == focus) else {
        return fields.first().copied().unwrap_or(Field::FullName);
    };
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    fields[next]
}

fn type_char(form: &mut JobForm, focus: Field, c: char) {
    match form.values().field_value(focus) {
        FieldValue::Text(mut text) if focus != Field::Position => {
            text.push(c);
            form.set_field(focus, FieldValue::Text(text));
        }
        // Keys only build whole, non-negative years; a negative value can
        // only come from a snapshot and grows away from zero
        FieldValue::Number(current) => {
            if let Some(digit) = c.to_digit(10) {
                let digit = i64::from(digit);
                let n = current.unwrap_or(0).saturating_mul(10);
                let next = if n < 0 {
                    n.saturating_sub(digit)
                } else {
                    n.saturating_add(digit)
                };
                form.set_field(focus, FieldValue::Number(Some(next)));
            }
        }
        _ => {}
    }
}

fn delete_char(form: &mut JobForm, focus: Field) {
    match form.values().field_value(focus) {
        FieldValue::Text(_) if focus == Field::Position => {
            form.set_field(focus, FieldValue::text(""));
        }
        FieldValue::Text(mut text) => {
            if text.pop().is_some() {
                form.set_field(focus, FieldValue::Text(text));
            }
        }
        FieldValue::Number(current) => {
            let next = match current {
                Some(n) if n.unsigned_abs() >= 10 => Some(n / 10),
                _ => None,
            };
            form.set_field(focus, FieldValue::Number(next));
        }
        FieldValue::List(_) => {}
    }
}

/// Left/Right on the focused field. Returns the new skill cursor.
fn step_option(form: &mut JobForm, focus: Field, skill_cursor: usize, forward: bool) -> usize {
    match focus {
        Field::Position => {
            let next = cycle_position(form.values().position, forward);
            form.set_field(focus, FieldValue::text(next.map_or("", |p| p.as_str())));
        }
        Field::RelevantExperience => {
            let current = form.values().relevant_experience.unwrap_or(0);
            let next = if forward {
                current.saturating_add(1)
            } else if current > 0 {
                current - 1
            } else {
                current
            };
            form.set_field(focus, FieldValue::Number(Some(next)));
        }
        Field::AdditionalSkills => {
            return if forward {
                (skill_cursor + 1).min(SKILLS.len() - 1)
            } else {
                skill_cursor.saturating_sub(1)
            };
        }
        _ => {}
    }
    skill_cursor
}

// ============================================================================
// TESTS
// ============================================================================
