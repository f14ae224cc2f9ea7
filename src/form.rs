//! Form state container: values, validation errors, submission flag.
//!
//! The store is the only writer of form values. Renderers read through
//! accessors and mutate through `set_field` / `toggle_list_membership`.
//! Errors are recomputed wholesale by `submit`; edits never touch them.
//!
//! Submission is modelled as two halves so the ordering is explicit:
//! `begin_submit` stores the new errors and marks the submission pending,
//! `settle` consumes the pending flag and reports the outcome exactly once.
//! `submit` runs both back to back.

use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, info, warn};

use crate::types::FieldValue;

/// Field name → human-readable message.
pub type FieldErrors<F> = BTreeMap<F, String>;

// ============================================================================
// MODEL CONTRACT
// ============================================================================

/// A typed record of form values that the store can drive by field key.
pub trait FormModel {
    /// Field key. Unknown names are unrepresentable.
    type Field: Copy + Ord + Debug;

    /// Current value of a field in its tagged form.
    fn field_value(&self, field: Self::Field) -> FieldValue;

    /// Replace a field's value.
    ///
    /// Returns false, leaving the record untouched, when `value` has the
    /// wrong shape for `field`.
    fn set_field(&mut self, field: Self::Field, value: FieldValue) -> bool;
}

/// Result of settling a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation produced no errors.
    Accepted,
    /// Validation failed; `errors` messages are now visible.
    Rejected { errors: usize },
}

// ============================================================================
// STORE
// ============================================================================

/// Form values plus the errors of the most recent submit.
#[derive(Debug, Clone)]
pub struct FormStore<M: FormModel> {
    values: M,
    errors: FieldErrors<M::Field>,
    submitting: bool,
}

impl<M: FormModel> FormStore<M> {
    /// Start from an initial snapshot with no errors.
    pub fn new(initial: M) -> Self {
        FormStore {
            values: initial,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn values(&self) -> &M {
        &self.values
    }

    /// Errors as of the last submit.
    pub fn errors(&self) -> &FieldErrors<M::Field> {
        &self.errors
    }

    /// Error message for one field, if the last submit flagged it.
    pub fn error(&self, field: M::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// True between `begin_submit` and `settle`.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the value of `field`. Never validates.
    pub fn set_field(&mut self, field: M::Field, value: FieldValue) {
        let kind = value.kind();
        if self.values.set_field(field, value) {
            debug!("set {:?}", field);
        } else {
            warn!("ignoring {} value for field {:?}", kind, field);
        }
    }

    /// Add `item` to a list field if absent, remove it if present.
    pub fn toggle_list_membership(&mut self, field: M::Field, item: &str) {
        let items = match self.values.field_value(field) {
            FieldValue::List(items) => items,
            other => {
                warn!("cannot toggle {:?}: field holds a {} value", field, other.kind());
                return;
            }
        };

        let toggled = toggle_item(items, item);
        debug!("toggled {:?} in {:?}", item, field);
        self.values.set_field(field, FieldValue::List(toggled));
    }

    /// Validate the current values and mark the submission pending.
    ///
    /// The previous errors are replaced, not merged.
    pub fn begin_submit<V>(&mut self, validate: V)
    where
        V: FnOnce(&M) -> FieldErrors<M::Field>,
    {
        self.errors = validate(&self.values);
        self.submitting = true;
    }

    /// React to a pending submission.
    ///
    /// Returns None when nothing is pending, so a submission is reported
    /// at most once no matter how often this is called.
    pub fn settle(&mut self) -> Option<SubmitOutcome> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;

        let outcome = self.outcome();
        info!("submission settled: {:?}", outcome);
        Some(outcome)
    }

    /// Validate, store the errors, and report the outcome inline.
    pub fn submit<V>(&mut self, validate: V) -> SubmitOutcome
    where
        V: FnOnce(&M) -> FieldErrors<M::Field>,
    {
        self.begin_submit(validate);
        self.submitting = false;

        let outcome = self.outcome();
        info!("submission settled: {:?}", outcome);
        outcome
    }

    /// Outcome implied by the stored errors.
    fn outcome(&self) -> SubmitOutcome {
        if self.errors.is_empty() {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected {
                errors: self.errors.len(),
            }
        }
    }
}

/// Symmetric membership toggle on an ordered list.
///
/// Present → every occurrence removed. Absent → appended at the end.
pub fn toggle_item(mut items: Vec<String>, item: &str) -> Vec<String> {
    if items.iter().any(|existing| existing == item) {
        items.retain(|existing| existing != item);
    } else {
        items.push(item.to_string());
    }
    items
}

// ============================================================================
// TESTS
// ============================================================================
