//! The job application form: typed values, field metadata, visibility
//! rules, and the validation rule function.
//!
//! Pure data and pure functions. The store in [`crate::form`] drives a
//! [`JobApplication`] through the [`FormModel`] impl below.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::{FieldErrors, FormModel};
use crate::types::FieldValue;

/// Loose email shape: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Portfolio links must use one of a small set of schemes and contain no
/// spaces or double quotes.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).expect("url pattern compiles"));

/// Skills offered as checkboxes, in display order.
pub const SKILLS: [&str; 3] = ["JavaScript", "CSS", "Python"];

// ============================================================================
// POSITION
// ============================================================================

/// Position being applied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// All positions in select order.
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }

    /// Positions that ask for years of relevant experience.
    pub fn needs_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized position name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// Step through the position select: none → Developer → Designer →
/// Manager → none. `forward == false` walks the other way.
pub fn cycle_position(current: Option<Position>, forward: bool) -> Option<Position> {
    // Slot 0 is "no selection"
    let slots = Position::ALL.len() + 1;
    let index = match current {
        None => 0,
        Some(p) => Position::ALL.iter().position(|&q| q == p).map_or(0, |i| i + 1),
    };
    let next = if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    };
    if next == 0 { None } else { Some(Position::ALL[next - 1]) }
}

// ============================================================================
// VALUES
// ============================================================================

/// Values of every field on the job application form.
///
/// Serialized with the camelCase keys used for snapshots and error keys.
/// Missing keys deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobApplication {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(with = "position_text")]
    pub position: Option<Position>,
    /// Years; None = nothing entered.
    pub relevant_experience: Option<i64>,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: Vec<String>,
    /// Free-form local date-time, e.g. `2026-10-20T14:30`.
    pub interview_time: String,
}

/// Position as plain text, with `""` meaning no selection.
mod position_text {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Position;

    pub fn serialize<S: Serializer>(value: &Option<Position>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map_or("", |p| p.as_str()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Position>, D::Error> {
        let text = Option::<String>::deserialize(d)?.unwrap_or_default();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some).map_err(D::Error::custom)
    }
}

// ============================================================================
// FIELDS
// ============================================================================

/// Field keys, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    InterviewTime,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::Position,
        Field::RelevantExperience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::AdditionalSkills,
        Field::InterviewTime,
    ];

    /// Stable key, matching the snapshot JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::Position => "position",
            Field::RelevantExperience => "relevantExperience",
            Field::PortfolioUrl => "portfolioURL",
            Field::ManagementExperience => "managementExperience",
            Field::AdditionalSkills => "additionalSkills",
            Field::InterviewTime => "interviewTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Position => "Applying for Position",
            Field::RelevantExperience => "Relevant Experience (Years)",
            Field::PortfolioUrl => "Portfolio URL",
            Field::ManagementExperience => "Management Experience",
            Field::AdditionalSkills => "Additional Skills",
            Field::InterviewTime => "Preferred Interview Time",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::FullName => Some("Enter your full name"),
            Field::Email => Some("Enter your email"),
            Field::PhoneNumber => Some("Enter your phone number"),
            Field::Position => Some("Select Position"),
            Field::InterviewTime => Some("YYYY-MM-DDTHH:MM"),
            _ => None,
        }
    }

    /// Whether the field is shown for the current values.
    ///
    /// Hidden fields keep their values; they just are not rendered or
    /// focusable.
    pub fn is_visible(&self, values: &JobApplication) -> bool {
        match self {
            Field::RelevantExperience => values.position.is_some_and(|p| p.needs_experience()),
            Field::PortfolioUrl => values.position == Some(Position::Designer),
            Field::ManagementExperience => values.position == Some(Position::Manager),
            _ => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields shown for the current values, in form order.
pub fn visible_fields(values: &JobApplication) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|f| f.is_visible(values))
        .collect()
}

// ============================================================================
// STORE BINDING
// ============================================================================

impl FormModel for JobApplication {
    type Field = Field;

    fn field_value(&self, field: Field) -> FieldValue {
        match field {
            Field::FullName => FieldValue::Text(self.full_name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            Field::Position => {
                FieldValue::text(self.position.map_or("", |p| p.as_str()))
            }
            Field::RelevantExperience => FieldValue::Number(self.relevant_experience),
            Field::PortfolioUrl => FieldValue::Text(self.portfolio_url.clone()),
            Field::ManagementExperience => FieldValue::Text(self.management_experience.clone()),
            Field::AdditionalSkills => FieldValue::List(self.additional_skills.clone()),
            Field::InterviewTime => FieldValue::Text(self.interview_time.clone()),
        }
    }

    fn set_field(&mut self, field: Field, value: FieldValue) -> bool {
        match (field, value) {
            (Field::FullName, FieldValue::Text(s)) => self.full_name = s,
            (Field::Email, FieldValue::Text(s)) => self.email = s,
            (Field::PhoneNumber, FieldValue::Text(s)) => self.phone_number = s,
            (Field::Position, FieldValue::Text(s)) if s.is_empty() => self.position = None,
            (Field::Position, FieldValue::Text(s)) => match s.parse() {
                Ok(p) => self.position = Some(p),
                Err(_) => return false,
            },
            (Field::RelevantExperience, FieldValue::Number(n)) => self.relevant_experience = n,
            (Field::PortfolioUrl, FieldValue::Text(s)) => self.portfolio_url = s,
            (Field::ManagementExperience, FieldValue::Text(s)) => self.management_experience = s,
            (Field::AdditionalSkills, FieldValue::List(items)) => self.additional_skills = items,
            (Field::InterviewTime, FieldValue::Text(s)) => self.interview_time = s,
            _ => return false,
        }
        true
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a job application.
///
/// Every rule runs; each failing rule contributes one message. Format
/// checks apply to any non-empty value, visible or not.
pub fn validate(values: &JobApplication) -> FieldErrors<Field> {
    let mut errors = FieldErrors::new();

    if values.full_name.is_empty() {
        errors.insert(Field::FullName, "Full Name is required".into());
    }

    if values.email.is_empty() {
        errors.insert(Field::Email, "Email is required".into());
    } else if !EMAIL_PATTERN.is_match(&values.email) {
        errors.insert(Field::Email, "Email address is invalid".into());
    }

    if values.phone_number.is_empty() {
        errors.insert(Field::PhoneNumber, "Phone Number is required".into());
    }

    let needs_experience = values.position.is_some_and(|p| p.needs_experience());
    if needs_experience && values.relevant_experience.is_none_or(|years| years <= 0) {
        errors.insert(
            Field::RelevantExperience,
            "Relevant Experience is required and must be greater than 0".into(),
        );
    }

    if values.position == Some(Position::Designer) && values.portfolio_url.is_empty() {
        errors.insert(Field::PortfolioUrl, "Portfolio URL is required".into());
    } else if !values.portfolio_url.is_empty() && !URL_PATTERN.is_match(&values.portfolio_url) {
        errors.insert(Field::PortfolioUrl, "Portfolio URL is invalid".into());
    }

    if values.position == Some(Position::Manager) && values.management_experience.is_empty() {
        errors.insert(
            Field::ManagementExperience,
            "Management Experience is required".into(),
        );
    }

    if values.additional_skills.is_empty() {
        errors.insert(
            Field::AdditionalSkills,
            "At least one skill must be selected".into(),
        );
    }

    if values.interview_time.is_empty() {
        errors.insert(
            Field::InterviewTime,
            "Preferred Interview Time is required".into(),
        );
    }

    errors
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormStore, SubmitOutcome};

    fn complete() -> JobApplication {
        JobApplication {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone_number: "555-0100".into(),
            position: Some(Position::Developer),
            relevant_experience: Some(3),
            portfolio_url: String::new(),
            management_experience: String::new(),
            additional_skills: vec!["Python".into()],
            interview_time: "2026-10-20T14:30".into(),
        }
    }

    #[test]
    fn complete_application_has_no_errors() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn empty_application_flags_every_unconditional_field() {
        let errors = validate(&JobApplication::default());
        let keys: Vec<&str> = errors.keys().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["fullName", "email", "phoneNumber", "additionalSkills", "interviewTime"]
        );
    }

    #[test]
    fn missing_full_name_is_required() {
        let values = JobApplication {
            full_name: String::new(),
            ..complete()
        };
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::FullName], "Full Name is required");
        assert_eq!(Field::FullName.key(), "fullName");
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let values = JobApplication {
            email: "ada.example.com".into(),
            ..complete()
        };
        assert_eq!(validate(&values)[&Field::Email], "Email address is invalid");
    }

    #[test]
    fn email_without_dot_after_at_is_invalid() {
        let values = JobApplication {
            email: "ada@localhost".into(),
            ..complete()
        };
        assert_eq!(validate(&values)[&Field::Email], "Email address is invalid");
    }

    #[test]
    fn empty_email_is_required_not_invalid() {
        let values = JobApplication {
            email: String::new(),
            ..complete()
        };
        assert_eq!(validate(&values)[&Field::Email], "Email is required");
    }

    #[test]
    fn developer_with_zero_experience_is_flagged() {
        let values = JobApplication {
            relevant_experience: Some(0),
            ..complete()
        };
        assert_eq!(
            validate(&values)[&Field::RelevantExperience],
            "Relevant Experience is required and must be greater than 0"
        );
    }

    #[test]
    fn developer_with_three_years_passes() {
        let values = JobApplication {
            relevant_experience: Some(3),
            ..complete()
        };
        assert!(!validate(&values).contains_key(&Field::RelevantExperience));
    }

    #[test]
    fn experience_is_ignored_for_managers() {
        let values = JobApplication {
            position: Some(Position::Manager),
            relevant_experience: None,
            management_experience: "Led a team of 5".into(),
            ..complete()
        };
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn designer_needs_portfolio_and_experience() {
        let values = JobApplication {
            position: Some(Position::Designer),
            relevant_experience: None,
            ..complete()
        };
        let errors = validate(&values);
        assert_eq!(errors[&Field::PortfolioUrl], "Portfolio URL is required");
        assert!(errors.contains_key(&Field::RelevantExperience));
    }

    #[test]
    fn portfolio_scheme_is_checked_even_when_hidden() {
        let values = JobApplication {
            portfolio_url: "gopher://example.com".into(),
            ..complete()
        };
        assert_eq!(validate(&values)[&Field::PortfolioUrl], "Portfolio URL is invalid");
    }

    #[test]
    fn portfolio_accepts_allowed_schemes() {
        for url in ["http://a.dev", "https://a.dev/work", "ftp://files.a.dev"] {
            let values = JobApplication {
                position: Some(Position::Designer),
                portfolio_url: url.into(),
                ..complete()
            };
            assert!(validate(&values).is_empty(), "{url} should be accepted");
        }
    }

    #[test]
    fn portfolio_with_space_is_invalid() {
        let values = JobApplication {
            portfolio_url: "https://a.dev/my work".into(),
            ..complete()
        };
        assert!(validate(&values).contains_key(&Field::PortfolioUrl));
    }

    #[test]
    fn manager_needs_management_experience() {
        let values = JobApplication {
            position: Some(Position::Manager),
            ..complete()
        };
        assert_eq!(
            validate(&values)[&Field::ManagementExperience],
            "Management Experience is required"
        );
    }

    #[test]
    fn skills_must_not_be_empty() {
        let values = JobApplication {
            additional_skills: vec![],
            ..complete()
        };
        assert_eq!(
            validate(&values)[&Field::AdditionalSkills],
            "At least one skill must be selected"
        );
    }

    #[test]
    fn failures_are_cumulative() {
        let values = JobApplication {
            full_name: String::new(),
            email: "nope".into(),
            additional_skills: vec![],
            ..complete()
        };
        assert_eq!(validate(&values).len(), 3);
    }

    #[test]
    fn repeated_submits_give_identical_errors() {
        let mut store = FormStore::new(JobApplication {
            email: "nope".into(),
            ..JobApplication::default()
        });
        let first = store.submit(validate);
        let first_errors = store.errors().clone();
        let second = store.submit(validate);
        assert_eq!(first, second);
        assert_eq!(&first_errors, store.errors());
    }

    #[test]
    fn store_accepts_complete_application() {
        let mut store = FormStore::new(complete());
        assert_eq!(store.submit(validate), SubmitOutcome::Accepted);
    }

    #[test]
    fn toggling_a_skill_twice_restores_membership() {
        let mut store = FormStore::new(JobApplication {
            additional_skills: vec!["CSS".into(), "Python".into()],
            ..JobApplication::default()
        });
        store.toggle_list_membership(Field::AdditionalSkills, "JavaScript");
        store.toggle_list_membership(Field::AdditionalSkills, "JavaScript");
        assert_eq!(store.values().additional_skills, vec!["CSS", "Python"]);

        store.toggle_list_membership(Field::AdditionalSkills, "CSS");
        store.toggle_list_membership(Field::AdditionalSkills, "CSS");
        let mut skills = store.values().additional_skills.clone();
        skills.sort();
        assert_eq!(skills, vec!["CSS", "Python"]);
    }

    #[test]
    fn position_set_by_name() {
        let mut store = FormStore::new(JobApplication::default());
        store.set_field(Field::Position, FieldValue::text("Designer"));
        assert_eq!(store.values().position, Some(Position::Designer));
        store.set_field(Field::Position, FieldValue::text(""));
        assert_eq!(store.values().position, None);
    }

    #[test]
    fn unknown_position_is_rejected() {
        let mut values = JobApplication::default();
        assert!(!values.set_field(Field::Position, FieldValue::text("Astronaut")));
        assert_eq!(values.position, None);
    }

    #[test]
    fn conditional_fields_follow_position() {
        let mut values = JobApplication::default();
        assert_eq!(visible_fields(&values).len(), 6);

        values.position = Some(Position::Developer);
        assert!(Field::RelevantExperience.is_visible(&values));
        assert!(!Field::PortfolioUrl.is_visible(&values));

        values.position = Some(Position::Designer);
        assert!(Field::RelevantExperience.is_visible(&values));
        assert!(Field::PortfolioUrl.is_visible(&values));
        assert!(!Field::ManagementExperience.is_visible(&values));

        values.position = Some(Position::Manager);
        assert!(!Field::RelevantExperience.is_visible(&values));
        assert!(Field::ManagementExperience.is_visible(&values));
    }

    #[test]
    fn cycle_position_wraps_both_ways() {
        assert_eq!(cycle_position(None, true), Some(Position::Developer));
        assert_eq!(cycle_position(Some(Position::Manager), true), None);
        assert_eq!(cycle_position(None, false), Some(Position::Manager));
        assert_eq!(
            cycle_position(Some(Position::Designer), false),
            Some(Position::Developer)
        );
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let json = serde_json::to_value(complete()).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["position"], "Developer");
        assert_eq!(json["relevantExperience"], 3);
        assert!(json.get("portfolioURL").is_some());
    }

    #[test]
    fn partial_snapshot_fills_defaults() {
        let values: JobApplication =
            serde_json::from_str(r#"{"fullName": "Ada", "position": ""}"#).unwrap();
        assert_eq!(values.full_name, "Ada");
        assert_eq!(values.position, None);
        assert!(values.additional_skills.is_empty());
    }

    #[test]
    fn snapshot_with_unknown_position_fails() {
        let result: Result<JobApplication, _> =
            serde_json::from_str(r#"{"position": "Astronaut"}"#);
        assert!(result.is_err());
    }
}
