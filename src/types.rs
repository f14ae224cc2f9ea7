//! Shared value types for job-form.

// ============================================================================
// FIELD VALUES
// ============================================================================

/// The value carried by a single form field.
///
/// Each field of a form model has one fixed shape. The store hands values
/// around in this tagged form so renderers never touch the typed record
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text (also used for single-choice selects).
    Text(String),
    /// Whole number; None = nothing entered.
    Number(Option<i64>),
    /// Ordered multi-select membership.
    List(Vec<String>),
}

impl FieldValue {
    /// Shorthand for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Returns the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number payload, if this is a number value.
    pub fn as_number(&self) -> Option<Option<i64>> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of the shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::List(_) => "list",
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let text = FieldValue::text("Ada");
        assert_eq!(text.as_text(), Some("Ada"));
        assert_eq!(text.as_number(), None);
        assert_eq!(text.as_list(), None);

        let number = FieldValue::Number(Some(3));
        assert_eq!(number.as_number(), Some(Some(3)));
        assert_eq!(number.as_text(), None);

        let list = FieldValue::List(vec!["CSS".into()]);
        assert_eq!(list.as_list(), Some(&["CSS".to_string()][..]));
    }

    #[test]
    fn kind_names_each_shape() {
        assert_eq!(FieldValue::text("").kind(), "text");
        assert_eq!(FieldValue::Number(None).kind(), "number");
        assert_eq!(FieldValue::List(vec![]).kind(), "list");
    }

    #[test]
    fn output_format_defaults_to_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
