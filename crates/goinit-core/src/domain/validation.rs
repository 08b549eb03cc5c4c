//! Pure field validation for the three free-text selection fields.
//!
//! A value is invalid iff its trimmed form is empty; the message is
//! `"<Field label> is required."`. Deterministic: the same selection always
//! produces the same report. The touched-marking side effect of a submit
//! attempt lives in `SelectionState::validate_all`, not here.

use std::collections::BTreeMap;

use crate::domain::selection::{Field, Selection};

/// Field → error message, ordered by field. Empty ⇒ the selection is
/// submittable.
pub type ValidationReport = BTreeMap<Field, String>;

/// Validate a single free-text field value.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required.", field.label()))
    } else {
        None
    }
}

/// Validate every free-text field of a selection.
pub fn validate_selection(selection: &Selection) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, selection.field_value(field)) {
            report.insert(field, message);
        }
    }
    report
}

/// One-line summary of a report, used in error messages.
pub fn summarize(report: &ValidationReport) -> String {
    report
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
