//! crates/docgen_core/src/form.rs
//!
//! The form-state manager: builds the initial draft, applies field edits
//! (including the course -> faculty/department derivation), and finalizes a
//! draft into a submittable payload.

use crate::domain::{course_profile, DocumentRequest, DraftField};
use crate::ports::{DraftStore, PortError};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// The key the draft is persisted under.
pub const DRAFT_STORAGE_KEY: &str = "docGenUserData";

static REGISTRATION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}[0-9]{13}$").expect("valid regex"));

//=========================================================================================
// Errors
//=========================================================================================

/// A single reason a field blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "issue", content = "field", rename_all = "snake_case")]
pub enum FieldIssue {
    Missing(DraftField),
    PatternMismatch(DraftField),
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing(field) => write!(f, "{} is required", field),
            FieldIssue::PatternMismatch(field) => write!(f, "{} has an invalid format", field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Draft is not ready for submission ({} issue(s))", .0.len())]
    Invalid(Vec<FieldIssue>),
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ValidationError::Invalid(issues) => issues,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to persist draft: {0}")]
    Storage(#[from] PortError),
}

//=========================================================================================
// Operations
//=========================================================================================

/// Produces the starting draft: empty, then overlaid with the persisted draft if
/// one exists and parses. Never fails; bad or unreadable data falls back to defaults.
pub fn initialize(store: &dyn DraftStore) -> DocumentRequest {
    let saved = match store.get(DRAFT_STORAGE_KEY) {
        Ok(Some(saved)) => saved,
        Ok(None) => return DocumentRequest::default(),
        Err(e) => {
            warn!("Could not read saved draft: {}", e);
            return DocumentRequest::default();
        }
    };

    let entries = match serde_json::from_str::<Value>(&saved) {
        Ok(Value::Object(entries)) => entries,
        Ok(other) => {
            warn!("Discarding saved draft that is not an object: {}", other);
            return DocumentRequest::default();
        }
        Err(e) => {
            warn!("Discarding malformed saved draft: {}", e);
            return DocumentRequest::default();
        }
    };

    let mut draft = DocumentRequest::default();
    for (key, value) in entries {
        match (key.parse::<DraftField>(), value) {
            (Ok(field), Value::String(value)) => draft.set(field, value),
            (Ok(field), other) => debug!("Skipping non-string saved value for {}: {}", field, other),
            (Err(_), _) => {}
        }
    }
    debug!("Restored saved draft.");
    draft
}

/// Applies one field edit and returns the new draft. The input draft is untouched.
///
/// The subject code is stored upper-cased. Setting a course that has a profile
/// overwrites faculty and department, even if they were edited by hand.
pub fn update_field(draft: &DocumentRequest, field: DraftField, value: &str) -> DocumentRequest {
    let mut next = draft.clone();
    let value = match field {
        DraftField::SubjectCode => value.to_uppercase(),
        _ => value.to_string(),
    };

    if field == DraftField::Course {
        if let Some(profile) = course_profile(&value) {
            next.set(DraftField::Faculty, profile.faculty.to_string());
            next.set(DraftField::Dept, profile.dept.to_string());
        }
    }
    next.set(field, value);
    next
}

/// Checks that every field is filled and the registration number is well formed.
/// All issues are reported together, in form order.
pub fn validate(draft: &DocumentRequest) -> Result<(), ValidationError> {
    let mut issues = Vec::new();
    for field in DraftField::ALL {
        let value = draft.get(field);
        if value.trim().is_empty() {
            issues.push(FieldIssue::Missing(field));
        } else if field == DraftField::RegistrationNumber && !REGISTRATION_NUMBER.is_match(value) {
            issues.push(FieldIssue::PatternMismatch(field));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid(issues))
    }
}

/// Validates the draft, persists it, and returns it as the outbound payload.
pub fn finalize(draft: &DocumentRequest, store: &dyn DraftStore) -> Result<DocumentRequest, FormError> {
    validate(draft)?;
    let json = serde_json::to_string(draft).map_err(|e| PortError::Storage(e.to_string()))?;
    store.set(DRAFT_STORAGE_KEY, &json)?;
    Ok(draft.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PortResult;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        entries: Mutex<HashMap<String, String>>,
        fail_reads: bool,
    }

    impl DraftStore for MapStore {
        fn get(&self, key: &str) -> PortResult<Option<String>> {
            if self.fail_reads {
                return Err(PortError::Storage("disk on fire".to_string()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> PortResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn complete_draft() -> DocumentRequest {
        DocumentRequest {
            faculty: "SCIENCE & HUMANITIES".into(),
            dept: "COMPUTER APPLICATIONS".into(),
            student_name: "Jane Doe".into(),
            registration_number: "RA2011003010001".into(),
            subject_name: "Operating Systems".into(),
            subject_code: "PCA25C01J".into(),
            teacher_name: "Mr. Vikash Sharma".into(),
            course: "MCA".into(),
            year: "1st".into(),
            semester: "2nd".into(),
            session: "2024-2025".into(),
        }
    }

    #[test]
    fn initialize_without_saved_draft_is_empty() {
        let store = MapStore::default();
        assert_eq!(initialize(&store), DocumentRequest::default());
    }

    #[test]
    fn initialize_merges_partial_saved_draft() {
        let store = MapStore::default();
        store
            .set(DRAFT_STORAGE_KEY, r#"{"student_name":"Jane","course":"MBA"}"#)
            .unwrap();
        let draft = initialize(&store);
        assert_eq!(draft.student_name, "Jane");
        assert_eq!(draft.course, "MBA");
        assert_eq!(draft.faculty, "");
    }

    #[test]
    fn initialize_keeps_string_fields_next_to_bad_ones() {
        let store = MapStore::default();
        store
            .set(
                DRAFT_STORAGE_KEY,
                r#"{"student_name":"Jane","year":null,"semester":3,"course":"BCA","nickname":"JD"}"#,
            )
            .unwrap();
        let draft = initialize(&store);
        assert_eq!(draft.student_name, "Jane");
        assert_eq!(draft.course, "BCA");
        assert_eq!(draft.year, "");
        assert_eq!(draft.semester, "");
    }

    #[test]
    fn initialize_discards_non_object_saved_draft() {
        let store = MapStore::default();
        store.set(DRAFT_STORAGE_KEY, r#"["Jane"]"#).unwrap();
        assert_eq!(initialize(&store), DocumentRequest::default());
    }

    #[test]
    fn initialize_discards_malformed_saved_draft() {
        let store = MapStore::default();
        store.set(DRAFT_STORAGE_KEY, "{not json").unwrap();
        assert_eq!(initialize(&store), DocumentRequest::default());
    }

    #[test]
    fn initialize_survives_unreadable_store() {
        let store = MapStore {
            fail_reads: true,
            ..Default::default()
        };
        assert_eq!(initialize(&store), DocumentRequest::default());
    }

    #[test]
    fn subject_code_is_uppercased() {
        let draft = update_field(&DocumentRequest::default(), DraftField::SubjectCode, "pca25c01j");
        assert_eq!(draft.subject_code, "PCA25C01J");
        let draft = update_field(&draft, DraftField::SubjectCode, "Cs-101b");
        assert_eq!(draft.subject_code, "CS-101B");
    }

    #[test]
    fn other_fields_are_stored_verbatim() {
        let draft = update_field(&DocumentRequest::default(), DraftField::TeacherName, "dr. turing");
        assert_eq!(draft.teacher_name, "dr. turing");
    }

    #[test]
    fn update_does_not_mutate_the_previous_draft() {
        let before = DocumentRequest::default();
        let after = update_field(&before, DraftField::Course, "BCA");
        assert_eq!(before, DocumentRequest::default());
        assert_eq!(after.course, "BCA");
    }

    #[test]
    fn known_course_overwrites_faculty_and_dept() {
        let draft = update_field(&DocumentRequest::default(), DraftField::Faculty, "MANAGEMENT");
        let draft = update_field(&draft, DraftField::Dept, "HOTEL MANAGEMENT");
        let draft = update_field(&draft, DraftField::Course, "B.Tech");
        assert_eq!(draft.faculty, "ENGINEERING & TECHNOLOGY");
        assert_eq!(draft.dept, "COMPUTER SCIENCE AND ENGINEERING");
    }

    #[test]
    fn reselecting_a_course_reapplies_the_mapping() {
        let draft = update_field(&DocumentRequest::default(), DraftField::Course, "MBA");
        let draft = update_field(&draft, DraftField::Dept, "HOTEL MANAGEMENT");
        let draft = update_field(&draft, DraftField::Course, "MBA");
        assert_eq!(draft.dept, "MASTER OF BUSINESS ADMINISTRATION");
    }

    #[test]
    fn unknown_course_leaves_faculty_and_dept_alone() {
        let draft = update_field(&DocumentRequest::default(), DraftField::Faculty, "MANAGEMENT");
        let draft = update_field(&draft, DraftField::Dept, "HOTEL MANAGEMENT");
        let draft = update_field(&draft, DraftField::Course, "PhD");
        assert_eq!(draft.course, "PhD");
        assert_eq!(draft.faculty, "MANAGEMENT");
        assert_eq!(draft.dept, "HOTEL MANAGEMENT");
    }

    #[test]
    fn registration_number_pattern() {
        let mut draft = complete_draft();
        for good in ["AB1234567890123", "ra2011003010001"] {
            draft.registration_number = good.into();
            assert!(validate(&draft).is_ok(), "{} should pass", good);
        }
        for bad in ["A11234567890123", "AB123456789012", "AB12345678901234", "AB12345678901X3"] {
            draft.registration_number = bad.into();
            assert_eq!(
                validate(&draft),
                Err(ValidationError::Invalid(vec![FieldIssue::PatternMismatch(
                    DraftField::RegistrationNumber
                )])),
                "{} should fail",
                bad
            );
        }
    }

    #[test]
    fn validation_reports_every_missing_field() {
        let mut draft = complete_draft();
        draft.student_name = "   ".into();
        draft.session.clear();
        let err = validate(&draft).unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                FieldIssue::Missing(DraftField::StudentName),
                FieldIssue::Missing(DraftField::Session)
            ]
        );
    }

    #[test]
    fn finalize_persists_and_round_trips_through_initialize() {
        let store = MapStore::default();
        let draft = complete_draft();
        let payload = finalize(&draft, &store).unwrap();
        assert_eq!(payload, draft);
        assert_eq!(initialize(&store), draft);
    }

    #[test]
    fn finalize_rejects_invalid_draft_without_persisting() {
        let store = MapStore::default();
        let err = finalize(&DocumentRequest::default(), &store).unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
        assert!(store.get(DRAFT_STORAGE_KEY).unwrap().is_none());
    }
}
