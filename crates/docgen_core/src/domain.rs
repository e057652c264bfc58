//! crates/docgen_core/src/domain.rs
//!
//! Defines the pure, core data structures for the document generator.
//! Nothing in here knows about HTTP, storage, or timers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

//=========================================================================================
// DocumentRequest (the draft and the outbound payload)
//=========================================================================================

/// The academic-document metadata collected by the form.
///
/// The serialised keys are the exact keys the remote generator expects.
/// Every field defaults to the empty string, so deserialising a partial
/// object merges it over an empty draft field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRequest {
    pub faculty: String,
    pub dept: String,
    pub student_name: String,
    pub registration_number: String,
    pub subject_name: String,
    pub subject_code: String,
    pub teacher_name: String,
    pub course: String,
    pub year: String,
    pub semester: String,
    pub session: String,
}

impl DocumentRequest {
    /// Returns the current value of a single field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Faculty => &self.faculty,
            DraftField::Dept => &self.dept,
            DraftField::StudentName => &self.student_name,
            DraftField::RegistrationNumber => &self.registration_number,
            DraftField::SubjectName => &self.subject_name,
            DraftField::SubjectCode => &self.subject_code,
            DraftField::TeacherName => &self.teacher_name,
            DraftField::Course => &self.course,
            DraftField::Year => &self.year,
            DraftField::Semester => &self.semester,
            DraftField::Session => &self.session,
        }
    }

    /// Overwrites a single field. No normalisation happens here.
    pub(crate) fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Faculty => &mut self.faculty,
            DraftField::Dept => &mut self.dept,
            DraftField::StudentName => &mut self.student_name,
            DraftField::RegistrationNumber => &mut self.registration_number,
            DraftField::SubjectName => &mut self.subject_name,
            DraftField::SubjectCode => &mut self.subject_code,
            DraftField::TeacherName => &mut self.teacher_name,
            DraftField::Course => &mut self.course,
            DraftField::Year => &mut self.year,
            DraftField::Semester => &mut self.semester,
            DraftField::Session => &mut self.session,
        };
        *slot = value;
    }
}

/// The names of the draft's fields, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Faculty,
    Dept,
    StudentName,
    RegistrationNumber,
    SubjectName,
    SubjectCode,
    TeacherName,
    Course,
    Year,
    Semester,
    Session,
}

impl DraftField {
    /// Every field, in form order.
    pub const ALL: [DraftField; 11] = [
        DraftField::Faculty,
        DraftField::Dept,
        DraftField::StudentName,
        DraftField::RegistrationNumber,
        DraftField::SubjectName,
        DraftField::SubjectCode,
        DraftField::TeacherName,
        DraftField::Course,
        DraftField::Year,
        DraftField::Semester,
        DraftField::Session,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Faculty => "faculty",
            DraftField::Dept => "dept",
            DraftField::StudentName => "student_name",
            DraftField::RegistrationNumber => "registration_number",
            DraftField::SubjectName => "subject_name",
            DraftField::SubjectCode => "subject_code",
            DraftField::TeacherName => "teacher_name",
            DraftField::Course => "course",
            DraftField::Year => "year",
            DraftField::Semester => "semester",
            DraftField::Session => "session",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not name any draft field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

//=========================================================================================
// CourseProfile (course -> faculty / department)
//=========================================================================================

/// The faculty and department a course belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseProfile {
    pub faculty: &'static str,
    pub dept: &'static str,
}

const COURSE_PROFILES: [(&str, CourseProfile); 6] = [
    (
        "B.Tech",
        CourseProfile {
            faculty: "ENGINEERING & TECHNOLOGY",
            dept: "COMPUTER SCIENCE AND ENGINEERING",
        },
    ),
    (
        "M.Tech",
        CourseProfile {
            faculty: "ENGINEERING & TECHNOLOGY",
            dept: "COMPUTER SCIENCE AND ENGINEERING",
        },
    ),
    (
        "BCA",
        CourseProfile {
            faculty: "SCIENCE & HUMANITIES",
            dept: "COMPUTER APPLICATIONS",
        },
    ),
    (
        "MCA",
        CourseProfile {
            faculty: "SCIENCE & HUMANITIES",
            dept: "COMPUTER APPLICATIONS",
        },
    ),
    (
        "MBA",
        CourseProfile {
            faculty: "MANAGEMENT",
            dept: "MASTER OF BUSINESS ADMINISTRATION",
        },
    ),
    (
        "B.Pharm",
        CourseProfile {
            faculty: "MEDICINE & HEALTH SCIENCES",
            dept: "BACHELOR OF PHARMACY",
        },
    ),
];

/// Looks up the profile for a course. Matching is exact (case-sensitive).
pub fn course_profile(course: &str) -> Option<CourseProfile> {
    COURSE_PROFILES
        .iter()
        .find(|(name, _)| *name == course)
        .map(|(_, profile)| *profile)
}


//=========================================================================================
// Form option catalogues
//=========================================================================================

/// The choices and suggestions the form offers. Advisory only; the draft
/// accepts any text.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub courses: Vec<&'static str>,
    pub years: Vec<&'static str>,
    pub semesters: Vec<&'static str>,
    pub faculties: Vec<&'static str>,
    pub departments: Vec<&'static str>,
    pub subject_names: Vec<&'static str>,
    pub subject_codes: Vec<&'static str>,
    pub teacher_names: Vec<&'static str>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            courses: vec!["MCA", "BCA", "B.Tech", "M.Tech", "MBA", "B.Pharm"],
            years: vec!["1st", "2nd", "3rd", "4th"],
            semesters: vec!["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"],
            faculties: vec![
                "SCIENCE & HUMANITIES",
                "ENGINEERING & TECHNOLOGY",
                "MEDICINE & HEALTH SCIENCES",
                "MANAGEMENT",
            ],
            departments: vec![
                "COMPUTER APPLICATIONS",
                "BACHELOR OF PHARMACY",
                "MASTER OF BUSINESS ADMINISTRATION",
                "HOTEL MANAGEMENT",
                "MECHANICAL ENGINEERING",
                "ELECTRONICS AND COMMUNICATION ENGINEERING",
                "COMPUTER SCIENCE AND ENGINEERING",
            ],
            subject_names: vec![
                "Data Structures and Algorithms",
                "Database Management Systems",
                "Object Oriented Programming",
                "Computer Networks",
                "Operating Systems",
            ],
            subject_codes: vec!["PCA25C01J", "PCA25C02J", "PCA25C03J", "PCA25C04J"],
            teacher_names: vec![
                "Mr. Vikash Sharma",
                "Mrs. Vaishali Gupta",
                "Dr. Rajeev Kumar Sharma",
            ],
        }
    }
}

//=========================================================================================
// GenerationState, Notification, Theme
//=========================================================================================

/// Where the current submission attempt stands. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationState {
    #[default]
    Idle,
    InProgress,
    Succeeded { document_url: String },
    Failed { message: String },
}

impl GenerationState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GenerationState::InProgress)
    }

    /// The form accepts edits and submissions in every state but `InProgress`.
    pub fn is_editable(&self) -> bool {
        !self.is_in_progress()
    }

    /// The generated document's URL, once there is one.
    pub fn document_url(&self) -> Option<&str> {
        match self {
            GenerationState::Succeeded { document_url } => Some(document_url),
            _ => None,
        }
    }
}

/// How long a notification stays visible before it is dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// A transient, auto-dismissing message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            raised_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// The colour scheme preference owned by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("'{}' is not a valid theme", other)),
        }
    }
}
