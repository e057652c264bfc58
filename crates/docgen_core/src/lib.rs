pub mod domain;
pub mod form;
pub mod ports;
pub mod preview;
pub mod progress;

pub use domain::{
    course_profile, CourseProfile, DocumentRequest, DraftField, FormOptions, GenerationState,
    Notification, Severity, Theme, UnknownField, NOTIFICATION_TTL,
};
pub use form::{FieldIssue, FormError, ValidationError, DRAFT_STORAGE_KEY};
pub use ports::{DocumentGenerator, DraftStore, PortError, PortResult};
pub use preview::{Preview, DOWNLOAD_FILENAME};
pub use progress::{ProgressModel, LOADING_MESSAGES, PROGRESS_CEILING};
