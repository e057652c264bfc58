//! services/docgen/src/web/protocol.rs
//!
//! Request and response bodies exchanged between the form page and the shell.

use crate::web::state::Shell;
use docgen_core::domain::{DocumentRequest, GenerationState, Notification, Theme};
use docgen_core::form::FieldIssue;
use docgen_core::preview::Preview;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//=========================================================================================
// Requests FROM the page
//=========================================================================================

/// A new value for one draft field.
#[derive(Deserialize, Debug, ToSchema)]
pub struct FieldUpdate {
    pub value: String,
}

//=========================================================================================
// Responses TO the page
//=========================================================================================

/// The loading overlay's content while a document is being generated.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ProgressView {
    pub percent: u8,
    pub message: String,
}

/// Everything the page needs to render itself.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct ShellSnapshot {
    #[schema(value_type = Object)]
    pub draft: DocumentRequest,
    #[schema(value_type = Object)]
    pub generation: GenerationState,
    /// Present only while generating.
    pub progress: Option<ProgressView>,
    #[schema(value_type = Option<Object>)]
    pub notification: Option<Notification>,
    #[schema(value_type = String)]
    pub theme: Theme,
    /// Present only once a document has been generated.
    #[schema(value_type = Option<Object>)]
    pub preview: Option<Preview>,
}

impl From<&Shell> for ShellSnapshot {
    fn from(shell: &Shell) -> Self {
        let progress = shell.generation.is_in_progress().then(|| ProgressView {
            percent: shell.progress.percent,
            message: shell.progress.message().to_string(),
        });
        Self {
            draft: shell.draft.clone(),
            generation: shell.generation.clone(),
            progress,
            notification: shell.notification.clone(),
            theme: shell.theme,
            preview: shell.generation.document_url().map(Preview::new),
        }
    }
}

/// The body of every error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// Field-level problems, when the draft failed validation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[schema(value_type = Vec<Object>)]
    pub issues: Vec<FieldIssue>,
}
