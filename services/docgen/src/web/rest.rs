//! services/docgen/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API the form page talks to, and the
//! master definition for the OpenAPI specification.

use crate::web::{
    protocol::{ErrorBody, FieldUpdate, ProgressView, ShellSnapshot},
    state::{AppState, ShellError},
    submission::spawn_submission,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use docgen_core::domain::{DraftField, FormOptions};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        options_handler,
        state_handler,
        update_field_handler,
        submit_handler,
        reset_handler,
        toggle_theme_handler,
    ),
    components(
        schemas(FieldUpdate, ShellSnapshot, ProgressView, ErrorBody)
    ),
    tags(
        (name = "Document Generator API", description = "Form state and document generation for the cover-page generator.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Error Mapping
//=========================================================================================

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        let (status, issues) = match &self {
            ShellError::Busy => (StatusCode::CONFLICT, Vec::new()),
            ShellError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.issues().to_vec()),
            ShellError::UnknownField(_) => (StatusCode::BAD_REQUEST, Vec::new()),
        };
        let body = ErrorBody {
            message: self.to_string(),
            issues,
        };
        (status, Json(body)).into_response()
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List the choices and suggestions for the form's fields.
#[utoipa::path(
    get,
    path = "/api/options",
    responses((status = 200, description = "Form option catalogues"))
)]
pub async fn options_handler() -> Json<FormOptions> {
    Json(FormOptions::default())
}

/// Fetch the whole shell state: draft, generation status, progress, notification.
#[utoipa::path(
    get,
    path = "/api/state",
    responses((status = 200, description = "Current shell state", body = ShellSnapshot))
)]
pub async fn state_handler(State(app_state): State<Arc<AppState>>) -> Json<ShellSnapshot> {
    let shell = app_state.shell.lock().await;
    Json(ShellSnapshot::from(&*shell))
}

/// Set one field of the draft. Derived fields are updated in the same step.
#[utoipa::path(
    put,
    path = "/api/draft/{field}",
    request_body = FieldUpdate,
    params(("field" = String, Path, description = "The field's wire name, e.g. `subject_code`.")),
    responses(
        (status = 200, description = "The updated draft"),
        (status = 400, description = "Unknown field", body = ErrorBody),
        (status = 409, description = "A document is being generated", body = ErrorBody)
    )
)]
pub async fn update_field_handler(
    State(app_state): State<Arc<AppState>>,
    Path(field): Path<String>,
    Json(update): Json<FieldUpdate>,
) -> Result<impl IntoResponse, ShellError> {
    let field = field.parse::<DraftField>().map_err(|e| {
        warn!("Rejected update: {}", e);
        ShellError::from(e)
    })?;

    let mut shell = app_state.shell.lock().await;
    let draft = shell.update_field(field, &update.value)?.clone();
    debug!("Updated field {}", field);
    Ok(Json(draft))
}

/// Validate and save the draft, then start generating the document.
///
/// Generation runs in the background; poll `/api/state` for progress and the result.
#[utoipa::path(
    post,
    path = "/api/submit",
    responses(
        (status = 202, description = "Generation started", body = ShellSnapshot),
        (status = 409, description = "A document is already being generated", body = ErrorBody),
        (status = 422, description = "The draft failed validation", body = ErrorBody)
    )
)]
pub async fn submit_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ShellError> {
    spawn_submission(&app_state).await?;
    let shell = app_state.shell.lock().await;
    Ok((StatusCode::ACCEPTED, Json(ShellSnapshot::from(&*shell))))
}

/// Close the result view and return to the form. The draft is kept.
#[utoipa::path(
    post,
    path = "/api/reset",
    responses(
        (status = 200, description = "Back on the form", body = ShellSnapshot),
        (status = 409, description = "A document is being generated", body = ErrorBody)
    )
)]
pub async fn reset_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<ShellSnapshot>, ShellError> {
    let mut shell = app_state.shell.lock().await;
    shell.reset()?;
    Ok(Json(ShellSnapshot::from(&*shell)))
}

/// Switch between the light and dark theme.
#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    responses((status = 200, description = "Theme switched", body = ShellSnapshot))
)]
pub async fn toggle_theme_handler(State(app_state): State<Arc<AppState>>) -> Json<ShellSnapshot> {
    let mut shell = app_state.shell.lock().await;
    shell.toggle_theme();
    Json(ShellSnapshot::from(&*shell))
}
