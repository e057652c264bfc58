//! services/docgen/src/web/submission.rs
//!
//! The submission controller: finalizes the draft, runs exactly one call to the
//! document generator, and settles the shell into success or failure.

use crate::web::{
    notification::notify,
    progress_task::start_progress,
    state::{AppState, ShellError},
};
use docgen_core::domain::{DocumentRequest, GenerationState, Notification};
use docgen_core::form;
use docgen_core::ports::PortResult;
use std::sync::Arc;
use tracing::{debug, error, info, Instrument};
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Document generated successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to generate document. Please try again.";

/// Validates the draft, moves the shell to `InProgress` and starts the progress
/// timers, then persists the draft. Returns the payload to send.
///
/// Nothing is sent if the draft is invalid or a run is already in flight.
pub async fn begin_submission(app_state: &Arc<AppState>) -> Result<DocumentRequest, ShellError> {
    let payload = {
        let mut shell = app_state.shell.lock().await;
        if shell.generation.is_in_progress() {
            return Err(ShellError::Busy);
        }
        form::validate(&shell.draft)?;

        shell.generation = GenerationState::InProgress;
        start_progress(&app_state.shell, &mut shell);
        shell.draft.clone()
    };

    save_draft(app_state, &payload).await;
    Ok(payload)
}

/// Runs `finalize` on the blocking pool, outside the shell lock. The draft
/// cannot change while the shell is `InProgress`.
async fn save_draft(app_state: &Arc<AppState>, payload: &DocumentRequest) {
    let store = app_state.store.clone();
    let draft = payload.clone();
    match tokio::task::spawn_blocking(move || form::finalize(&draft, store.as_ref())).await {
        Ok(Ok(_)) => debug!("Draft saved."),
        // The draft is valid; only the saved copy is stale.
        Ok(Err(e)) => error!("Failed to save draft before submitting: {}", e),
        Err(e) => error!("Draft save task did not complete: {}", e),
    }
}

/// Sends `payload` to the generator and settles the shell with the outcome.
pub async fn run_submission(app_state: Arc<AppState>, payload: DocumentRequest) {
    let attempt = Uuid::new_v4();
    let span = tracing::info_span!("generation", %attempt);
    async move {
        info!("Requesting document for {}", payload.registration_number);
        let outcome = app_state.generator.generate(&payload).await;
        settle(&app_state, outcome).await;
    }
    .instrument(span)
    .await
}

/// Runs a whole submission in the foreground.
pub async fn submit(app_state: &Arc<AppState>) -> Result<(), ShellError> {
    let payload = begin_submission(app_state).await?;
    run_submission(app_state.clone(), payload).await;
    Ok(())
}

/// Starts a submission and lets the generator call run in the background.
pub async fn spawn_submission(app_state: &Arc<AppState>) -> Result<(), ShellError> {
    let payload = begin_submission(app_state).await?;
    tokio::spawn(run_submission(app_state.clone(), payload));
    Ok(())
}

async fn settle(app_state: &Arc<AppState>, outcome: PortResult<String>) {
    let mut shell = app_state.shell.lock().await;
    shell.stop_progress();

    match outcome {
        Ok(document_url) => {
            info!("Document generated: {}", document_url);
            shell.generation = GenerationState::Succeeded { document_url };
            notify(&app_state.shell, &mut shell, Notification::success(SUCCESS_MESSAGE));
        }
        Err(e) => {
            error!("Document generation failed: {}", e);
            shell.generation = GenerationState::Failed {
                message: FAILURE_MESSAGE.to_string(),
            };
            notify(&app_state.shell, &mut shell, Notification::error(FAILURE_MESSAGE));
        }
    }
}
