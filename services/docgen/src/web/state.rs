//! services/docgen/src/web/state.rs
//!
//! Defines the application's shared state and the shell's state container.

use crate::config::Config;
use docgen_core::domain::{DocumentRequest, DraftField, GenerationState, Notification, Theme};
use docgen_core::form::{self, ValidationError};
use docgen_core::ports::{DocumentGenerator, DraftStore};
use docgen_core::progress::ProgressModel;
use docgen_core::UnknownField;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub shell: Arc<Mutex<Shell>>,
    pub generator: Arc<dyn DocumentGenerator>,
    pub store: Arc<dyn DraftStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state, restoring the saved draft from `store`.
    pub fn new(
        config: Arc<Config>,
        generator: Arc<dyn DocumentGenerator>,
        store: Arc<dyn DraftStore>,
    ) -> Self {
        let draft = form::initialize(store.as_ref());
        let shell = Shell::new(draft, config.theme);
        Self {
            shell: Arc::new(Mutex::new(shell)),
            generator,
            store,
            config,
        }
    }
}

//=========================================================================================
// Shell (the single UI state container)
//=========================================================================================

/// Errors a shell transition can refuse with.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("A document is already being generated")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Everything the page renders: the draft, the generation state, the cosmetic
/// progress, the current notification and the theme.
#[derive(Debug)]
pub struct Shell {
    pub draft: DocumentRequest,
    pub generation: GenerationState,
    pub theme: Theme,
    pub notification: Option<Notification>,
    pub progress: ProgressModel,
    pub(crate) progress_token: Option<CancellationToken>,
    pub(crate) notification_token: Option<CancellationToken>,
}

impl Shell {
    pub fn new(draft: DocumentRequest, theme: Theme) -> Self {
        Self {
            draft,
            generation: GenerationState::Idle,
            theme,
            notification: None,
            progress: ProgressModel::default(),
            progress_token: None,
            notification_token: None,
        }
    }

    /// Applies one field edit to the draft.
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<&DocumentRequest, ShellError> {
        if !self.generation.is_editable() {
            return Err(ShellError::Busy);
        }
        self.draft = form::update_field(&self.draft, field, value);
        Ok(&self.draft)
    }

    /// Drops the generated document and returns to the editable form. The draft stays.
    pub fn reset(&mut self) -> Result<(), ShellError> {
        if self.generation.is_in_progress() {
            return Err(ShellError::Busy);
        }
        self.generation = GenerationState::Idle;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// True while the progress timers are running.
    pub fn progress_running(&self) -> bool {
        self.progress_token
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Cancels the progress timers, if any.
    pub(crate) fn stop_progress(&mut self) {
        if let Some(token) = self.progress_token.take() {
            token.cancel();
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.stop_progress();
        if let Some(token) = self.notification_token.take() {
            token.cancel();
        }
    }
}
