// tests/common/mod.rs

#![allow(dead_code)]

use async_trait::async_trait;
use docgen_core::domain::DocumentRequest;
use docgen_core::ports::{DocumentGenerator, DraftStore, PortError, PortResult};
use docgen_lib::{adapters::MemoryDraftStore, config::Config, web::AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the fake generator answers with.
#[derive(Clone, Debug)]
pub enum Reply {
    Url(String),
    Status(u16),
    MissingUrl,
    Transport,
}

/// A generator that waits `delay`, records each request, and answers with `reply`.
pub struct FakeGenerator {
    reply: Reply,
    delay: Duration,
    calls: AtomicUsize,
    last_request: Mutex<Option<DocumentRequest>>,
}

impl FakeGenerator {
    pub fn new(reply: Reply) -> Self {
        Self::delayed(reply, Duration::ZERO)
    }

    pub fn delayed(reply: Reply, delay: Duration) -> Self {
        Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DocumentRequest> {
        self.last_request.lock().expect("fake lock").clone()
    }
}

#[async_trait]
impl DocumentGenerator for FakeGenerator {
    async fn generate(&self, request: &DocumentRequest) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("fake lock") = Some(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Reply::Url(url) => Ok(url.clone()),
            Reply::Status(code) => Err(PortError::Status(*code)),
            Reply::MissingUrl => Err(PortError::InvalidResponse("response has no pdfUrl".into())),
            Reply::Transport => Err(PortError::Transport("connection refused".into())),
        }
    }
}

pub struct TestApp {
    pub state: Arc<AppState>,
    pub generator: Arc<FakeGenerator>,
    pub store: Arc<MemoryDraftStore>,
}

/// Builds an app around a fresh in-memory store.
pub fn test_app(generator: FakeGenerator) -> TestApp {
    test_app_with_store(generator, Arc::new(MemoryDraftStore::new()))
}

/// Builds an app around an existing store, as a page reload would.
pub fn test_app_with_store(generator: FakeGenerator, store: Arc<MemoryDraftStore>) -> TestApp {
    let generator = Arc::new(generator);
    let state = Arc::new(AppState::new(
        Arc::new(Config::default()),
        generator.clone() as Arc<dyn DocumentGenerator>,
        store.clone() as Arc<dyn DraftStore>,
    ));
    TestApp {
        state,
        generator,
        store,
    }
}

pub fn complete_draft() -> DocumentRequest {
    DocumentRequest {
        faculty: "ENGINEERING & TECHNOLOGY".into(),
        dept: "COMPUTER SCIENCE AND ENGINEERING".into(),
        student_name: "Jane Doe".into(),
        registration_number: "AB1234567890123".into(),
        subject_name: "Computer Networks".into(),
        subject_code: "PCA25C02J".into(),
        teacher_name: "Mr. Vikash Sharma".into(),
        course: "B.Tech".into(),
        year: "2nd".into(),
        semester: "3rd".into(),
        session: "2024-2025".into(),
    }
}

/// Fills the shell's draft through ordinary field edits.
pub async fn fill_draft(app: &TestApp, draft: &DocumentRequest) {
    let mut shell = app.state.shell.lock().await;
    for field in docgen_core::DraftField::ALL {
        shell
            .update_field(field, draft.get(field))
            .expect("form is editable");
    }
}
