//! services/docgen/src/adapters/simulated.rs
//!
//! A stand-in generator for running the form without a configured endpoint.

use async_trait::async_trait;
use docgen_core::domain::DocumentRequest;
use docgen_core::ports::{DocumentGenerator, PortResult};
use std::time::Duration;
use tracing::info;

pub const SAMPLE_DOCUMENT_URL: &str =
    "https://file-examples.com/wp-content/storage/2017/10/file-sample_150kB.pdf";

/// Waits a fixed delay, then "generates" a sample PDF.
#[derive(Clone, Debug)]
pub struct SimulatedDocumentGenerator {
    delay: Duration,
}

impl SimulatedDocumentGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl DocumentGenerator for SimulatedDocumentGenerator {
    async fn generate(&self, request: &DocumentRequest) -> PortResult<String> {
        info!(
            "Simulating document generation for {} ({:?})",
            request.student_name, self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(SAMPLE_DOCUMENT_URL.to_string())
    }
}
