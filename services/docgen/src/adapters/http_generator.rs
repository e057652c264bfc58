//! services/docgen/src/adapters/http_generator.rs
//!
//! This module contains the adapter for the remote document-generation service.
//! It implements the `DocumentGenerator` port from the `core` crate.

use async_trait::async_trait;
use docgen_core::domain::DocumentRequest;
use docgen_core::ports::{DocumentGenerator, PortError, PortResult};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

/// The remote endpoint parses the body as JSON whatever the declared type.
const BODY_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that posts the finalized draft to the generator over HTTP.
#[derive(Clone)]
pub struct HttpDocumentGenerator {
    client: Client,
    endpoint: String,
}

impl HttpDocumentGenerator {
    /// Creates a new `HttpDocumentGenerator` whose requests give up after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

/// The part of the generator's reply we care about.
#[derive(Debug, Deserialize)]
struct GeneratorResponse {
    #[serde(rename = "pdfUrl")]
    pdf_url: Option<String>,
}

//=========================================================================================
// `DocumentGenerator` Trait Implementation
//=========================================================================================

#[async_trait]
impl DocumentGenerator for HttpDocumentGenerator {
    async fn generate(&self, request: &DocumentRequest) -> PortResult<String> {
        let body =
            serde_json::to_string(request).map_err(|e| PortError::Transport(e.to_string()))?;

        debug!("Posting document request to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, BODY_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Generator returned HTTP {}", status);
            return Err(PortError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| PortError::Transport(e.to_string()))?;

        let parsed: GeneratorResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse generator response: {}", e);
            PortError::InvalidResponse(e.to_string())
        })?;

        match parsed.pdf_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(PortError::InvalidResponse(
                "response has no pdfUrl".to_string(),
            )),
        }
    }
}
