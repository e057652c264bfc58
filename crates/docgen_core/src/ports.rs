//! crates/docgen_core/src/ports.rs
//!
//! Defines the service contracts (traits) the form workflow depends on.
//! The remote document generator and the draft's key-value store both sit
//! behind these ports so the core never touches HTTP or the filesystem.

use crate::domain::DocumentRequest;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The request never produced a response (connectivity, timeout).
    #[error("Transport failure: {0}")]
    Transport(String),
    /// The remote service answered with a non-success HTTP status.
    #[error("Remote service returned HTTP {0}")]
    Status(u16),
    /// A success status whose body lacks the expected document URL.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Sends one request to the generator and returns the generated document's URL.
    async fn generate(&self, request: &DocumentRequest) -> PortResult<String>;
}

/// A string key-value store with the read/write contract of browser local storage.
pub trait DraftStore: Send + Sync {
    fn get(&self, key: &str) -> PortResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> PortResult<()>;
}
