pub mod draft_store;
pub mod http_generator;
pub mod simulated;

pub use draft_store::{FileDraftStore, MemoryDraftStore};
pub use http_generator::HttpDocumentGenerator;
pub use simulated::SimulatedDocumentGenerator;
