//! crates/docgen_core/src/preview.rs
//!
//! The result presenter's data: what to embed, what to open, what to download.

use serde::Serialize;

/// Suggested file name for downloads of the generated document.
pub const DOWNLOAD_FILENAME: &str = "Generated_Document.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// The URL returned by the generator; opened in a new tab.
    pub open_url: String,
    /// The embeddable variant of `open_url`.
    pub preview_url: String,
    pub download_url: String,
    pub download_filename: &'static str,
}

impl Preview {
    pub fn new(document_url: &str) -> Self {
        Self {
            open_url: document_url.to_string(),
            preview_url: preview_url(document_url),
            download_url: document_url.to_string(),
            download_filename: DOWNLOAD_FILENAME,
        }
    }
}

/// Replaces the first `/view` and everything after it with `/preview`.
/// URLs without `/view` come back unchanged.
pub fn preview_url(document_url: &str) -> String {
    match document_url.find("/view") {
        Some(idx) => format!("{}/preview", &document_url[..idx]),
        None => document_url.to_string(),
    }
}
