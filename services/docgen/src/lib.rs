//! services/docgen/src/lib.rs
//!
//! The application shell around the document form: configuration, the adapters
//! for the remote generator and the draft store, and the web layer.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
