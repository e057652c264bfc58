pub mod notification;
pub mod page;
pub mod progress_task;
pub mod protocol;
pub mod rest;
pub mod router;
pub mod state;
pub mod submission;

// Re-export the pieces the binary needs to assemble the server.
pub use router::build_router;
pub use state::{AppState, Shell, ShellError};
pub use submission::{spawn_submission, submit};
