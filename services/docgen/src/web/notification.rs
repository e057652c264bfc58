//! services/docgen/src/web/notification.rs
//!
//! Raises notifications and dismisses them after `NOTIFICATION_TTL`.

use crate::web::state::Shell;
use docgen_core::domain::{Notification, NOTIFICATION_TTL};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Shows `notification`, replacing whatever was showing, and schedules its dismissal.
///
/// Must be called with the shell already locked; `shell_lock` is that mutex.
pub fn notify(shell_lock: &Arc<Mutex<Shell>>, shell: &mut Shell, notification: Notification) {
    if let Some(previous) = shell.notification_token.take() {
        previous.cancel();
    }

    let token = CancellationToken::new();
    let id = notification.id;
    shell.notification = Some(notification);
    shell.notification_token = Some(token.clone());

    let shell_lock = shell_lock.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(NOTIFICATION_TTL) => {
                let mut shell = shell_lock.lock().await;
                if shell.notification.as_ref().map(|n| n.id) == Some(id) {
                    shell.notification = None;
                    shell.notification_token = None;
                    debug!("Notification {} dismissed.", id);
                }
            }
        }
    });
}
