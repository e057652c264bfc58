//! services/docgen/src/web/progress_task.rs
//!
//! The two timers behind the cosmetic progress indicator. Both live exactly as
//! long as one `InProgress` run: they share a `CancellationToken` that the
//! submission controller cancels when the request settles.

use crate::web::state::Shell;
use docgen_core::progress::{ProgressModel, PROGRESS_TICK, STEP_TICK};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Resets the progress model and spawns fresh timers for it.
///
/// Any timers from a previous run are cancelled first. Must be called with the
/// shell already locked; `shell_lock` is the same mutex, handed to the timers.
pub fn start_progress(shell_lock: &Arc<Mutex<Shell>>, shell: &mut Shell) {
    shell.stop_progress();
    shell.progress = ProgressModel::default();

    let token = CancellationToken::new();
    shell.progress_token = Some(token.clone());

    tokio::spawn(ticker(
        shell_lock.clone(),
        token.clone(),
        PROGRESS_TICK,
        ProgressModel::tick_percent,
    ));
    tokio::spawn(ticker(shell_lock.clone(), token, STEP_TICK, ProgressModel::tick_step));
}

async fn ticker(
    shell_lock: Arc<Mutex<Shell>>,
    token: CancellationToken,
    period: Duration,
    tick: fn(&mut ProgressModel),
) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                let mut shell = shell_lock.lock().await;
                // The run may have settled while we waited for the lock.
                if token.is_cancelled() {
                    break;
                }
                tick(&mut shell.progress);
            }
        }
    }
    debug!("Progress timer ({:?}) stopped.", period);
}
