//! Deferred feedback advance
//!
//! After a submission the feedback stays visible for a fixed delay before
//! the round moves on. The delay is a task that sleeps and then reports
//! the index it was scheduled for; the receiver advances the round only
//! if that index is still current, and aborting the task cancels the
//! advance outright.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Spawn the deferred advance for the entry at `index`.
///
/// Sends `index` on `tx` once `delay` has elapsed. Dropping the receiver
/// or aborting the returned handle cancels the advance.
pub fn advance_after(delay: Duration, index: usize, tx: mpsc::Sender<usize>) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        tx.send(index).await.ok();
    })
}
