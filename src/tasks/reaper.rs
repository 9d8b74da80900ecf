//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Handle for controlling a running reaper task.
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct ReaperHandle {
    task: JoinHandle<()>,
    shutdown_tx: mpsc::Sender<()>,
}

impl ReaperHandle {
    /// Asks the reaper to stop after its current pass. Calling this more than
    /// once is harmless.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.try_send(());
    }

    /// Returns true while the reaper task is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a background task that periodically reaps stale cache entries.
///
/// The task wakes every `reap_interval`, starting one full interval after
/// spawning, and acquires the write lock to drop every entry older than
/// `max_age`. It runs until `ReaperHandle::shutdown` is called or the handle
/// is dropped.
///
/// Must be called from within a tokio runtime.
///
/// # Panics
/// Panics if `reap_interval` is zero.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(300), Duration::from_secs(300));
/// // Later, on exit:
/// reaper.shutdown();
/// ```
pub fn spawn_reap_task(
    store: Arc<RwLock<CacheStore>>,
    reap_interval: Duration,
    max_age: Duration,
) -> ReaperHandle {
    assert!(!reap_interval.is_zero(), "reap interval must be non-zero");
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        info!(
            "Starting cache reaper with interval {:?} and max age {:?}",
            reap_interval, max_age
        );

        let mut ticker = tokio::time::interval_at(Instant::now() + reap_interval, reap_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = store.write().await;
                        let removed = guard.reap_stale(max_age, Instant::now());
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(
                            "Cache reap: removed {} stale entries, {} remain",
                            removed, remaining
                        );
                    } else {
                        debug!("Cache reap: no stale entries found");
                    }
                }
                _ = shutdown_rx.recv() => {
                    debug!("Cache reaper shutting down");
                    break;
                }
            }
        }
    });

    ReaperHandle { task, shutdown_tx }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store() -> Arc<RwLock<CacheStore>> {
        Arc::new(RwLock::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_stale_entries() {
        let store = shared_store();
        store
            .write()
            .await
            .insert("expire_soon".to_string(), Arc::from(&b"value"[..]));

        let handle = spawn_reap_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_millis(10),
        );

        // Second tick at 20ms sees an age of 20ms > 10ms.
        tokio::time::sleep(Duration::from_millis(25)).await;

        assert!(
            store.read().await.lookup("expire_soon").is_none(),
            "Stale entry should have been reaped"
        );
        assert_eq!(store.read().await.stats().reaped, 1);
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = shared_store();
        store
            .write()
            .await
            .insert("long_lived".to_string(), Arc::from(&b"value"[..]));

        let handle = spawn_reap_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::from_secs(3600),
        );

        tokio::time::sleep(Duration::from_millis(55)).await;

        let value = store.read().await.lookup("long_lived");
        assert_eq!(value.as_deref(), Some(&b"value"[..]));
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_reaper_stops_on_shutdown() {
        let handle =
            spawn_reap_task(shared_store(), Duration::from_secs(1), Duration::from_secs(1));
        assert!(handle.is_running());

        handle.shutdown();
        handle.shutdown();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_running(), "Reaper should stop after shutdown");
    }

    #[tokio::test]
    #[should_panic(expected = "reap interval must be non-zero")]
    async fn test_zero_interval_panics_in_caller() {
        let _handle = spawn_reap_task(shared_store(), Duration::ZERO, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_reaper_aborted_on_drop() {
        let store = shared_store();
        let handle = spawn_reap_task(store.clone(), Duration::from_secs(1), Duration::from_secs(1));
        drop(handle);

        tokio::time::sleep(Duration::from_millis(100)).await;
        // The aborted task released its clone of the store.
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
