//! Adapters for external services: geocoding providers and
//! HTML rendering of addresses.

pub mod google_maps;
pub mod opencage;
pub mod render;

use std::{sync::mpsc, thread, time::Duration};

/// Runs a blocking lookup on a separate thread and gives up after `timeout`.
///
/// The providers are called through blocking clients and there is no async
/// runtime to cancel them. After a timeout the worker thread is detached and
/// finishes when the request itself ends.
fn with_timeout<T, F>(timeout: Duration, f: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> Option<T> + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    thread::spawn(move || {
        // The receiver is gone after a timeout
        let _ = tx.send(f());
    });
    match rx.recv_timeout(timeout) {
        Ok(res) => res,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            log::warn!("Geocoding request timed out after {timeout:?}");
            None
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            log::warn!("Geocoding request aborted");
            None
        }
    }
}
