//! Implements `Timer`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;


/// Schedules cancellable one-shot countdowns.
///
/// A countdown waits for a given number of milliseconds on its own
/// thread and then raises a shared flag. It can be cancelled at any
/// moment before it expires, in which case the flag is guaranteed to
/// stay untouched. At most one countdown is scheduled at a time --
/// scheduling a new one cancels the previous one.
pub struct Timer {
    task: Option<Countdown>,
}

impl Timer {
    /// Creates a new instance with no scheduled countdown.
    pub fn new() -> Timer {
        Timer { task: None }
    }

    /// Schedules a countdown that sets `flag` after `delay` milliseconds.
    pub fn schedule(&mut self, delay: u64, flag: Arc<AtomicBool>) {
        self.cancel();
        let (cancel_tx, cancel_rx) = channel();
        let handle = thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) =
                cancel_rx.recv_timeout(Duration::from_millis(delay))
            {
                flag.store(true, Ordering::Relaxed);
            }
        });
        self.task = Some(Countdown {
            cancel_tx: cancel_tx,
            handle: handle,
        });
    }

    /// Cancels the scheduled countdown, if any, and reclaims its
    /// thread.
    ///
    /// When this method returns, the flag will not be raised anymore.
    /// A countdown that has already expired is merely reclaimed.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel_tx.send(()).ok();
            task.handle.join().ok();
        }
    }

    /// Reclaims the thread of an expired countdown.
    ///
    /// Countdowns that are still running are left alone.
    pub fn purge(&mut self) {
        if self.task.as_ref().map_or(false, |t| t.handle.is_finished()) {
            if let Some(task) = self.task.take() {
                task.handle.join().ok();
            }
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.cancel();
    }
}


/// A scheduled countdown task.
struct Countdown {
    cancel_tx: Sender<()>,
    handle: thread::JoinHandle<()>,
}
