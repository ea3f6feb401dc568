//! Cancel-and-rearm debouncer.
//!
//! Coalesces bursts of `schedule` calls into a single callback invocation
//! after a quiet period. A schedule while a countdown is pending replaces the
//! pending deadline (cancel-before-reschedule); a superseded countdown never
//! fires. Dropping the debouncer cancels any pending countdown and joins the
//! worker, so no callback runs against torn-down state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::trace;

/// Recover the guard from a poisoned lock; the protected state is a plain
/// deadline and stays consistent across a panic.
pub(crate) fn lock_unpoisoned<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Shared {
    state: Mutex<State>,
    wakeup: Condvar,
    fired: AtomicU64,
}

struct State {
    deadline: Option<Instant>,
    shutdown: bool,
}

pub struct Debouncer {
    quiet: Duration,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Spawn the worker. `callback` runs on the worker thread, with no
    /// debouncer lock held, each time a countdown elapses uninterrupted.
    pub fn new<F>(quiet: Duration, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                deadline: None,
                shutdown: false,
            }),
            wakeup: Condvar::new(),
            fired: AtomicU64::new(0),
        });
        let worker_shared = Arc::clone(&shared);
        let worker = std::thread::spawn(move || run_worker(&worker_shared, &callback));
        Self {
            quiet,
            shared,
            worker: Some(worker),
        }
    }

    /// (Re)start the countdown. Any pending deadline is replaced.
    pub fn schedule(&self) {
        let mut state = lock_unpoisoned(&self.shared.state);
        state.deadline = Some(Instant::now() + self.quiet);
        trace!(quiet_ms = self.quiet.as_millis() as u64, "countdown armed");
        self.shared.wakeup.notify_one();
    }

    /// Drop any pending countdown without firing it.
    pub fn cancel(&self) {
        let mut state = lock_unpoisoned(&self.shared.state);
        state.deadline = None;
        self.shared.wakeup.notify_one();
    }

    /// True while a countdown is armed.
    pub fn is_pending(&self) -> bool {
        lock_unpoisoned(&self.shared.state).deadline.is_some()
    }

    /// Number of times the countdown has fired since construction.
    pub fn fire_count(&self) -> u64 {
        self.shared.fired.load(Ordering::SeqCst)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        {
            let mut state = lock_unpoisoned(&self.shared.state);
            state.deadline = None;
            state.shutdown = true;
            self.shared.wakeup.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<F>(shared: &Shared, callback: &F)
where
    F: Fn(),
{
    let mut state = lock_unpoisoned(&shared.state);
    loop {
        if state.shutdown {
            return;
        }
        match state.deadline {
            None => {
                state = shared
                    .wakeup
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    state.deadline = None;
                    drop(state);
                    shared.fired.fetch_add(1, Ordering::SeqCst);
                    callback();
                    state = lock_unpoisoned(&shared.state);
                } else {
                    state = shared
                        .wakeup
                        .wait_timeout(state, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0;
                }
            }
        }
    }
}
