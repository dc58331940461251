//! # Debouncer
//!
//! Coalesces a burst of inputs into one published value.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  push("d")   push("do")   push("dog")                                   │
//! │     │            │            │                                         │
//! │     ▼            ▼            ▼                                         │
//! │  [timer]──x   [timer]──x   [timer]────── window ──────► publish("dog")  │
//! │  aborted      aborted      survives                                     │
//! │                                                                         │
//! │  Each push aborts the pending task and schedules a fresh one with a     │
//! │  deadline fixed at push time. Only the surviving task publishes.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The published value lives in a `watch` channel, so readers always see the
//! last settled value and can await changes.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Cancellable delayed publisher for one value.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    input: T,
    published: Arc<watch::Sender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates a debouncer whose published and raw values both start at
    /// `initial`.
    pub fn new(initial: T, window: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Debouncer {
            window,
            input: initial,
            published: Arc::new(tx),
            pending: None,
        }
    }

    /// The quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records a new raw input and restarts the window.
    ///
    /// A zero window publishes immediately. Outside a tokio runtime there is
    /// nothing to schedule on, so the value is published immediately too.
    pub fn push(&mut self, value: T) {
        self.cancel_pending();
        self.input = value.clone();

        if self.window.is_zero() {
            publish(&self.published, value);
            return;
        }

        let Ok(handle) = Handle::try_current() else {
            debug!("No runtime for debounce timer; publishing immediately");
            publish(&self.published, value);
            return;
        };

        let deadline = Instant::now() + self.window;
        let published = Arc::clone(&self.published);
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            publish(&published, value);
        }));
    }

    /// Publishes the latest raw input now, skipping the rest of the window.
    pub fn flush(&mut self) {
        self.cancel_pending();
        publish(&self.published, self.input.clone());
    }

    /// The last published value.
    pub fn current(&self) -> T {
        self.published.borrow().clone()
    }

    /// The latest raw input, published or not.
    pub fn input(&self) -> &T {
        &self.input
    }

    /// Subscribes to published values.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.published.subscribe()
    }

    /// Whether a timer is still waiting to publish.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Waits for the pending timer, if any, to publish.
    pub async fn settled(&mut self) {
        if let Some(pending) = self.pending.take() {
            // An aborted task resolves with a JoinError; there is nothing to publish then.
            let _ = pending.await;
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

fn publish<T: PartialEq>(tx: &watch::Sender<T>, value: T) {
    tx.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}
