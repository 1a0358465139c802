//! Debounced values
//!
//! [`Debounced`] holds a committed value that follows its input after a
//! quiet period: every [`Debounced::set`] restarts the timer and only the
//! last value is committed (trailing edge, no leading fire, no queue).
//! [`Debounced::set_now`] skips the wait and drops whatever was pending.
//!
//! [`debounce_stream`] is the same rule as a stream adapter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct Timer {
    /// Bumped by every `set`/`set_now`; a timer only commits its own ticket
    ticket: u64,
    handle: Option<JoinHandle<()>>,
}

#[derive(Debug)]
struct Inner<T> {
    delay: Duration,
    committed: watch::Sender<T>,
    generation: AtomicU64,
    timer: Mutex<Timer>,
}

impl<T> Inner<T> {
    fn timer(&self) -> MutexGuard<'_, Timer> {
        self.timer.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Caller holds the timer lock
    fn publish(&self, value: T) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.committed.send_replace(value);
    }

    fn commit_if_current(&self, ticket: u64, value: T) {
        let timer = self.timer();
        if timer.ticket == ticket {
            self.publish(value);
        }
    }
}

/// A value committed after `delay` without further changes
///
/// Must be used inside a tokio runtime. Dropping it cancels the pending
/// timer; the pending value is discarded.
#[derive(Debug)]
pub struct Debounced<T> {
    inner: Arc<Inner<T>>,
}

impl<T: Clone + Send + Sync + 'static> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        let (committed, _) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                delay,
                committed,
                generation: AtomicU64::new(0),
                timer: Mutex::new(Timer::default()),
            }),
        }
    }

    /// Schedule `value`, restarting the timer
    pub fn set(&self, value: T) {
        let mut timer = self.inner.timer();
        timer.ticket += 1;
        if let Some(handle) = timer.handle.take() {
            handle.abort();
        }

        let ticket = timer.ticket;
        let delay = self.inner.delay;
        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        timer.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.commit_if_current(ticket, value);
            }
        }));
    }

    /// Commit `value` immediately, cancelling any pending one
    pub fn set_now(&self, value: T) {
        let mut timer = self.inner.timer();
        timer.ticket += 1;
        if let Some(handle) = timer.handle.take() {
            handle.abort();
        }
        self.inner.publish(value);
    }

    /// Drop the pending value, if any, without committing anything
    pub fn cancel(&self) {
        let mut timer = self.inner.timer();
        timer.ticket += 1;
        if let Some(handle) = timer.handle.take() {
            handle.abort();
        }
    }

    /// Whether a value is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.inner
            .timer()
            .handle
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    pub fn current(&self) -> T {
        self.inner.committed.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.committed.subscribe()
    }

    /// Number of commits so far
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.timer().handle.take() {
            handle.abort();
        }
    }
}

/// Debounce a stream: emit an item only after `delay` passes with no newer
/// item. When the input ends, the last pending item is flushed at once.
pub fn debounce_stream<S>(input: S, delay: Duration) -> impl Stream<Item = S::Item>
where
    S: Stream + Unpin,
{
    futures::stream::unfold(
        (input, None::<S::Item>, false),
        move |(mut input, mut pending, ended)| async move {
            if ended {
                return None;
            }
            loop {
                match pending.take() {
                    None => match input.next().await {
                        Some(item) => pending = Some(item),
                        None => return None,
                    },
                    Some(item) => {
                        tokio::select! {
                            next = input.next() => match next {
                                Some(newer) => pending = Some(newer),
                                None => return Some((item, (input, None, true))),
                            },
                            () = tokio::time::sleep(delay) => {
                                return Some((item, (input, None, false)));
                            }
                        }
                    }
                }
            }
        },
    )
}
