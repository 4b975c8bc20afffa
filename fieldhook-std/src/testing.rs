//! Testing utilities for fieldhook.
//!
//! This module provides handlers that make it easy to assert what a bus
//! dispatched and in which order.
//!
//! # Features
//!
//! - [`RecordingAction`]: An action handler that records every payload it receives
//! - [`OrderRecorder`]: Hands out handlers that log their id when called
//! - [`CountingAction`]: An action handler that counts invocations

use fieldhook_core::{ActionHook, BoxError, Message};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Recording Action
// ============================================================================

/// An action handler that records all payloads it receives.
///
/// # Example
///
/// ```rust
/// use fieldhook_std::{HookBus, testing::RecordingAction};
///
/// let recorder = RecordingAction::<u32>::new();
/// let bus = HookBus::new();
/// bus.add_action_hook::<u32, _>("test.number", recorder.clone(), 10);
///
/// bus.do_action("test.number", &7u32).unwrap();
/// assert_eq!(recorder.events(), vec![7]);
/// ```
pub struct RecordingAction<A> {
    events: Arc<Mutex<Vec<A>>>,
}

impl<A: Clone> RecordingAction<A> {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded payloads.
    pub fn events(&self) -> Vec<A> {
        lock(&self.events).clone()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        lock(&self.events).len()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        lock(&self.events).clear();
    }
}

impl<A: Clone> Default for RecordingAction<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for RecordingAction<A> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<A: Message + Clone> ActionHook<A> for RecordingAction<A> {
    fn on_action(&self, args: &A) -> Result<(), BoxError> {
        lock(&self.events).push(args.clone());
        Ok(())
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Records the order in which handlers run.
///
/// Each call to [`hook`](Self::hook) returns a handler tagged with an id; the
/// ids land in a shared log as the handlers fire.
#[derive(Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<usize>>>,
}

/// A handler produced by [`OrderRecorder::hook`].
#[derive(Clone)]
pub struct OrderHook {
    id: usize,
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderRecorder {
    /// Create a new recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that appends `id` to the log when it runs.
    pub fn hook(&self, id: usize) -> OrderHook {
        OrderHook {
            id,
            order: Arc::clone(&self.order),
        }
    }

    /// The ids logged so far.
    pub fn order(&self) -> Vec<usize> {
        lock(&self.order).clone()
    }
}

impl<A: Message> ActionHook<A> for OrderHook {
    fn on_action(&self, _args: &A) -> Result<(), BoxError> {
        lock(&self.order).push(self.id);
        Ok(())
    }
}

// ============================================================================
// Counting Action
// ============================================================================

/// An action handler that counts invocations.
#[derive(Clone, Default)]
pub struct CountingAction {
    count: Arc<AtomicUsize>,
}

impl CountingAction {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<A: Message> ActionHook<A> for CountingAction {
    fn on_action(&self, _args: &A) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
