//! WASM Debounce Utilities
//!
//! Coalesces bursts of triggers into a single call that runs once the
//! triggers have been quiet for a fixed delay.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub mod manual;

pub use manual::ManualScheduler;

/// Something that can run a task after a delay.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser scheduler backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// Debounced callback with at most one pending run.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    handle: RefCell<Option<S::Handle>>,
    // Set while a scheduled run has neither fired nor been cancelled
    armed: Rc<Cell<bool>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            callback: Rc::new(callback),
            handle: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Restart the quiet period. Any run scheduled earlier is dropped.
    pub fn trigger(&self) {
        let callback = self.callback.clone();
        let armed = self.armed.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                armed.set(false);
                callback();
            }),
        );
        // Replacing the old handle drops it, which cancels the old run.
        self.armed.set(true);
        self.handle.replace(Some(handle));
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&self) {
        if self.armed.replace(false) {
            tracing::debug!("debounce: pending run cancelled");
        }
        self.handle.replace(None);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(scheduler: &ManualScheduler, delay_ms: u32) -> (Debouncer<ManualScheduler>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let debouncer = Debouncer::new(scheduler.clone(), delay_ms, move || counter.set(counter.get() + 1));
        (debouncer, calls)
    }

    #[test]
    fn test_burst_collapses_to_one_call() {
        let clock = ManualScheduler::new();
        let (debouncer, calls) = counting(&clock, 300);

        for _ in 0..5 {
            debouncer.trigger();
            clock.advance(100);
        }
        assert_eq!(calls.get(), 0);
        assert!(debouncer.is_pending());

        clock.advance(200);
        assert_eq!(calls.get(), 1);
        assert!(!debouncer.is_pending());

        clock.advance(1_000);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fires_exactly_at_delay() {
        let clock = ManualScheduler::new();
        let (debouncer, calls) = counting(&clock, 300);

        debouncer.trigger();
        clock.advance(299);
        assert_eq!(calls.get(), 0);
        clock.advance(1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_separate_quiet_periods_fire_separately() {
        let clock = ManualScheduler::new();
        let (debouncer, calls) = counting(&clock, 300);

        debouncer.trigger();
        clock.advance(300);
        debouncer.trigger();
        clock.advance(300);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_cancel_prevents_run() {
        let clock = ManualScheduler::new();
        let (debouncer, calls) = counting(&clock, 300);

        debouncer.trigger();
        clock.advance(100);
        debouncer.cancel();
        clock.advance(1_000);
        assert_eq!(calls.get(), 0);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_drop_prevents_run() {
        let clock = ManualScheduler::new();
        let (debouncer, calls) = counting(&clock, 300);

        debouncer.trigger();
        drop(debouncer);
        clock.advance(1_000);
        assert_eq!(calls.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_at_most_one_pending_task() {
        let clock = ManualScheduler::new();
        let (debouncer, _calls) = counting(&clock, 300);

        debouncer.trigger();
        debouncer.trigger();
        debouncer.trigger();
        assert_eq!(clock.pending(), 1);
    }
}
