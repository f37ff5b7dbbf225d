//! Virtual-clock scheduler.
//!
//! Runs scheduled tasks only when the clock is advanced by hand, which makes
//! debounce timing deterministic outside the browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Scheduler;

struct Entry {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<Entry>>,
}

/// Scheduler driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<Clock>,
}

/// Cancels its task when dropped.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms.get()
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .queue
            .borrow()
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    /// Move the clock forward, running every task that falls due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.clock.now_ms.get() + ms;
        loop {
            let next = {
                let mut queue = self.clock.queue.borrow_mut();
                queue.retain(|e| !e.cancelled.get());
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due_ms <= target)
                    .min_by_key(|(_, e)| (e.due_ms, e.seq))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            match next {
                Some(entry) => {
                    self.clock.now_ms.set(entry.due_ms);
                    // The queue borrow is released so the task may schedule again.
                    (entry.task)();
                }
                None => break,
            }
        }
        self.clock.now_ms.set(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.clock.next_seq.get();
        self.clock.next_seq.set(seq + 1);
        self.clock.queue.borrow_mut().push(Entry {
            due_ms: self.clock.now_ms.get() + u64::from(delay_ms),
            seq,
            cancelled: cancelled.clone(),
            task,
        });
        ManualHandle { cancelled }
    }
}
