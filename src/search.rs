//! Search Pipeline
//!
//! Holds the list view's [`SearchOptions`] and turns every title, sort and
//! paging change into one debounced fetch.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_debounce::{Debouncer, Scheduler};

use crate::models::{SearchOptions, SortField, SortOrder};

pub struct SearchController<S: Scheduler> {
    options: Rc<RefCell<SearchOptions>>,
    debouncer: Debouncer<S>,
}

impl<S: Scheduler> SearchController<S> {
    /// `fetch` receives the options as they are when the quiet period ends.
    pub fn new(
        scheduler: S,
        delay_ms: u32,
        initial: SearchOptions,
        fetch: impl Fn(SearchOptions) + 'static,
    ) -> Self {
        let options = Rc::new(RefCell::new(initial));
        let current = options.clone();
        let debouncer = Debouncer::new(scheduler, delay_ms, move || {
            let snapshot = current.borrow().clone();
            fetch(snapshot);
        });
        Self { options, debouncer }
    }

    pub fn options(&self) -> SearchOptions {
        self.options.borrow().clone()
    }

    fn change(&self, f: impl FnOnce(SearchOptions) -> SearchOptions) -> SearchOptions {
        let next = f(self.options());
        *self.options.borrow_mut() = next.clone();
        self.debouncer.trigger();
        next
    }

    pub fn set_title(&self, title: &str) -> SearchOptions {
        self.change(|o| o.with_title(title))
    }

    pub fn sort(&self, field: SortField, order: SortOrder) -> SearchOptions {
        self.change(|o| o.with_sort(field, order))
    }

    pub fn change_page(&self, page: usize) -> SearchOptions {
        self.change(|o| o.with_page(page))
    }

    pub fn change_size_per_page(&self, size_per_page: usize) -> SearchOptions {
        self.change(|o| o.with_size_per_page(size_per_page))
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drop any scheduled fetch. Called when the view goes away.
    pub fn teardown(&self) {
        self.debouncer.cancel();
    }
}
