//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list views
//! only read this state and signal intent through [`TaskActions`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::config::AppConfig;
use crate::models::{SearchOptions, TableData, TaskDraft};

/// Which mutation a submit belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    Add,
    Update,
    Delete,
}

/// Task list view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TasksState {
    /// Current page of tasks and its paging info
    pub table_data: TableData,
    /// Create modal open
    pub pending_add: bool,
    /// Task being edited (Some = update modal open)
    pub pending_update_id: Option<u32>,
    /// Task awaiting delete confirmation (Some = delete modal open)
    pub pending_delete_id: Option<u32>,
    /// A mutation is in flight; modal buttons are disabled
    pub confirm_loading: bool,
    /// Create/update form contents
    pub form: TaskDraft,
    /// Options of the most recently issued fetch
    pub last_query: SearchOptions,
    /// Message from the last failed create/update/delete
    pub error: Option<String>,
    /// Message from the last failed list fetch
    pub fetch_error: Option<String>,
    /// Sequence number of the last issued fetch
    pub fetch_seq: u64,
    /// Sequence number of the last fetch whose result was applied
    pub applied_seq: u64,
}

impl TasksState {
    pub fn is_fetching(&self) -> bool {
        self.applied_seq < self.fetch_seq
    }

    pub fn create_start(&mut self) {
        self.pending_add = true;
        self.form = TaskDraft::default();
        self.error = None;
    }

    pub fn create_cancel(&mut self) {
        self.pending_add = false;
        self.error = None;
    }

    /// Open the update modal, pre-filling the form from the visible row.
    /// Returns false when the row is not on the current page.
    pub fn update_start(&mut self, id: u32) -> bool {
        self.pending_update_id = Some(id);
        self.error = None;
        match self.table_data.data.iter().find(|t| t.id == id) {
            Some(task) => {
                self.form = TaskDraft::from_task(task);
                true
            }
            None => {
                self.form = TaskDraft::default();
                false
            }
        }
    }

    pub fn update_cancel(&mut self) {
        self.pending_update_id = None;
        self.error = None;
    }

    pub fn delete_start(&mut self, id: u32) {
        self.pending_delete_id = Some(id);
        self.error = None;
    }

    pub fn delete_cancel(&mut self) {
        self.pending_delete_id = None;
        self.error = None;
    }

    /// Mark a mutation in flight. Returns false if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.confirm_loading {
            return false;
        }
        self.confirm_loading = true;
        self.error = None;
        true
    }

    /// Close the modal on success; keep it open with a message on failure.
    pub fn finish_submit(&mut self, kind: Pending, outcome: Result<(), String>) {
        self.confirm_loading = false;
        match outcome {
            Ok(()) => {
                match kind {
                    Pending::Add => self.pending_add = false,
                    Pending::Update => self.pending_update_id = None,
                    Pending::Delete => self.pending_delete_id = None,
                }
                self.form = TaskDraft::default();
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn issue_fetch(&mut self, options: SearchOptions) -> u64 {
        self.fetch_seq += 1;
        self.last_query = options;
        self.fetch_seq
    }

    /// Apply a fetch result unless a later-issued fetch already landed.
    pub fn apply_fetch(&mut self, seq: u64, table: TableData) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.table_data = table;
        self.fetch_error = None;
        true
    }

    pub fn fetch_failed(&mut self, seq: u64, message: String) {
        if seq > self.applied_seq {
            self.applied_seq = seq;
            self.fetch_error = Some(message);
        }
    }
}

/// Type alias for the store
pub type TasksStore = Store<TasksState>;

/// Action dispatchers over the task store
#[derive(Clone, Copy)]
pub struct TaskActions {
    store: TasksStore,
    config: StoredValue<AppConfig>,
}

/// Get the task actions from context
pub fn use_task_actions() -> TaskActions {
    expect_context::<TaskActions>()
}

impl TaskActions {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(TasksState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn store(&self) -> TasksStore {
        self.store
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Fetch one page. `None` requests the first page with default options.
    pub fn fetch(&self, options: Option<SearchOptions>) {
        let config = self.config();
        let options = options.unwrap_or_else(|| SearchOptions::first_page(config.default_size_per_page));
        let store = self.store;
        let seq = store.write().issue_fetch(options.clone());
        tracing::debug!(seq, ?options, "fetching tasks");
        spawn_local(async move {
            match commands::list_tasks(&config, &options).await {
                Ok(table) => {
                    if !store.write().apply_fetch(seq, table) {
                        tracing::debug!(seq, "dropped stale task page");
                    }
                }
                Err(e) => {
                    tracing::error!("failed to load tasks: {}", e);
                    store.write().fetch_failed(seq, e.to_string());
                }
            }
        });
    }

    // ========================
    // Create
    // ========================

    pub fn create_start(&self) {
        self.store.write().create_start();
    }

    pub fn create_cancel(&self) {
        self.store.write().create_cancel();
    }

    pub fn create_submit(&self, on_success: Callback<()>) {
        if !self.store.write().begin_submit() {
            return;
        }
        let store = self.store;
        let config = self.config();
        let draft = store.form().get_untracked();
        spawn_local(async move {
            let outcome = commands::create_task(&config, &draft).await;
            match &outcome {
                Ok(task) => tracing::info!("created task {}", task.id),
                Err(e) => tracing::error!("create failed: {}", e),
            }
            let ok = outcome.is_ok();
            store.write().finish_submit(Pending::Add, outcome.map(|_| ()).map_err(|e| e.to_string()));
            if ok {
                on_success.run(());
            }
        });
    }

    // ========================
    // Update
    // ========================

    pub fn update_start(&self, id: u32) {
        if self.store.write().update_start(id) {
            return;
        }
        // Row not on the current page; load it directly
        let store = self.store;
        let config = self.config();
        spawn_local(async move {
            match commands::get_task(&config, id).await {
                Ok(Some(task)) if store.pending_update_id().get_untracked() == Some(id) => {
                    store.form().set(TaskDraft::from_task(&task));
                }
                Ok(_) => tracing::warn!("task {} vanished before editing", id),
                Err(e) => tracing::error!("failed to load task {}: {}", id, e),
            }
        });
    }

    pub fn update_cancel(&self) {
        self.store.write().update_cancel();
    }

    pub fn update_submit(&self, on_success: Callback<()>) {
        let Some(id) = self.store.pending_update_id().get_untracked() else {
            return;
        };
        if !self.store.write().begin_submit() {
            return;
        }
        let store = self.store;
        let config = self.config();
        let draft = store.form().get_untracked();
        spawn_local(async move {
            let outcome = commands::update_task(&config, id, &draft).await;
            match &outcome {
                Ok(task) => tracing::info!("updated task {}", task.id),
                Err(e) => tracing::error!("update of task {} failed: {}", id, e),
            }
            let ok = outcome.is_ok();
            store.write().finish_submit(Pending::Update, outcome.map(|_| ()).map_err(|e| e.to_string()));
            if ok {
                on_success.run(());
            }
        });
    }

    // ========================
    // Delete
    // ========================

    pub fn delete_start(&self, id: u32) {
        self.store.write().delete_start(id);
    }

    pub fn delete_cancel(&self) {
        self.store.write().delete_cancel();
    }

    pub fn delete_submit(&self, on_success: Callback<()>) {
        let Some(id) = self.store.pending_delete_id().get_untracked() else {
            return;
        };
        if !self.store.write().begin_submit() {
            return;
        }
        let store = self.store;
        let config = self.config();
        spawn_local(async move {
            let outcome = commands::delete_task(&config, id).await;
            match &outcome {
                Ok(()) => tracing::info!("deleted task {}", id),
                Err(e) => tracing::error!("delete of task {} failed: {}", id, e),
            }
            let ok = outcome.is_ok();
            store.write().finish_submit(Pending::Delete, outcome.map_err(|e| e.to_string()));
            if ok {
                on_success.run(());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, Task};

    fn with_rows() -> TasksState {
        let mut state = TasksState::default();
        state.table_data = TableData {
            data: vec![
                Task { id: 1, title: "One".into(), description: "first".into() },
                Task { id: 2, title: "Two".into(), description: "second".into() },
            ],
            pagination: Pagination { page: 1, total: 2, size_per_page: 10 },
        };
        state
    }

    fn page(total: usize) -> TableData {
        TableData { data: Vec::new(), pagination: Pagination { page: 1, total, size_per_page: 10 } }
    }

    #[test]
    fn test_create_start_then_cancel() {
        let mut state = TasksState::default();
        state.create_start();
        assert!(state.pending_add);

        state.create_cancel();
        assert!(!state.pending_add);
        assert!(!state.confirm_loading);
    }

    #[test]
    fn test_create_submit_success_closes_modal() {
        let mut state = TasksState::default();
        state.create_start();
        state.form.title = "New".into();

        assert!(state.begin_submit());
        assert!(state.confirm_loading);
        state.finish_submit(Pending::Add, Ok(()));

        assert!(!state.pending_add);
        assert!(!state.confirm_loading);
        assert_eq!(state.form, TaskDraft::default());
    }

    #[test]
    fn test_failed_submit_keeps_modal_open() {
        let mut state = with_rows();
        state.delete_start(2);
        assert!(state.begin_submit());
        state.finish_submit(Pending::Delete, Err("task 2 not found".into()));

        assert_eq!(state.pending_delete_id, Some(2));
        assert!(!state.confirm_loading);
        assert_eq!(state.error.as_deref(), Some("task 2 not found"));
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut state = TasksState::default();
        assert!(state.begin_submit());
        assert!(!state.begin_submit());
    }

    #[test]
    fn test_update_start_prefills_form_from_row() {
        let mut state = with_rows();
        assert!(state.update_start(2));
        assert_eq!(state.pending_update_id, Some(2));
        assert_eq!(state.form.title, "Two");
        assert_eq!(state.form.description, "second");

        state.update_cancel();
        assert_eq!(state.pending_update_id, None);
    }

    #[test]
    fn test_update_start_for_row_off_page() {
        let mut state = with_rows();
        assert!(!state.update_start(7));
        assert_eq!(state.pending_update_id, Some(7));
        assert_eq!(state.form, TaskDraft::default());
    }

    #[test]
    fn test_later_fetch_wins_over_stale_response() {
        let mut state = TasksState::default();
        let first = state.issue_fetch(SearchOptions::default());
        let second = state.issue_fetch(SearchOptions::default().with_page(2));
        assert!(state.is_fetching());

        assert!(state.apply_fetch(second, page(20)));
        assert!(!state.apply_fetch(first, page(10)));
        assert_eq!(state.table_data.pagination.total, 20);
        assert_eq!(state.last_query.page, 2);
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_fetch_failure_does_not_reach_modal_error() {
        let mut state = TasksState::default();
        state.create_start();
        let seq = state.issue_fetch(SearchOptions::default());
        state.fetch_failed(seq, "storage unavailable".into());

        assert_eq!(state.fetch_error.as_deref(), Some("storage unavailable"));
        assert_eq!(state.error, None);
        assert!(!state.is_fetching());

        let seq = state.issue_fetch(SearchOptions::default());
        assert!(state.apply_fetch(seq, page(3)));
        assert_eq!(state.fetch_error, None);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut state = TasksState::default();
        let first = state.issue_fetch(SearchOptions::default());
        let second = state.issue_fetch(SearchOptions::default());

        assert!(state.apply_fetch(first, page(1)));
        assert!(state.is_fetching());
        assert!(state.apply_fetch(second, page(2)));
        assert_eq!(state.table_data.pagination.total, 2);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::Task;
    use crate::repository::TaskRepository;
    use gloo_timers::future::TimeoutFuture;
    use leptos::task::Executor;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn setup(key: &str, repo: TaskRepository) -> TaskActions {
        let _ = Executor::init_wasm_bindgen();
        repo.save(key).expect("Failed to seed repository");
        TaskActions::new(AppConfig {
            tasks_key: key.into(),
            simulated_latency_ms: 0,
            ..AppConfig::default()
        })
    }

    fn counter() -> (Arc<AtomicU32>, Callback<()>) {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        (calls, Callback::new(move |_: ()| {
            c.fetch_add(1, Ordering::SeqCst);
        }))
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    #[wasm_bindgen_test]
    async fn test_create_submit_runs_on_success_once() {
        let key = "tasks-ui.test.create";
        let actions = setup(key, TaskRepository::default());
        let store = actions.store();
        let (calls, on_success) = counter();

        actions.create_start();
        store.form().set(TaskDraft { title: "Write tests".into(), description: "store".into() });
        actions.create_submit(on_success);
        assert!(store.confirm_loading().get_untracked());
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!store.pending_add().get_untracked());
        assert!(!store.confirm_loading().get_untracked());
        assert_eq!(TaskRepository::load(key).unwrap().len(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_create_cancel_does_not_submit() {
        let key = "tasks-ui.test.cancel";
        let actions = setup(key, TaskRepository::default());

        actions.create_start();
        assert!(actions.store().pending_add().get_untracked());
        actions.create_cancel();
        settle().await;

        assert!(!actions.store().pending_add().get_untracked());
        assert!(TaskRepository::load(key).unwrap().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_failed_update_skips_on_success() {
        let key = "tasks-ui.test.update-missing";
        let actions = setup(key, TaskRepository::default());
        let store = actions.store();
        let (calls, on_success) = counter();

        actions.update_start(99);
        settle().await;
        store.form().set(TaskDraft { title: "Ghost".into(), description: String::new() });
        actions.update_submit(on_success);
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.pending_update_id().get_untracked(), Some(99));
        assert!(!store.confirm_loading().get_untracked());
        assert!(store.error().get_untracked().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_delete_submit_then_refetch() {
        let key = "tasks-ui.test.delete";
        let actions = setup(key, TaskRepository::seeded());
        let store = actions.store();
        let (calls, on_success) = counter();

        actions.delete_start(1);
        actions.delete_submit(on_success);
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.pending_delete_id().get_untracked(), None);

        actions.fetch(None);
        settle().await;
        let table = store.table_data().get_untracked();
        assert!(table.data.iter().all(|t: &Task| t.id != 1));
        assert_eq!(table.pagination.total, TaskRepository::seeded().len() - 1);
    }

    #[wasm_bindgen_test]
    async fn test_fetch_applies_requested_page() {
        let key = "tasks-ui.test.fetch";
        let actions = setup(key, TaskRepository::seeded());
        let store = actions.store();

        actions.fetch(Some(SearchOptions::first_page(5).with_page(2)));
        settle().await;

        let table = store.table_data().get_untracked();
        assert_eq!(table.data.len(), 5);
        assert_eq!(table.pagination.page, 2);
        assert_eq!(store.applied_seq().get_untracked(), store.fetch_seq().get_untracked());
        assert_eq!(store.last_query().get_untracked().page, 2);
    }
}
