//! Task Modals
//!
//! Create, update and delete dialogs driven by the store's pending flags.

use leptos::prelude::*;

use crate::components::{Modal, TaskForm};
use crate::store::{use_task_actions, TasksStateStoreFields};

/// The three task dialogs. `on_success` runs after any mutation commits.
#[component]
pub fn TaskModals(#[prop(into)] on_success: Callback<()>) -> impl IntoView {
    let actions = use_task_actions();
    let store = actions.store();
    let loading = Signal::derive(move || store.confirm_loading().get());
    let error = Signal::derive(move || store.error().get());

    view! {
        // Adding
        <Modal
            open=Signal::derive(move || store.pending_add().get())
            title="Creating"
            loading=loading
            error=error
            on_cancel=move |_: ()| actions.create_cancel()
            on_confirm=move |_: ()| actions.create_submit(on_success)
        >
            <TaskForm />
        </Modal>

        // Updating
        <Modal
            open=Signal::derive(move || store.pending_update_id().get().is_some())
            title="Updating"
            loading=loading
            error=error
            on_cancel=move |_: ()| actions.update_cancel()
            on_confirm=move |_: ()| actions.update_submit(on_success)
        >
            <TaskForm />
        </Modal>

        // Deleting
        <Modal
            open=Signal::derive(move || store.pending_delete_id().get().is_some())
            title="Deleting"
            cancel_label="No"
            confirm_label="Yes"
            loading=loading
            error=error
            on_cancel=move |_: ()| actions.delete_cancel()
            on_confirm=move |_: ()| actions.delete_submit(on_success)
        >
            <p>"Do you want to delete this task?"</p>
        </Modal>
    }
}
