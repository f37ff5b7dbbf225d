//! Task Form Component
//!
//! Title/description inputs bound to the store's form draft.

use leptos::prelude::*;

use crate::store::{use_task_actions, TasksStateStoreFields};

#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_task_actions().store();
    let disabled = move || store.confirm_loading().get();

    view! {
        <form class="task-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <label>
                "Title"
                <input
                    type="text"
                    placeholder="What needs doing?"
                    disabled=disabled
                    prop:value=move || store.form().get().title
                    on:input=move |ev| store.form().write().title = event_target_value(&ev)
                />
            </label>
            <label>
                "Description"
                <textarea
                    rows="3"
                    disabled=disabled
                    prop:value=move || store.form().get().description
                    on:input=move |ev| store.form().write().description = event_target_value(&ev)
                ></textarea>
            </label>
        </form>
    }
}
