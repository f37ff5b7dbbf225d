//! Tasks View
//!
//! Task list with create/update/delete dialogs. Paging refetches straight
//! away; columns are not sortable.

use leptos::prelude::*;

use crate::components::{TaskModals, TaskTable};
use crate::store::{use_task_actions, TasksStateStoreFields};

#[component]
pub fn TasksView() -> impl IntoView {
    let actions = use_task_actions();
    let store = actions.store();
    let config = actions.config();

    // Load first page on mount
    Effect::new(move |_| actions.fetch(None));

    let get_list = Callback::new(move |_: ()| actions.fetch(None));

    view! {
        <div class="tasks-view">
            <TaskModals on_success=get_list />

            <div class="container">
                <div class="tasks-header">
                    <h2>"Tasks"</h2>
                    <button class="btn primary" on:click=move |_| actions.create_start()>"+ New task"</button>
                </div>
                {move || store.fetch_error().get().map(|message| view! { <p class="fetch-error">{message}</p> })}
                <TaskTable
                    data=Signal::derive(move || store.table_data().get().data)
                    pagination=Signal::derive(move || store.table_data().get().pagination)
                    size_per_page_list=config.size_per_page_list.clone()
                    on_page_change=move |page: usize| {
                        let query = store.last_query().get_untracked().with_page(page);
                        actions.fetch(Some(query));
                    }
                    on_size_per_page_change=move |size: usize| {
                        let query = store.last_query().get_untracked().with_size_per_page(size);
                        actions.fetch(Some(query));
                    }
                    on_edit=move |id: u32| actions.update_start(id)
                    on_delete=move |id: u32| actions.delete_start(id)
                />
            </div>
        </div>
    }
}
