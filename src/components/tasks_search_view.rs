//! Tasks Search View
//!
//! Task list with a title filter, sortable columns and remote paging. Every
//! change goes through a [`SearchController`] so a burst of edits costs one
//! fetch.

use leptos::prelude::*;
use wasm_debounce::GlooScheduler;

use crate::components::{TaskModals, TaskTable};
use crate::models::{SearchOptions, SortField, SortOrder};
use crate::search::SearchController;
use crate::store::{use_task_actions, TasksStateStoreFields};

#[component]
pub fn TasksSearchView() -> impl IntoView {
    let actions = use_task_actions();
    let store = actions.store();
    let config = actions.config();

    let initial = SearchOptions::first_page(config.default_size_per_page);
    let (search_options, set_search_options) = signal(initial.clone());

    let controller = StoredValue::new_local(SearchController::new(
        GlooScheduler,
        config.debounce_ms,
        initial.clone(),
        move |options| actions.fetch(Some(options)),
    ));

    // A fetch must not fire against an unmounted view
    on_cleanup(move || {
        controller.try_with_value(|c| c.teardown());
    });

    Effect::new(move |_| actions.fetch(Some(initial.clone())));

    let get_list = Callback::new(move |_: ()| actions.fetch(Some(search_options.get_untracked())));

    view! {
        <div class="tasks-view">
            <TaskModals on_success=get_list />

            <div class="container">
                <div class="tasks-header">
                    <h2>"Tasks"</h2>
                    <input
                        class="search"
                        type="search"
                        placeholder="Search by title..."
                        prop:value=move || search_options.get().title
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            if let Some(next) = controller.try_with_value(|c| c.set_title(&title)) {
                                set_search_options.set(next);
                            }
                        }
                    />
                    <Show when=move || store.read().is_fetching()>
                        <span class="loading">"Loading…"</span>
                    </Show>
                    <button class="btn primary" on:click=move |_| actions.create_start()>"+ New task"</button>
                </div>
                {move || store.fetch_error().get().map(|message| view! { <p class="fetch-error">{message}</p> })}
                <TaskTable
                    data=Signal::derive(move || store.table_data().get().data)
                    pagination=Signal::derive(move || store.table_data().get().pagination)
                    size_per_page_list=config.size_per_page_list.clone()
                    sort=Signal::derive(move || {
                        let o = search_options.get();
                        o.sort_name.map(|field| (field, o.sort_order))
                    })
                    on_sort=move |(field, order): (SortField, SortOrder)| {
                        if let Some(next) = controller.try_with_value(|c| c.sort(field, order)) {
                            set_search_options.set(next);
                        }
                    }
                    on_page_change=move |page: usize| {
                        if let Some(next) = controller.try_with_value(|c| c.change_page(page)) {
                            set_search_options.set(next);
                        }
                    }
                    on_size_per_page_change=move |size: usize| {
                        if let Some(next) = controller.try_with_value(|c| c.change_size_per_page(size)) {
                            set_search_options.set(next);
                        }
                    }
                    on_edit=move |id: u32| actions.update_start(id)
                    on_delete=move |id: u32| actions.delete_start(id)
                />
            </div>
        </div>
    }
}
