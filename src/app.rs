//! Tasks Frontend App
//!
//! Page shell: navigation plus the home experiment and the two task list
//! views.

use leptos::prelude::*;

use crate::components::{HomeView, NavBar, Page, TasksSearchView, TasksView};
use crate::config::AppConfig;
use crate::experiment::ExperimentHandle;
use crate::store::TaskActions;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Home);

    match ExperimentHandle::init(&config.experiment) {
        Ok(experiment) => provide_context(experiment),
        Err(e) => tracing::error!("experiment disabled: {}", e),
    }
    let has_experiment = use_context::<ExperimentHandle>().is_some();

    provide_context(TaskActions::new(config));

    view! {
        <div class="app-layout">
            <NavBar current_page=current_page set_current_page=set_current_page />

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Home if has_experiment => view! {
                        <HomeView on_start=move |_: ()| set_current_page.set(Page::TasksSearch) />
                    }
                    .into_any(),
                    Page::Home => view! { <p class="notice">"Homepage experiment is misconfigured."</p> }.into_any(),
                    Page::Tasks => view! { <TasksView /> }.into_any(),
                    Page::TasksSearch => view! { <TasksSearchView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
