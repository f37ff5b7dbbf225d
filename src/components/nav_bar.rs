//! Navigation Bar Component
//!
//! Tab bar switching between the app's pages.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Tasks,
    TasksSearch,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Tasks, Page::TasksSearch];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tasks => "Tasks",
            Page::TasksSearch => "Tasks (search)",
        }
    }
}

#[component]
pub fn NavBar(current_page: ReadSignal<Page>, set_current_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Page::ALL
                .into_iter()
                .map(|page| {
                    let tab_class = move || {
                        if current_page.get() == page { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_current_page.set(page)>
                            {page.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
