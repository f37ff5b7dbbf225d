//! Homepage Variants
//!
//! The two presentations compared by the homepage experiment. Each calls
//! `on_win` when its call-to-action is used.

use leptos::prelude::*;

#[component]
pub fn HomeVariantA(#[prop(into)] on_win: Callback<()>) -> impl IntoView {
    view! {
        <section class="variant variant-a">
            <h3>"Keep track of your tasks"</h3>
            <p>"Create, edit and remove tasks, then find them again with search and sorting."</p>
            <button class="btn primary" on:click=move |_| on_win.run(())>"Get started"</button>
        </section>
    }
}

#[component]
pub fn HomeVariantB(#[prop(into)] on_win: Callback<()>) -> impl IntoView {
    view! {
        <section class="variant variant-b">
            <h3>"Your tasks, one click away"</h3>
            <ul>
                <li>"Search by title"</li>
                <li>"Sort any column"</li>
                <li>"Page through large lists"</li>
            </ul>
            <button class="btn positive large" on:click=move |_| on_win.run(())>"Try it now"</button>
        </section>
    }
}
