//! Home View
//!
//! Landing page running the homepage experiment, with buttons that force
//! either variant.

use leptos::prelude::*;

use crate::components::{HomeVariantA, HomeVariantB};
use crate::experiment::use_experiment;

#[component]
pub fn HomeView(
    /// Called after the call-to-action is used
    #[prop(into)] on_start: Callback<()>,
) -> impl IntoView {
    let experiment = use_experiment();
    let win = move |_: ()| {
        experiment.win();
        on_start.run(());
    };

    // Report each variant once it is on screen
    Effect::new(move |_| {
        let _ = experiment.active_variant();
        experiment.played();
    });
    on_cleanup(move || experiment.hidden());

    let variant_button = move |name: &'static str| {
        view! {
            <button
                class=move || if experiment.active_variant() == name { "btn secondary active" } else { "btn secondary" }
                on:click=move |_| experiment.set_active_variant(name)
            >
                "Variant " {name}
            </button>
        }
    };

    view! {
        <div class="container home">
            <h2>
                "Task manager demo "
                <span class="button-group">
                    {variant_button("A")}
                    <span class="or">"or"</span>
                    {variant_button("B")}
                </span>
            </h2>

            <p class="experiment-info">
                {move || format!("{}: showing variant {}", experiment.name(), experiment.active_variant())}
            </p>

            {move || match experiment.active_variant().as_str() {
                "B" => view! { <HomeVariantB on_win=win /> }.into_any(),
                _ => view! { <HomeVariantA on_win=win /> }.into_any(),
            }}
        </div>
    }
}
