//! Modal Dialog Component
//!
//! Overlay dialog with a header, body and cancel/confirm actions.

use leptos::prelude::*;

/// Modal dialog
///
/// Clicking the backdrop or pressing Escape cancels, unless a mutation is
/// in flight. Both action buttons are disabled while `loading` is set.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    #[prop(default = "Save")] confirm_label: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Take focus when shown so Escape works without clicking first
    Effect::new(move |_| {
        if open.get() {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
    });

    let dismiss = move || {
        if !loading.get_untracked() {
            on_cancel.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| dismiss()>
                <div
                    class="modal"
                    role="dialog"
                    node_ref=dialog_ref
                    tabindex="-1"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            dismiss();
                        }
                    }
                >
                    <div class="modal-header">
                        <h3>{title}</h3>
                        <button class="modal-close" title="Close" on:click=move |_| dismiss()>"×"</button>
                    </div>
                    <div class="modal-content">{children()}</div>
                    {move || error.get().map(|message| view! { <p class="modal-error">{message}</p> })}
                    <div class="modal-actions">
                        <button
                            class="btn negative"
                            disabled=move || loading.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            {cancel_label}
                        </button>
                        <button
                            class="btn positive"
                            disabled=move || loading.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            "✓ " {confirm_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
