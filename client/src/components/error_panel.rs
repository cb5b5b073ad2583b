//! Failure message with a retry button, shown when a view's fetch fails.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <p class="error-panel__message">{message}</p>
            <button class="btn btn--danger" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
