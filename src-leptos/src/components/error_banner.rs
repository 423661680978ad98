//! Inline error banner

use leptos::prelude::*;

/// Shows `message` while it is `Some`; the close button calls `on_dismiss`.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="alert alert--error" role="alert">
                <span>{move || message.get().unwrap_or_default()}</span>
                <button class="alert-close" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}
