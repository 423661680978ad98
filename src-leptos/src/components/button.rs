//! Primary action button with a loading state

use leptos::prelude::*;

#[component]
pub fn Button(
    /// Button text content
    #[prop(into)]
    text: String,
    /// Text shown while `loading` is true
    #[prop(optional, into)]
    loading_text: Option<String>,
    /// Disables the button and swaps in `loading_text`
    #[prop(into)]
    loading: Signal<bool>,
    /// Click handler
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let loading_text = loading_text.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <button
            class=move || {
                let loading_class = if loading.get() { "btn--loading" } else { "" };
                format!("btn btn--primary {}", loading_class)
            }
            disabled=move || loading.get()
            on:click=move |_| on_click()
        >
            {move || if loading.get() { loading_text.clone() } else { text.clone() }}
        </button>
    }
}
