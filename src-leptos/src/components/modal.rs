//! Modal dialog hosting arbitrary content

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.get_value()}</h3>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        {children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
