//! Modal Component
//!
//! Overlay dialog. Clicking the backdrop or pressing Escape closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                on:click=move |_| open.set(false)
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        open.set(false);
                    }
                }
            >
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{title.get_value()}</h3>
                        <button class="modal-close" on:click=move |_| open.set(false) aria-label="Close">"×"</button>
                    </div>
                    <div class="modal-body">{children.with_value(|children| children())}</div>
                </div>
            </div>
        </Show>
    }
}
