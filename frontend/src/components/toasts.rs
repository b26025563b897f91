//! Transient notification stack.
//!
//! Entries are added and expired by [`crate::services::ToastNotifier`];
//! this component only renders them, newest at the bottom.

use leptos::*;

use crate::types::Toast;

#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.css_class()>
                            <span class="toast-icon">{toast.level.emoji()}</span>
                            <span class="toast-time">"[" {toast.timestamp.clone()} "] "</span>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
