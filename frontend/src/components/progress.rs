use leptos::*;
use seamap_workflow::PROGRESS_DONE;

use crate::types::BrowserState;

/// Simulated upload progress bar.
#[component]
pub fn ProgressSection(state: RwSignal<BrowserState>) -> impl IntoView {
    let percent = move || state.with(|s| s.progress_percent);

    view! {
        <div class="progress-section show">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", percent())
                ></div>
            </div>
            <p class="progress-label">
                {move || if percent() < PROGRESS_DONE { "Processing data..." } else { "Generating map..." }}
            </p>
        </div>
    }
}
