//! Prediction results: map and analysis tabs plus the download button.

use leptos::*;
use seamap_workflow::{Notice, Notifier};

use crate::components::BrowserWorkflow;
use crate::services::ToastNotifier;
use crate::types::{BrowserState, ResultTab};

#[component]
pub fn ResultsPanel(
    workflow: StoredValue<BrowserWorkflow>,
    state: RwSignal<BrowserState>,
    notifier: StoredValue<ToastNotifier>,
) -> impl IntoView {
    let (tab, set_tab) = create_signal(ResultTab::Map);
    let has_analysis = move || state.with(|s| s.analysis_text.is_some());

    // Fall back to the map when the analysis is cleared by a new upload.
    create_effect(move |_| {
        if !has_analysis() && tab.get_untracked() == ResultTab::Analysis {
            set_tab.set(ResultTab::Map);
        }
    });

    let tab_class = move |t: ResultTab| {
        if tab.get() == t { "tab active" } else { "tab" }
    };

    let on_download = move |_| {
        workflow.get_value().download();
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Prediction Results"</h2>
                <p>"Visualized prediction results and analysis for selected species"</p>
            </div>

            <div class="card-body">
                <div class="tabs">
                    <button class=move || tab_class(ResultTab::Map) on:click=move |_| set_tab.set(ResultTab::Map)>
                        "Map"
                    </button>
                    <button
                        class=move || tab_class(ResultTab::Analysis)
                        disabled=move || !has_analysis()
                        on:click=move |_| set_tab.set(ResultTab::Analysis)
                    >
                        "Analysis"
                    </button>
                </div>

                {move || match tab.get() {
                    ResultTab::Map => view! { <MapTab state=state notifier=notifier/> }.into_view(),
                    ResultTab::Analysis => view! { <AnalysisTab state=state/> }.into_view(),
                }}
            </div>

            <div class="card-footer center">
                <button
                    class="btn btn-outline"
                    disabled=move || !state.with(|s| s.can_download())
                    on:click=on_download
                >
                    "⬇️ Download Map"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MapTab(state: RwSignal<BrowserState>, notifier: StoredValue<ToastNotifier>) -> impl IntoView {
    let on_image_error = move |_| {
        notifier.with_value(|n| n.notify(Notice::error("Failed to load image")));
    };

    view! {
        <div class="image-container">
            {move || {
                let (uploading, image, species) = state.with(|s| {
                    (s.is_uploading(), s.result_image.clone(), s.result_species)
                });
                match (uploading, image) {
                    (true, _) => view! { <div class="skeleton"></div> }.into_view(),
                    (false, Some(src)) => {
                        let alt = species
                            .map(|s| format!("{} prediction map", s))
                            .unwrap_or_else(|| "prediction map".to_string());
                        view! { <img src=src alt=alt on:error=on_image_error/> }.into_view()
                    }
                    (false, None) => view! {
                        <div class="placeholder">
                            <p>"No map generated yet"</p>
                            <p class="text-muted">"Upload a CSV file and generate a prediction map"</p>
                        </div>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn AnalysisTab(state: RwSignal<BrowserState>) -> impl IntoView {
    view! {
        <div class="analysis-container">
            {move || state.with(|s| match &s.analysis_text {
                Some(text) => {
                    let species = s.analysis_species();
                    view! {
                        <div class="analysis-text">
                            <h3>"Distribution analysis for " {species.as_str()}</h3>
                            <p>{text.clone()}</p>
                        </div>
                    }
                    .into_view()
                }
                None => {
                    let message = if s.is_analyzing() {
                        "Analyzing the data..."
                    } else {
                        "No analysis available yet"
                    };
                    view! { <p class="text-muted">{message}</p> }.into_view()
                }
            })}
        </div>
    }
}
