//! The prediction tool page.
//!
//! Owns one [`UploadWorkflow`] for its lifetime and mirrors the workflow
//! state into an [`RwSignal`] that the child components read from.

use leptos::*;
use seamap_workflow::{UploadWorkflow, Variant, EXPECTED_COLUMNS};

use crate::components::{ProgressSection, ResultsPanel, SpeciesPicker, ToastStack, UploadSection};
use crate::config::backend_config;
use crate::services::{GlooPredictionApi, IntervalScheduler, ToastNotifier, WindowNavigator};
use crate::types::{BrowserFile, BrowserState, Toast};

/// Workflow wired to the browser services.
pub type BrowserWorkflow = UploadWorkflow<BrowserFile, GlooPredictionApi, IntervalScheduler>;

#[component]
pub fn PredictTool(variant: Variant) -> impl IntoView {
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());
    let notifier = ToastNotifier::new(set_toasts);

    let workflow = BrowserWorkflow::new(
        backend_config(variant),
        GlooPredictionApi,
        IntervalScheduler,
        notifier.clone(),
        WindowNavigator,
    );
    log::info!("🗺️ Prediction tool mounted ({} variant)", variant);

    let state = create_rw_signal(BrowserState::default());
    workflow.set_observer(move |snapshot| state.set(snapshot));

    let teardown = workflow.clone();
    on_cleanup(move || teardown.dispose());

    let workflow = store_value(workflow);
    let notifier = store_value(notifier);

    view! {
        <div class="container">
            <div class="hero">
                <h1>
                    <span class="hero-accent">"Species Distribution"</span>
                    " Prediction Tool"
                </h1>
                <p class="hero-subtitle">
                    "Upload your CSV data to generate prediction maps for sardine and rails species distribution."
                </p>
            </div>

            <div class="tool-grid">
                <div class="card">
                    <div class="card-header">
                        <h2>"Upload Dataset"</h2>
                        <p>"Select a CSV file containing the required parameters for species prediction"</p>
                    </div>
                    <div class="card-body">
                        <UploadSection workflow=workflow state=state/>
                        <SpeciesPicker workflow=workflow state=state/>
                        <Show
                            when=move || state.with(|s| s.is_uploading())
                            fallback=|| view! { }
                        >
                            <ProgressSection state=state/>
                        </Show>
                    </div>
                    <SubmitButtons workflow=workflow state=state/>
                </div>

                <ResultsPanel workflow=workflow state=state notifier=notifier/>
            </div>

            <div class="hint">
                <p>"Upload CSV files with columns: " {EXPECTED_COLUMNS.join(", ")}</p>
                <p>"The model will predict species distribution based on these parameters"</p>
            </div>
        </div>

        <ToastStack toasts=toasts/>
    }
}

/// Generate Map and, in the analysis variant, Analyze Map.
#[component]
fn SubmitButtons(workflow: StoredValue<BrowserWorkflow>, state: RwSignal<BrowserState>) -> impl IntoView {
    let analysis_enabled = workflow.with_value(|w| w.config().analysis_enabled);

    let on_generate = move |_| {
        let workflow = workflow.get_value();
        spawn_local(async move {
            if let Err(e) = workflow.submit_upload().await {
                log::debug!("Upload ended without a map: {:?}", e);
            }
        });
    };

    let on_analyze = move |_| {
        let workflow = workflow.get_value();
        spawn_local(async move {
            if let Err(e) = workflow.analyze().await {
                log::debug!("Analysis ended without text: {:?}", e);
            }
        });
    };

    view! {
        <div class="card-footer">
            <button
                class="btn btn-primary"
                disabled=move || !state.with(|s| s.can_submit())
                on:click=on_generate
            >
                {move || if state.with(|s| s.is_uploading()) { "⏳ Generate Map" } else { "Generate Map" }}
            </button>
            <Show
                when=move || analysis_enabled
                fallback=|| view! { }
            >
                <button
                    class="btn btn-secondary"
                    disabled=move || !state.with(|s| s.can_analyze())
                    on:click=on_analyze
                >
                    {move || if state.with(|s| s.is_analyzing()) { "⏳ Analyze Map" } else { "💬 Analyze Map" }}
                </button>
            </Show>
        </div>
    }
}
