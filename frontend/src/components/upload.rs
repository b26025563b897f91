//! CSV drop zone with a hidden file input.
//!
//! Both the picker and a drop hand the first file to the workflow, which
//! decides whether to accept it.

use leptos::html::Input;
use leptos::*;
use seamap_workflow::{format_kb, FileHandle, FileSource};
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::BrowserWorkflow;
use crate::types::{BrowserFile, BrowserState};

#[component]
pub fn UploadSection(
    workflow: StoredValue<BrowserWorkflow>,
    state: RwSignal<BrowserState>,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = create_signal(false);
    let file_input = create_node_ref::<Input>();
    let locked = move || state.with(|s| s.controls_locked());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if workflow
            .get_value()
            .select_file(BrowserFile(file), FileSource::Picker)
            .is_err()
        {
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            let _ = workflow.get_value().select_file(BrowserFile(file), FileSource::Drop);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !locked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| set_is_dragover.set(false);

    let on_browse = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = move |_| {
        workflow.get_value().clear_file();
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let selected = move || state.with(|s| s.selected_file.as_ref().map(|f| (f.name(), f.size())));

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-section"];
                if selected().is_some() {
                    classes.push("has-file");
                }
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                accept=".csv"
                style="display:none"
                node_ref=file_input
                disabled=locked
                on:change=on_file_change
            />

            {move || match selected() {
                None => view! {
                    <div class="upload-empty">
                        <div class="upload-icon">"📤"</div>
                        <p class="upload-text">"Drop your CSV file here or"</p>
                        <button type="button" class="btn btn-secondary" disabled=locked on:click=on_browse>
                            "Browse"
                        </button>
                    </div>
                }.into_view(),
                Some((name, size)) => view! {
                    <div class="upload-selected">
                        <p class="file-name">{name}</p>
                        <p class="file-size">{format_kb(size)}</p>
                        <button type="button" class="btn btn-outline" disabled=locked on:click=on_remove>
                            "Remove"
                        </button>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
