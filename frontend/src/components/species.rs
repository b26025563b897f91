use leptos::*;
use seamap_workflow::Species;

use crate::components::BrowserWorkflow;
use crate::types::BrowserState;

/// Species radio group, locked while a request is in flight.
#[component]
pub fn SpeciesPicker(
    workflow: StoredValue<BrowserWorkflow>,
    state: RwSignal<BrowserState>,
) -> impl IntoView {
    let locked = move || state.with(|s| s.species_locked());

    view! {
        <fieldset class="species-picker" disabled=locked>
            <legend>"Select Species"</legend>
            {Species::ALL
                .into_iter()
                .map(move |species| {
                    view! {
                        <label class="species-option">
                            <input
                                type="radio"
                                name="species"
                                value=species.as_str()
                                prop:checked=move || state.with(|s| s.species == species)
                                on:change=move |_| {
                                    let _ = workflow.get_value().set_species(species);
                                }
                            />
                            {species.label()}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}
