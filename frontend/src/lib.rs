//! Seamap - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading environmental CSV data and
//! generating species distribution prediction maps.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /        PredictTool (analysis variant)                     │
//! │  /basic   PredictTool (basic variant)                        │
//! │  /*       NotFound                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PredictTool                                                 │
//! │  ├── UploadSection, SpeciesPicker, ProgressSection          │
//! │  ├── ResultsPanel (map / analysis tabs, download)           │
//! │  └── ToastStack                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend address and toast settings
//! - [`types`] - Browser file adapter, toasts
//! - [`components`] - UI components
//! - [`services`] - Backend client and browser hooks for the workflow

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use seamap_workflow::Variant;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{BrowserFile, BrowserState, Toast};
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Seamap - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <PredictTool variant=Variant::Analysis/> }/>
                    <Route path="/basic" view=|| view! { <PredictTool variant=Variant::Basic/> }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
