//! UI Components for the prediction tool.
//!
//! # Page Components
//! - [`PredictTool`] - The tool page; owns the workflow
//! - [`NotFound`] - 404 page
//!
//! # Feature Components
//! - [`UploadSection`] - CSV drop zone and file picker
//! - [`SpeciesPicker`] - Species radio group
//! - [`ProgressSection`] - Simulated upload progress
//! - [`ResultsPanel`] - Map / analysis tabs and download
//! - [`ToastStack`] - Transient notifications

mod predict;
mod upload;
mod species;
mod progress;
mod results;
mod toasts;
mod not_found;

pub use predict::*;
pub use upload::*;
pub use species::*;
pub use progress::*;
pub use results::*;
pub use toasts::*;
pub use not_found::*;
