//! Backend and browser services.
//!
//! These implement the workflow's capability traits for the browser:
//!
//! # Services
//!
//! - [`predict`] - Prediction backend client (gloo-net, multipart)
//! - [`browser`] - Progress timer, new-tab navigation, toast notifications

pub mod predict;
pub mod browser;

pub use predict::*;
pub use browser::*;
