//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → recompute filtered view → visible page → notify → UI Refresh
//! ```

mod app;
mod characters;
mod filters;
mod i18n;

pub use app::*;
pub use characters::*;
pub use filters::*;
pub use i18n::*;
