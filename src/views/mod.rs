//! View Components
//!
//! UI components for the character table.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FilterBar                                                   │
//! │  ┌──────────────────────────────────┐  ┌──────────────────┐ │
//! │  │         CharacterTable           │  │ CharacterDetails │ │
//! │  └──────────────────────────────────┘  └──────────────────┘ │
//! │                       Pagination                             │
//! └─────────────────────────────────────────────────────────────┘
//!                EyesLayer (absolute, over everything)
//! ```

mod content;
mod details;
mod eyes;
mod filters;
mod pagination;
mod table;
mod title_bar;

pub use content::*;
pub use details::*;
pub use eyes::*;
pub use filters::*;
pub use pagination::*;
pub use table::*;
pub use title_bar::*;
