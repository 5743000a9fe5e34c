//! Service Layer
//!
//! Remote data access and async plumbing for the character table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      fetch_all                               │
//! │  ┌──────────────────────┐     ┌──────────────────────────┐  │
//! │  │   CharacterSource    │ ──▶ │  FetchOutcome / Dataset   │  │
//! │  │ (HTTP or test fake)  │     │  (records + FetchError)   │  │
//! │  └──────────────────────┘     └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ run_in_tokio
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                             │
//! │                   (CharactersState)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod aggregator;
mod avatar;
mod runtime;
mod source;

pub use aggregator::*;
pub use avatar::*;
pub use runtime::*;
pub use source::*;
