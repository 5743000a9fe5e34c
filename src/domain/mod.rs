//! Domain - Pure Data Structures and the Query Pipeline
//!
//! These types don't depend on GPUI: the character wire model, filter/sort
//! criteria, the filter-sort engine, pagination and the eye geometry.

pub mod character;
pub mod criteria;
pub mod dataset;
pub mod eyes;
pub mod pagination;
pub mod query;

pub use character::*;
pub use criteria::*;
pub use dataset::*;
pub use eyes::*;
pub use pagination::*;
pub use query::*;
