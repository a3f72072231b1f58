//! Visible-task derivation
//!
//! A pure function of the task sequence, the selected category filter
//! and the search query. Nothing here is persisted.

mod engine;
mod model;

pub use engine::{filter_tasks, matches_category, matches_search};
pub use model::*;
