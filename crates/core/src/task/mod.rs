//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod repository;
pub mod snapshot;

pub use model::*;
pub use repository::TaskRepository;
