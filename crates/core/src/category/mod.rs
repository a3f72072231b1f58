//! Category module
//!
//! Categories are named labels. They are append-only: once created they
//! are never renamed or removed.

mod model;
mod repository;

pub use model::*;
pub use repository::CategoryRepository;
