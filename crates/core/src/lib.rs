//! Core library for TaskMaster
//!
//! This crate contains the client-side state layer, including:
//! - Task and category repositories with whole-snapshot persistence
//! - The filter engine that derives the visible task list
//! - Auto-expiring status notifications

pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod notification;
pub mod outcome;
pub mod state;
pub mod storage;
pub mod task;
pub mod telemetry;

pub use config::Config;
pub use error::Error;
pub use outcome::Outcome;
pub use state::AppState;
pub type Result<T> = std::result::Result<T, Error>;
