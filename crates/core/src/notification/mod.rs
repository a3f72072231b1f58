//! Transient status notifications

mod controller;
mod model;

pub use controller::{NotificationController, NotificationState};
pub use model::*;
