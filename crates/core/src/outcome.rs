//! Result of a repository operation

use crate::notification::Notification;
use crate::Error;

/// What happened when a repository operation ran.
///
/// Only `Applied` changes state. A failed write does not undo the change;
/// it travels alongside it in `persist_error`.
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    /// State changed; the new snapshot was written unless `persist_error` is set
    Applied {
        value: T,
        notification: Notification,
        persist_error: Option<Error>,
    },
    /// Input was declined; state is unchanged
    Rejected { notification: Notification },
    /// The target id does not exist; state is unchanged and nothing is reported
    Missed,
}

impl<T> Outcome<T> {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Applied { notification, .. } | Self::Rejected { notification } => {
                Some(notification)
            }
            Self::Missed => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Applied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Applied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn persist_error(&self) -> Option<&Error> {
        match self {
            Self::Applied { persist_error, .. } => persist_error.as_ref(),
            _ => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn is_missed(&self) -> bool {
        matches!(self, Self::Missed)
    }
}
