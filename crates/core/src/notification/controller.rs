//! Notification controller
//!
//! Holds at most one visible notification. Each `show` supersedes the
//! previous one and reschedules expiry; `dismiss` clears it at once.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use super::model::Notification;

/// Observable controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationState {
    Idle,
    Visible(Notification),
}

struct Active {
    notification: Notification,
    expires_at: Instant,
}

#[derive(Default)]
struct Slot {
    current: Option<Active>,
    /// Bumped on every show/dismiss; an expiry task only clears its own generation
    generation: u64,
}

pub struct NotificationController {
    ttl: Duration,
    slot: Arc<Mutex<Slot>>,
    expiry: Option<JoinHandle<()>>,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl NotificationController {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(Mutex::new(Slot::default())),
            expiry: None,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Make `notification` visible for the configured lifetime.
    ///
    /// Any pending expiry is aborted. When called inside a Tokio runtime a
    /// timer task clears the slot at the deadline; outside one the
    /// deadline is still honoured by [`current`](Self::current).
    pub fn show(&mut self, notification: Notification) {
        let expires_at = Instant::now() + self.ttl;
        debug!("Showing notification {:?}", notification.message);

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.current = Some(Active {
                notification,
                expires_at,
            });
            slot.generation
        };

        self.cancel_expiry();
        if let Ok(handle) = Handle::try_current() {
            let slot = Arc::clone(&self.slot);
            self.expiry = Some(handle.spawn(async move {
                tokio::time::sleep_until(expires_at).await;
                let mut slot = lock(&slot);
                if slot.generation == generation {
                    slot.current = None;
                    debug!("Notification expired");
                }
            }));
        }
    }

    /// Clear the visible notification and cancel its expiry
    pub fn dismiss(&mut self) {
        self.cancel_expiry();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.current = None;
    }

    /// The visible notification, if its lifetime has not run out
    pub fn current(&self) -> Option<Notification> {
        let slot = lock(&self.slot);
        slot.current
            .as_ref()
            .filter(|active| Instant::now() < active.expires_at)
            .map(|active| active.notification.clone())
    }

    pub fn state(&self) -> NotificationState {
        match self.current() {
            Some(notification) => NotificationState::Visible(notification),
            None => NotificationState::Idle,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current().is_some()
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationController {
    fn drop(&mut self) {
        self.cancel_expiry();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(4);

    #[test]
    fn test_starts_idle() {
        let controller = NotificationController::new(TTL);
        assert_eq!(controller.state(), NotificationState::Idle);
    }

    #[test]
    fn test_works_without_runtime() {
        let mut controller = NotificationController::new(TTL);
        controller.show(Notification::success("Saved"));
        assert!(controller.is_visible());

        controller.dismiss();
        assert!(!controller.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_visible_until_deadline() {
        let mut controller = NotificationController::new(TTL);
        controller.show(Notification::success("Saved"));
        assert_eq!(
            controller.state(),
            NotificationState::Visible(Notification::success("Saved"))
        );

        tokio::time::advance(Duration::from_millis(3999)).await;
        assert!(controller.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(controller.state(), NotificationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_task_clears_slot() {
        let mut controller = NotificationController::new(TTL);
        controller.show(Notification::success("Saved"));

        tokio::time::sleep(TTL + Duration::from_millis(1)).await;

        assert!(lock(&controller.slot).current.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_resets_timer() {
        let mut controller = NotificationController::new(TTL);
        controller.show(Notification::success("First"));

        tokio::time::advance(Duration::from_secs(3)).await;
        controller.show(Notification::error("Second"));

        // Past the first deadline; the stale timer must not clear "Second"
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(
            controller.current().map(|n| n.message),
            Some("Second".to_string())
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!controller.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_expiry() {
        let mut controller = NotificationController::new(TTL);
        controller.show(Notification::success("First"));
        controller.dismiss();
        assert!(!controller.is_visible());

        tokio::time::advance(Duration::from_secs(1)).await;
        controller.show(Notification::success("Second"));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(controller.is_visible());
    }
}
