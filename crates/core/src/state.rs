//! Root state container
//!
//! Owns both repositories, the ephemeral view state (filter and search)
//! and the notification controller. The embedding UI holds one
//! `AppState` and calls into it for every event; derived views such as
//! [`AppState::visible_tasks`] are recomputed on request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::category::{Category, CategoryRepository};
use crate::config::Config;
use crate::filter::{filter_label, filter_tasks, CategoryFilter};
use crate::notification::{messages, Notification, NotificationController, NotificationState};
use crate::outcome::Outcome;
use crate::storage::{FileKeyValueStore, PersistentStore};
use crate::task::{NewTask, Task, TaskRepository, TaskUpdate};

pub struct AppState {
    tasks: TaskRepository,
    categories: CategoryRepository,
    selected_filter: CategoryFilter,
    search_query: String,
    notifications: NotificationController,
    persistence_error: Option<String>,
}

impl AppState {
    /// Open the file-backed state under `config.data_dir`
    pub fn open(config: &Config) -> Self {
        info!("Using data directory: {:?}", config.data_dir);
        let store = PersistentStore::new(Arc::new(FileKeyValueStore::new(&config.data_dir)))
            .with_pretty(config.pretty_json);
        Self::with_store(store, config.toast_ttl)
    }

    /// Build state over any storage backend
    pub fn with_store(store: PersistentStore, toast_ttl: Duration) -> Self {
        let tasks = TaskRepository::load(store.clone());
        let categories = CategoryRepository::load(store);
        info!(
            "Loaded {} tasks and {} categories",
            tasks.len(),
            categories.len()
        );

        Self {
            tasks,
            categories,
            selected_filter: CategoryFilter::default(),
            search_query: String::new(),
            notifications: NotificationController::new(toast_ttl),
            persistence_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.categories()
    }

    /// Validate and add a task
    pub fn add_task(&mut self, draft: NewTask) -> Outcome<Task> {
        let outcome = match draft.normalized() {
            Ok(draft) => self.tasks.create(draft),
            Err(_) => Outcome::Rejected {
                notification: Notification::error(messages::TASK_TITLE_EMPTY),
            },
        };
        self.observe(outcome)
    }

    /// Validate and apply an edit to the task with `id`
    pub fn update_task(&mut self, id: &str, update: TaskUpdate) -> Outcome<Task> {
        let outcome = match update.normalized() {
            Ok(update) => self.tasks.update(id, update),
            Err(_) => Outcome::Rejected {
                notification: Notification::error(messages::TASK_TITLE_EMPTY),
            },
        };
        self.observe(outcome)
    }

    pub fn toggle_complete(&mut self, id: &str) -> Outcome<Task> {
        let outcome = self.tasks.toggle_complete(id);
        self.observe(outcome)
    }

    pub fn delete_task(&mut self, id: &str) -> Outcome<Task> {
        let outcome = self.tasks.delete(id);
        self.observe(outcome)
    }

    pub fn add_category(&mut self, name: &str) -> Outcome<Category> {
        let outcome = self.categories.create(name);
        self.observe(outcome)
    }

    pub fn selected_filter(&self) -> &CategoryFilter {
        &self.selected_filter
    }

    pub fn select_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.selected_filter = filter.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Run the filter engine over the current snapshot
    pub fn visible_tasks(&self) -> Vec<Task> {
        filter_tasks(self.tasks.tasks(), &self.selected_filter, &self.search_query)
    }

    /// Heading for the current filter
    pub fn filter_label(&self) -> String {
        filter_label(&self.selected_filter, self.categories.categories())
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn notification_state(&self) -> NotificationState {
        self.notifications.state()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    /// The most recent failed write, kept apart from notifications
    pub fn persistence_error(&self) -> Option<&str> {
        self.persistence_error.as_deref()
    }

    pub fn clear_persistence_error(&mut self) {
        self.persistence_error = None;
    }

    fn observe<T>(&mut self, outcome: Outcome<T>) -> Outcome<T> {
        if let Some(notification) = outcome.notification() {
            self.notifications.show(notification.clone());
        }
        if let Some(e) = outcome.persist_error() {
            warn!("Change kept in memory but not saved: {}", e);
            self.persistence_error = Some(e.to_string());
        }
        outcome
    }
}
