//! Task repository
//!
//! Owns the canonical task sequence and writes the whole snapshot under
//! [`TASKS_KEY`] after every change.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::model::{NewTask, Task, TaskUpdate};
use super::snapshot;
use crate::notification::{messages, Notification};
use crate::outcome::Outcome;
use crate::storage::{PersistentStore, TASKS_KEY};
use crate::Error;

pub struct TaskRepository {
    tasks: Arc<[Task]>,
    store: PersistentStore,
}

impl TaskRepository {
    /// Load the stored snapshot, or start empty if there is none
    pub fn load(store: PersistentStore) -> Self {
        let tasks: Vec<Task> = store.load(TASKS_KEY, Vec::new());
        debug!("Loaded {} tasks", tasks.len());
        Self {
            tasks: tasks.into(),
            store,
        }
    }

    /// The current snapshot; unaffected by later changes
    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task.
    ///
    /// The title is taken as given; blank titles are refused by the caller.
    pub fn create(&mut self, input: NewTask) -> Outcome<Task> {
        let task = input.into_task(self.fresh_id(), Utc::now());
        let next = snapshot::appended(&self.tasks, task.clone());
        let persist_error = self.commit(next);
        debug!("Created task {}", task.id);

        Outcome::Applied {
            value: task,
            notification: Notification::success(messages::TASK_ADDED),
            persist_error,
        }
    }

    /// Merge `update` into the task with `id`
    pub fn update(&mut self, id: &str, update: TaskUpdate) -> Outcome<Task> {
        let Some(next) = snapshot::updated(&self.tasks, id, &update, Utc::now()) else {
            debug!("Update skipped, no task {}", id);
            return Outcome::Missed;
        };
        let Some(task) = next.iter().find(|t| t.id == id).cloned() else {
            return Outcome::Missed;
        };
        let persist_error = self.commit(next);

        let message = match update.is_completed {
            Some(true) => messages::TASK_COMPLETED,
            Some(false) => messages::TASK_ACTIVE,
            None => messages::TASK_UPDATED,
        };

        Outcome::Applied {
            value: task,
            notification: Notification::success(message),
            persist_error,
        }
    }

    /// Flip the completion flag of the task with `id`
    pub fn toggle_complete(&mut self, id: &str) -> Outcome<Task> {
        let Some(current) = self.get(id).map(|t| t.is_completed) else {
            debug!("Toggle skipped, no task {}", id);
            return Outcome::Missed;
        };
        self.update(id, TaskUpdate::new().completed(!current))
    }

    /// Remove the task with `id`.
    ///
    /// The notification uses the error style as an attention cue; the
    /// removal itself succeeded.
    pub fn delete(&mut self, id: &str) -> Outcome<Task> {
        let Some(task) = self.get(id).cloned() else {
            debug!("Delete skipped, no task {}", id);
            return Outcome::Missed;
        };
        let next = snapshot::removed(&self.tasks, id);
        let persist_error = self.commit(next);
        debug!("Deleted task {}", id);

        Outcome::Applied {
            value: task,
            notification: Notification::error(messages::TASK_DELETED),
            persist_error,
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Swap in the new snapshot, then write it
    fn commit(&mut self, next: Vec<Task>) -> Option<Error> {
        self.tasks = next.into();
        match self.store.save(TASKS_KEY, &*self.tasks) {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist tasks: {}", e);
                Some(e)
            }
        }
    }
}
