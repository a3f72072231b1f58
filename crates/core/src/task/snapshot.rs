//! Pure operations over a task sequence
//!
//! Each function returns a new sequence and leaves its input untouched.
//! Order is insertion order; nothing here re-sorts.

use chrono::{DateTime, Utc};

use super::model::{Task, TaskUpdate};

/// Append `task` to the end of the sequence
pub fn appended(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(task);
    next
}

/// Apply `update` to the task with `id`, `None` if no task matches
pub fn updated(
    tasks: &[Task],
    id: &str,
    update: &TaskUpdate,
    now: DateTime<Utc>,
) -> Option<Vec<Task>> {
    let index = tasks.iter().position(|t| t.id == id)?;
    let mut next = tasks.to_vec();
    update.apply_to(&mut next[index], now);
    Some(next)
}

/// Drop the task with `id`; an unknown id yields an equal sequence
pub fn removed(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![Task::new("One"), Task::new("Two"), Task::new("Three")]
    }

    #[test]
    fn test_appended_keeps_order() {
        let tasks = sample();
        let next = appended(&tasks, Task::new("Four"));

        assert_eq!(tasks.len(), 3);
        let titles: Vec<&str> = next.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_updated_touches_only_target() {
        let tasks = sample();
        let id = tasks[1].id.clone();

        let next = updated(&tasks, &id, &TaskUpdate::new().title("Deux"), Utc::now()).unwrap();

        assert_eq!(next[1].title, "Deux");
        assert!(next[1].updated_at.is_some());
        assert_eq!(next[0], tasks[0]);
        assert_eq!(next[2], tasks[2]);
        assert_eq!(tasks[1].title, "Two");
    }

    #[test]
    fn test_updated_unknown_id() {
        let tasks = sample();
        assert!(updated(&tasks, "nonexistent", &TaskUpdate::new().title("x"), Utc::now()).is_none());
    }

    #[test]
    fn test_removed() {
        let tasks = sample();
        let id = tasks[0].id.clone();

        let next = removed(&tasks, &id);
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|t| t.id != id));
    }

    #[test]
    fn test_removed_unknown_id_is_noop() {
        let tasks = sample();
        assert_eq!(removed(&tasks, "nonexistent"), tasks);
    }
}
