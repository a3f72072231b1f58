//! Filter engine

use super::model::CategoryFilter;
use crate::task::Task;

/// Category predicate.
///
/// A `Category` token is compared verbatim with `task.category`. The
/// sidebar passes a category id while tasks store a category name, so a
/// user category selected by id matches only tasks whose stored category
/// string equals that id.
pub fn matches_category(task: &Task, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Completed => task.is_completed,
        CategoryFilter::Uncategorized => task.is_uncategorized(),
        CategoryFilter::Category(token) => task.category.as_deref() == Some(token.as_str()),
    }
}

/// Case-insensitive substring match on title or description.
///
/// `query` must already be lowercased; an empty query matches everything.
pub fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(query)
        || task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Tasks passing both predicates, in source order
pub fn filter_tasks(tasks: &[Task], filter: &CategoryFilter, search_query: &str) -> Vec<Task> {
    let query = search_query.to_lowercase();
    tasks
        .iter()
        .filter(|t| matches_category(t, filter) && matches_search(t, &query))
        .cloned()
        .collect()
}
