//! Task Filtering
//!
//! Pure predicates over the cached task list. Switching filters never
//! touches the network.

use crate::models::Task;

/// The three filter tabs, in display order.
pub const FILTERS: &[TaskFilter] = &[TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

/// Which subset of the cached list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All Tasks",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }

    /// Heading for the empty state under this filter.
    pub fn empty_heading(self) -> &'static str {
        match self {
            TaskFilter::All => "No tasks yet",
            TaskFilter::Pending => "No pending tasks",
            TaskFilter::Completed => "No completed tasks",
        }
    }

    /// Hint line under the empty-state heading.
    pub fn empty_hint(self) -> &'static str {
        match self {
            TaskFilter::All => "Add your first task to get started.",
            TaskFilter::Pending => "All tasks are completed!",
            TaskFilter::Completed => "Complete some tasks to see them here.",
        }
    }
}

/// Visible subset of `tasks` under `filter`.
pub fn apply_filter(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// How many tasks the given filter tab would show.
pub fn count_matching(tasks: &[Task], filter: TaskFilter) -> usize {
    tasks.iter().filter(|task| filter.matches(task)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, completed: bool) -> Task {
        Task {
            id: Some(id),
            title: format!("Task {}", id),
            description: None,
            completed,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn pending_filter_shows_only_incomplete_tasks() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];

        let visible = apply_filter(&tasks, TaskFilter::Pending);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|task| !task.completed));
    }

    #[test]
    fn completed_filter_shows_only_completed_tasks() {
        // Example from the product requirements: two tasks, one completed.
        let tasks = vec![make_task(1, false), make_task(2, true)];

        let visible = apply_filter(&tasks, TaskFilter::Completed);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, Some(2));

        assert_eq!(count_matching(&tasks, TaskFilter::All), 2);
        assert_eq!(count_matching(&tasks, TaskFilter::Completed), 1);
        assert_eq!(count_matching(&tasks, TaskFilter::Pending), 1);
    }

    #[test]
    fn all_filter_is_identity() {
        let tasks = vec![make_task(1, false), make_task(2, true)];
        assert_eq!(apply_filter(&tasks, TaskFilter::All), tasks);
    }

    #[test]
    fn filters_partition_the_list() {
        let tasks: Vec<Task> =
            (0..10).map(|id| make_task(id, id % 3 == 0)).collect();

        let pending = count_matching(&tasks, TaskFilter::Pending);
        let completed = count_matching(&tasks, TaskFilter::Completed);
        assert_eq!(pending + completed, tasks.len());
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }
}
