//! Task List
//!
//! In-memory task collection and its state transitions. No I/O here;
//! persistence is driven by the controller.

use crate::models::Task;

/// Ordered task collection plus the id allocator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    tasks: Vec<Task>,
    /// Highest id handed out so far; never decreases
    last_assigned_id: u32,
}

impl TodoList {
    /// Adopt a loaded collection, continuing numbering after its largest id
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_assigned_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        Self {
            tasks,
            last_assigned_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn last_assigned_id(&self) -> u32 {
        self.last_assigned_id
    }

    /// Append a new task; an empty name is ignored, as is any add once
    /// the id space is exhausted
    pub fn add(&mut self, task_name: impl Into<String>) -> Option<&Task> {
        let task_name = task_name.into();
        if task_name.is_empty() {
            return None;
        }
        self.last_assigned_id = self.last_assigned_id.checked_add(1)?;
        self.tasks.push(Task::new(self.last_assigned_id, task_name));
        self.tasks.last()
    }

    /// Set the completion flag of the first task with `id`
    pub fn set_completed(&mut self, id: u32, completed: bool) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = completed;
        Some(task)
    }

    /// Remove the first task with `id`
    pub fn remove(&mut self, id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut list = TodoList::default();
        assert_eq!(list.add("a").map(|t| t.id), Some(1));
        assert_eq!(list.add("b").map(|t| t.id), Some(2));
        assert_eq!(list.len(), 2);
        assert!(list.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_add_empty_is_ignored() {
        let mut list = TodoList::default();
        assert!(list.add("").is_none());
        assert_eq!(list.len(), 0);
        assert_eq!(list.last_assigned_id(), 0);
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let mut list = TodoList::default();
        assert!(list.add(" ").is_some());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = TodoList::default();
        list.add("a");
        list.add("b");
        list.remove(2);
        assert_eq!(list.add("c").map(|t| t.id), Some(3));
    }

    #[test]
    fn test_from_tasks_continues_after_max_id() {
        let list = TodoList::from_tasks(vec![
            Task::new(7, "x".to_string()),
            Task::new(3, "y".to_string()),
        ]);
        assert_eq!(list.last_assigned_id(), 7);

        let mut list = list;
        assert_eq!(list.add("z").map(|t| t.id), Some(8));
    }

    #[test]
    fn test_add_after_max_id_is_ignored() {
        let mut list = TodoList::from_tasks(vec![Task::new(u32::MAX, "x".to_string())]);
        assert!(list.add("y").is_none());
        assert_eq!(list.len(), 1);
        assert_eq!(list.last_assigned_id(), u32::MAX);
    }

    #[test]
    fn test_set_completed() {
        let mut list = TodoList::default();
        list.add("a");
        assert!(list.set_completed(1, true).is_some_and(|t| t.completed));
        assert_eq!(list.completed_count(), 1);
        assert!(list.set_completed(1, false).is_some_and(|t| !t.completed));
        assert!(list.set_completed(99, true).is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = TodoList::default();
        list.add("a");
        let before = list.clone();
        assert!(list.remove(5).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = TodoList::default();
        list.add("a");
        list.add("b");
        list.add("c");
        assert_eq!(list.remove(2).map(|t| t.task_name), Some("b".to_string()));
        let names: Vec<_> = list.tasks().iter().map(|t| t.task_name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }
}
