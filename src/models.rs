//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// A single to-do entry
///
/// Stored as `{"id": 1, "taskName": "...", "completed": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(rename = "taskName")]
    pub task_name: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u32, task_name: String) -> Self {
        Self {
            id,
            task_name,
            completed: false,
        }
    }

    /// DOM id of the rendered list item
    pub fn element_id(&self) -> String {
        format!("task-{}", self.id)
    }
}
