//! App Configuration

/// Local storage key holding the serialized task collection
pub const STORAGE_KEY: &str = "tasks";

// DOM ids
pub const INPUT_TASK_ID: &str = "input-task";
pub const TASK_LIST_ID: &str = "task-list";
pub const ADD_TASK_BUTTON_ID: &str = "add-task-button";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
