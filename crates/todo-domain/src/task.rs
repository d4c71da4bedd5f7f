use serde::{Deserialize, Serialize};

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }
}

/// `max(id) + 1`, or 1 for an empty list. `None` once `u64::MAX` is taken.
pub fn next_task_id(tasks: &[Task]) -> Option<TaskId> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Highest id first, i.e. most recently created first
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.id.cmp(&a.id));
}
