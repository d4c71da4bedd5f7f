use super::{Command, CommandContext};
use crate::{next_task_id, Task, TaskId};
use todo_core::{TodoError, TodoResult};

/// Create a task from a trimmed title and put it at the head of the list
pub struct AddTask {
    pub title: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TodoError::Validation("task title is empty".to_string()));
        }
        let id = next_task_id(context.tasks)
            .ok_or_else(|| TodoError::Validation("no task id left to assign".to_string()))?;
        let task = Task::new(id, title.to_string());
        context.tasks.insert(0, task);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title.trim())
    }
}

/// Flip the completed flag; absent ids are ignored
pub struct ToggleTask {
    pub task_id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        if let Some(task) = context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            task.toggle_completed();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

pub struct RemoveTask {
    pub task_id: TaskId,
}

impl Command for RemoveTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.tasks.retain(|t| t.id != self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.task_id)
    }
}

/// Replace the title verbatim. Blank titles are accepted here, unlike `AddTask`.
pub struct RenameTask {
    pub task_id: TaskId,
    pub title: String,
}

impl Command for RenameTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        if let Some(task) = context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            task.update_title(self.title.clone());
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Rename task {} to '{}'", self.task_id, self.title)
    }
}
