use todo_core::TodoResult;

pub mod task_commands;

pub use task_commands::*;

/// Trait for domain commands that mutate the task list
pub trait Command: Send + Sync {
    /// Execute this command against the task list
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub tasks: &'a mut Vec<crate::Task>,
}
