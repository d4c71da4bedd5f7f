use crate::cli::Commands;
use crate::output;
use todo_core::TodoError;
use todo_domain::TaskId;
use todo_persistence::TaskStore;

pub async fn handle(store: &mut TaskStore, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add { title } => match store.add(&title).await {
            Some(id) => match store.find(id) {
                Some(task) => output::output_success(task)?,
                None => {
                    let error = TodoError::Internal(format!("task {} missing after add", id));
                    output::output_error(&error.to_string())
                }
            },
            None if title.trim().is_empty() => output::output_error("Task title is empty"),
            None => output::output_error("No task id left to assign"),
        },
        Commands::List => {
            output::output_list(store.tasks().to_vec())?;
        }
        Commands::Toggle { id } => {
            if store.find(id).is_none() {
                output::output_error(&not_found(id));
            }
            store.toggle_completed(id).await;
            if let Some(task) = store.find(id) {
                output::output_success(task)?;
            }
        }
        Commands::Remove { id } => {
            store.remove(id).await;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        Commands::Rename { id, title } => {
            if store.find(id).is_none() {
                output::output_error(&not_found(id));
            }
            store.rename(id, &title).await;
            if let Some(task) = store.find(id) {
                output::output_success(task)?;
            }
        }
        // answered before any storage is opened
        Commands::Completions { .. } => {}
    }
    Ok(())
}

fn not_found(id: TaskId) -> String {
    TodoError::NotFound(format!("task {}", id)).to_string()
}
