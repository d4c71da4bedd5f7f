use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_domain::TaskId;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A terminal to-do list", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding task storage (or set TODO_DATA_DIR)
    #[arg(long, value_name = "DIR", env = "TODO_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Signed-in user (or set TODO_USER)
    #[arg(long, value_name = "NAME", env = "TODO_USER", global = true)]
    pub user: Option<String>,

    /// Config file to use instead of the platform default (or set TODO_CONFIG)
    #[arg(long, value_name = "FILE", env = "TODO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Screen to start the interface on, e.g. `/todos/3`
    #[arg(long, value_name = "PATH")]
    pub open: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title; surrounding whitespace is trimmed
        title: String,
    },
    /// List tasks, newest first
    List,
    /// Flip a task between done and not done
    Toggle { id: TaskId },
    /// Remove a task
    Remove { id: TaskId },
    /// Replace a task's title
    Rename { id: TaskId, title: String },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
