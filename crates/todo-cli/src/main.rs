mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::sync::Arc;
use todo_core::{AppConfig, Authenticator, LocalSession, TodoError};
use todo_domain::ThemeStore;
use todo_persistence::{FileStorage, KeyValueStore, TaskStore};
use todo_tui::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.effective_data_dir());
    let session = LocalSession::new(config.effective_username(cli.user.clone()));
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::new(&data_dir));
    tracing::debug!("Using storage at {}", data_dir.display());

    match cli.command {
        None => {
            let tasks = TaskStore::open(storage).await;
            let theme = ThemeStore::detect(config.color_scheme.as_deref());
            let mut app = App::new(tasks, theme, Box::new(session));
            if let Some(path) = &cli.open {
                match app.navigate(path).await {
                    Ok(()) => {}
                    Err(e @ TodoError::NotFound(_)) => return Err(e.into()),
                    // the sign-in screen explains the rest
                    Err(e) => tracing::warn!("Not opening {}: {}", path, e),
                }
            }
            app.run().await?;
        }
        Some(command) => {
            if !session.is_authenticated() {
                let error =
                    TodoError::Unauthenticated("pass --user or set TODO_USER".to_string());
                output::output_error(&error.to_string());
            }
            let mut tasks = TaskStore::open(storage).await;
            handlers::task::handle(&mut tasks, command).await?;
        }
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::new("warn"))
            .init();
    }
    Ok(())
}
