use crate::{
    dialog::{handle_dialog_input, DialogAction},
    events::{is_interrupt, Event, EventHandler},
    router::{Route, Router},
    selection::SelectionState,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use todo_core::{Authenticator, InputState, TodoError, TodoResult};
use todo_domain::{Task, ThemeStore};
use todo_persistence::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddTask,
}

/// State of the edit screen while `/todos/{id}` is the current route
#[derive(Debug, Clone)]
pub struct EditScreen {
    pub task_param: String,
    /// Snapshot taken from freshly loaded storage; `None` if the id is unknown
    pub task: Option<Task>,
    pub input: InputState,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    /// Text of the add dialog
    pub input: InputState,
    pub tasks: TaskStore,
    pub theme: ThemeStore,
    pub router: Router,
    pub selection: SelectionState,
    pub edit: Option<EditScreen>,
    auth: Box<dyn Authenticator>,
}

impl App {
    pub fn new(tasks: TaskStore, theme: ThemeStore, auth: Box<dyn Authenticator>) -> Self {
        let mut selection = SelectionState::new();
        selection.clamp(tasks.len());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            tasks,
            theme,
            router: Router::new(),
            selection,
            edit: None,
            auth,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn username(&self) -> Option<String> {
        self.auth.username()
    }

    pub fn sign_out(&mut self) {
        self.auth.sign_out();
        self.mode = AppMode::Normal;
        self.input.clear();
        self.edit = None;
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.tasks().get(idx))
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.quit();
            return;
        }

        if !self.is_authenticated() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                self.quit();
            }
            return;
        }

        let on_list = matches!(self.router.current(), Route::List);
        match (on_list, self.mode) {
            (true, AppMode::Normal) => self.handle_list_key(key).await,
            (true, AppMode::AddTask) => self.handle_add_dialog_key(key).await,
            (false, _) => self.handle_edit_key(key).await,
        }
    }

    async fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(self.tasks.len()),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.input.clear();
                self.mode = AppMode::AddTask;
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_task().map(|t| t.id) {
                    self.tasks.toggle_completed(id).await;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task().map(|t| t.id) {
                    self.tasks.remove(id).await;
                    self.selection.clamp(self.tasks.len());
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_task().map(|t| t.id) {
                    self.open_edit(Route::edit(id)).await;
                }
            }
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Char('S') => self.sign_out(),
            _ => {}
        }
    }

    async fn handle_add_dialog_key(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.input, key.code, false) {
            DialogAction::Confirm => {
                if self.tasks.add(self.input.as_str()).await.is_some() {
                    self.input.clear();
                    self.mode = AppMode::Normal;
                    self.selection.set(Some(0));
                }
            }
            DialogAction::Cancel => {
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            DialogAction::None => {}
        }
    }

    async fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = self.edit.as_mut() else {
            self.close_edit();
            return;
        };
        match handle_dialog_input(&mut edit.input, key.code, true) {
            DialogAction::Confirm => self.save_edit().await,
            DialogAction::Cancel => self.close_edit(),
            DialogAction::None => {}
        }
    }

    /// Go to the screen addressed by `path` (`/` or `/todos/{id}`)
    pub async fn navigate(&mut self, path: &str) -> TodoResult<()> {
        let route = Route::parse(path)
            .ok_or_else(|| TodoError::NotFound(format!("route {}", path)))?;
        if !self.is_authenticated() {
            return Err(TodoError::Unauthenticated(format!("cannot open {}", path)));
        }
        match route {
            Route::List => {
                self.mode = AppMode::Normal;
                self.edit = None;
                while self.router.back() {}
            }
            Route::EditTask(_) => self.open_edit(route).await,
        }
        Ok(())
    }

    /// Push an edit route and build the screen from freshly loaded storage
    pub async fn open_edit(&mut self, route: Route) {
        let Route::EditTask(param) = &route else {
            return;
        };
        let task_param = param.clone();
        self.router.push(route);

        self.tasks.reload().await;
        let task = self.tasks.find_by_param(&task_param).cloned();
        if task.is_none() {
            tracing::warn!("Edit requested for unknown task {}", task_param);
        }
        let input = task
            .as_ref()
            .map(|t| InputState::with_text(t.title.clone()))
            .unwrap_or_default();

        self.edit = Some(EditScreen {
            task_param,
            task,
            input,
        });
        self.selection.clamp(self.tasks.len());
    }

    async fn save_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            if let Some(task) = edit.task {
                self.tasks.rename(task.id, edit.input.as_str()).await;
            }
        }
        self.close_edit();
    }

    fn close_edit(&mut self) {
        self.edit = None;
        self.router.back();
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        finish_session(result, || restore_terminal(&mut terminal))
    }

    async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> TodoResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key).await,
                Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

/// Runs `restore` whatever the loop returned; a loop error takes precedence
fn finish_session(
    result: TodoResult<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> TodoResult<()> {
    let restored = restore();
    result?;
    restored?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn draw_failure() -> TodoResult<()> {
        Err(TodoError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "draw failed")))
    }

    #[test]
    fn test_restore_runs_after_loop_error() {
        let restored = Cell::new(false);

        let result = finish_session(draw_failure(), || {
            restored.set(true);
            Ok(())
        });

        assert!(restored.get());
        assert!(matches!(result, Err(TodoError::Io(e)) if e.to_string() == "draw failed"));
    }

    #[test]
    fn test_restore_error_reported_after_clean_loop() {
        let result = finish_session(Ok(()), || Err(io::Error::other("restore failed")));
        assert!(matches!(result, Err(TodoError::Io(_))));
    }

    #[test]
    fn test_clean_session() {
        let restored = Cell::new(0);
        let result = finish_session(Ok(()), || {
            restored.set(restored.get() + 1);
            Ok(())
        });
        assert!(result.is_ok());
        assert_eq!(restored.get(), 1);
    }
}
