use crate::app::{App, AppMode, EditScreen};
use crate::components::{render_input_popup, render_text_field, InputPopup};
use crate::router::Route;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use todo_domain::{Palette, Task};

pub fn render(app: &App, frame: &mut Frame) {
    let theme = app.theme.theme();
    let palette = theme.palette();

    frame.render_widget(Block::default().style(base(palette)), frame.area());

    if !app.is_authenticated() {
        render_sign_in_required(frame, palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0], palette);

    match app.router.current() {
        Route::List => {
            render_task_list(app, frame, chunks[1], palette);
            render_footer(frame, chunks[2], palette, LIST_KEYS);
            if app.mode == AppMode::AddTask {
                render_input_popup(
                    frame,
                    palette,
                    &InputPopup {
                        title: "Add New Todo",
                        placeholder: "Enter your todo",
                        text: app.input.as_str(),
                        cursor_column: app.input.cursor_column(),
                        hint: "Enter: Add  Esc: Cancel",
                    },
                );
            }
        }
        Route::EditTask(_) => {
            if let Some(edit) = &app.edit {
                render_edit_screen(edit, frame, chunks[1], palette, theme.is_dark());
            }
            render_footer(frame, chunks[2], palette, EDIT_KEYS);
        }
    }
}

const LIST_KEYS: &str =
    "n: New  Enter: Edit  Space: Done  d: Delete  t: Theme  S: Sign out  q: Quit";
const EDIT_KEYS: &str = "Enter: Save  Esc: Cancel";

fn render_header(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(area);

    let greeting = match app.username() {
        Some(name) => format!(" Hello, {}!", name),
        None => String::new(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(greeting, accent(palette))),
        chunks[0],
    );

    let scheme = if app.theme.theme().is_dark() {
        "☾ dark "
    } else {
        "☀ light "
    };
    frame.render_widget(
        Paragraph::new(Span::styled(scheme, label_text(palette))).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_task_list(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .title(" Todos ")
        .borders(Borders::ALL)
        .border_style(border(palette));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tasks = app.tasks.tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled("No todos yet!", placeholder_text()))
            .alignment(Alignment::Center);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1.min(inner.height),
            ..inner
        };
        frame.render_widget(empty, middle);
        return;
    }

    let visible = inner.height as usize;
    let selected = app.selection.get();
    let offset = selected
        .map(|idx| (idx + 1).saturating_sub(visible))
        .unwrap_or(0);

    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, task)| task_line(task, selected == Some(idx), palette))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn task_line<'a>(task: &'a Task, selected: bool, palette: &Palette) -> Line<'a> {
    let marker = if task.completed { "[x] " } else { "[ ] " };
    let title_style = if task.completed {
        done_text()
    } else {
        normal_text(palette)
    };

    let mut line = Line::from(vec![
        Span::styled(marker, label_text(palette)),
        Span::styled(task.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled("✖", delete_icon()),
    ]);
    if selected {
        line = line.style(selected_item(palette));
    }
    line
}

fn render_edit_screen(
    edit: &EditScreen,
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    dark: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let status = match &edit.task {
        Some(task) => Span::styled(format!("Todo #{}", task.id), label_text(palette)),
        None => Span::styled(
            format!("Todo #{} not found", edit.task_param),
            delete_icon(),
        ),
    };
    frame.render_widget(Paragraph::new(status), chunks[0]);

    render_text_field(
        frame,
        chunks[1],
        edit.input.as_str(),
        "Edit Todo",
        edit.input.cursor_column(),
        normal_text(palette),
    );

    let buttons = Line::from(vec![
        Span::styled(" Save ", confirm_button(dark)),
        Span::raw("   "),
        Span::styled(" Cancel ", cancel_button(dark)),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[2]);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette, keys: &str) {
    let footer = Paragraph::new(Span::styled(keys, label_text(palette)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border(palette)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn render_sign_in_required(frame: &mut Frame, palette: &Palette) {
    let area = crate::components::centered_rect(60, 30, frame.area());
    let lines = vec![
        Line::from(Span::styled("Sign in required", accent(palette))),
        Line::from(""),
        Line::from(Span::styled(
            "Start with --user NAME or set TODO_USER.",
            label_text(palette),
        )),
        Line::from(Span::styled("Press q to quit.", label_text(palette))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border(palette)),
            ),
        area,
    );
}
