use crate::theme::{placeholder_text, popup_bg, popup_input, popup_title};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use todo_domain::Palette;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub struct InputPopup<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub text: &'a str,
    pub cursor_column: usize,
    pub hint: &'a str,
}

/// Modal with a title, one text field and a key hint line
pub fn render_input_popup(frame: &mut Frame, palette: &Palette, popup: &InputPopup) {
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Span::styled(popup.title, popup_title())).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_text_field(
        frame,
        chunks[1],
        popup.text,
        popup.placeholder,
        popup.cursor_column,
        popup_input(palette),
    );

    let hint = Paragraph::new(popup.hint).alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

/// Bordered single-line field showing `placeholder` while empty
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    placeholder: &str,
    cursor_column: usize,
    style: ratatui::style::Style,
) {
    let line = if text.is_empty() {
        Line::from(Span::styled(placeholder, placeholder_text()))
    } else {
        Line::from(text)
    };
    let field = Paragraph::new(line)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(field, area);

    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + 1 + cursor_column as u16).min(max_x);
    frame.set_cursor_position((cursor_x, area.y + 1));
}
