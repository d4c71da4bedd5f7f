use super::colors::*;
use ratatui::style::{Modifier, Style};
use todo_domain::Palette;

/// Screen background with the palette's text colour
pub fn base(palette: &Palette) -> Style {
    Style::default()
        .fg(to_color(palette.text))
        .bg(to_color(palette.background))
}

pub fn normal_text(palette: &Palette) -> Style {
    Style::default().fg(to_color(palette.text))
}

pub fn label_text(palette: &Palette) -> Style {
    Style::default().fg(to_color(palette.icon))
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn placeholder_text() -> Style {
    Style::default().fg(PLACEHOLDER_TEXT)
}

pub fn selected_item(palette: &Palette) -> Style {
    Style::default()
        .bg(to_color(palette.button))
        .fg(to_color(palette.background))
}

pub fn border(palette: &Palette) -> Style {
    Style::default().fg(to_color(palette.icon))
}

pub fn accent(palette: &Palette) -> Style {
    Style::default()
        .fg(to_color(palette.button))
        .add_modifier(Modifier::BOLD)
}

pub fn delete_icon() -> Style {
    Style::default().fg(DELETE_ICON)
}

pub fn confirm_button(dark: bool) -> Style {
    button(CONFIRM_BUTTON, dark)
}

pub fn cancel_button(dark: bool) -> Style {
    button(CANCEL_BUTTON, dark)
}

fn button(bg: ratatui::style::Color, dark: bool) -> Style {
    let fg = if dark {
        ratatui::style::Color::White
    } else {
        ratatui::style::Color::Black
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG).fg(POPUP_TEXT)
}

pub fn popup_title() -> Style {
    Style::default().fg(POPUP_TEXT).add_modifier(Modifier::BOLD)
}

pub fn popup_input(palette: &Palette) -> Style {
    Style::default()
        .bg(POPUP_INPUT_BG)
        .fg(to_color(palette.text))
}
