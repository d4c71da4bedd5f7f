use ratatui::style::Color;
use todo_domain::Rgb;

pub const DELETE_ICON: Color = Color::Rgb(0xC8, 0x00, 0x00);
pub const CONFIRM_BUTTON: Color = Color::Rgb(0x02, 0x94, 0x04);
pub const CANCEL_BUTTON: Color = Color::Rgb(0xC8, 0x00, 0x00);
pub const DONE_TEXT: Color = Color::Gray;
pub const PLACEHOLDER_TEXT: Color = Color::Gray;

pub const POPUP_BG: Color = Color::Rgb(0xE6, 0xE6, 0xFA);
pub const POPUP_TEXT: Color = Color::Black;
pub const POPUP_INPUT_BG: Color = Color::Rgb(0x3A, 0x3A, 0x3C);

pub fn to_color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}
