use crossterm::event::KeyCode;
use todo_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Feed one key to a text field. With `allow_blank` false, Enter on a blank
/// field does nothing.
pub fn handle_dialog_input(
    input: &mut InputState,
    key_code: KeyCode,
    allow_blank: bool,
) -> DialogAction {
    match key_code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter => {
            if allow_blank || !input.is_blank() {
                DialogAction::Confirm
            } else {
                DialogAction::None
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_then_enter_confirms() {
        let mut input = InputState::new();
        for c in "hi".chars() {
            assert_eq!(
                handle_dialog_input(&mut input, KeyCode::Char(c), false),
                DialogAction::None
            );
        }
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::Confirm
        );
        assert_eq!(input.as_str(), "hi");
    }

    #[test]
    fn test_enter_on_blank_depends_on_allow_blank() {
        let mut input = InputState::with_text("  ");
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, false),
            DialogAction::None
        );
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Enter, true),
            DialogAction::Confirm
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut input = InputState::with_text("draft");
        assert_eq!(
            handle_dialog_input(&mut input, KeyCode::Esc, false),
            DialogAction::Cancel
        );
    }
}
