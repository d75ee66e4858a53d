use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows of history moved per PageUp/PageDown.
const HISTORY_PAGE: isize = 1;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            match ch.to_ascii_lowercase() {
                's' => app.submit(),
                'y' => app.copy_summary(),
                'd' => app.save_summary(),
                't' => app.toggle_theme(),
                'u' => app.clear_input(),
                _ => {}
            }
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.next_style(),
        KeyCode::BackTab => app.prev_style(),
        KeyCode::PageUp => app.scroll_history(-HISTORY_PAGE),
        KeyCode::PageDown => app.scroll_history(HISTORY_PAGE),
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => app.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
