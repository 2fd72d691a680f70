use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::App;

/// Route one key press: app-level keys first, everything else goes to the menu.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.pending_quit {
            app.quit();
        } else {
            // First Ctrl+C - set pending (footer shows warning)
            app.pending_quit = true;
        }
        return;
    }
    app.pending_quit = false;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') => app.refresh(),
        _ => app.queue_menu_key(key),
    }
}
