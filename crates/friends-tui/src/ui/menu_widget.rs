use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;

use friends_core::menu::{FriendsMenu, MenuModel};
use friends_core::models::{MenuEntry, MenuPayload};

use crate::ui::layout::PAGE_ROWS;

/// Result of handling a key in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKeyAction {
    /// Cursor moved or nothing happened
    Continue,
    /// The row under the cursor was activated
    Activated,
}

/// Apply one navigation key to the model.
/// Takes KeyEvent (not KeyCode) to ignore Ctrl/Alt combos.
pub fn handle_menu_key(model: &mut MenuModel, key: KeyEvent) -> MenuKeyAction {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return MenuKeyAction::Continue;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => model.move_up(),
        KeyCode::Down | KeyCode::Char('j') => model.move_down(),
        KeyCode::PageUp => {
            for _ in 0..PAGE_ROWS {
                model.move_up();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..PAGE_ROWS {
                model.move_down();
            }
        }
        KeyCode::Home | KeyCode::Char('g') => model.select_index(0),
        KeyCode::End | KeyCode::Char('G') => model.select_index(usize::MAX),
        KeyCode::Enter => {
            model.activate();
            return MenuKeyAction::Activated;
        }
        _ => {}
    }
    MenuKeyAction::Continue
}

/// Menu widget driven by terminal keys.
/// Keys are queued by the event loop and consumed one frame at a time.
#[derive(Debug, Default)]
pub struct TerminalMenu {
    model: MenuModel,
    pending_keys: VecDeque<KeyEvent>,
}

impl TerminalMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_key(&mut self, key: KeyEvent) {
        self.pending_keys.push_back(key);
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }
}

impl FriendsMenu for TerminalMenu {
    fn add_entry(&mut self, entry: MenuEntry) {
        self.model.add_entry(entry);
    }

    fn clear(&mut self) {
        self.model.clear();
    }

    fn push_selected(&mut self) {
        self.model.push_selected();
    }

    fn pop_selected(&mut self) {
        self.model.pop_selected();
    }

    /// Drain queued keys until one selects a row; later keys wait for the next frame.
    fn run_frame(&mut self) -> Option<MenuPayload> {
        while let Some(key) = self.pending_keys.pop_front() {
            if handle_menu_key(&mut self.model, key) == MenuKeyAction::Activated {
                if let Some(selection) = self.model.run_frame() {
                    return Some(selection);
                }
            }
        }
        None
    }

    fn entries(&self) -> &[MenuEntry] {
        self.model.entries()
    }

    fn selected_index(&self) -> usize {
        self.model.selected_index()
    }
}
