use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::SystemTime;

use crossterm::event::KeyEvent;
use friends_core::events::CoreEvent;
use friends_core::models::UserId;
use friends_core::social::SocialGraph;
use friends_core::{FriendsListPresenter, PresenterState, SocialStore};

use crate::ui::menu_widget::TerminalMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms, second quits
    pub pending_quit: bool,
    pub status: Option<Status>,
    store: Rc<RefCell<SocialStore>>,
    presenter: FriendsListPresenter<SocialStore, TerminalMenu>,
    snapshot_path: PathBuf,
    snapshot_modified: Option<SystemTime>,
}

impl App {
    pub fn new(store: SocialStore, snapshot_path: PathBuf) -> Self {
        let store = Rc::new(RefCell::new(store));
        let presenter = FriendsListPresenter::new(store.clone(), TerminalMenu::new());
        let snapshot_modified = modified_time(&snapshot_path);
        Self {
            running: true,
            pending_quit: false,
            status: None,
            store,
            presenter,
            snapshot_path,
            snapshot_modified,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn menu(&self) -> &TerminalMenu {
        self.presenter.menu()
    }

    pub fn presenter_state(&self) -> PresenterState {
        self.presenter.state()
    }

    pub fn persona_name(&self, user: UserId) -> String {
        self.store.borrow().persona_name(user)
    }

    pub fn queue_menu_key(&mut self, key: KeyEvent) {
        self.presenter.menu_mut().queue_key(key);
    }

    pub fn refresh(&mut self) {
        self.presenter.show();
        self.set_status("Refreshed");
    }

    /// One frame: poll the menu and dispatch at most one selection.
    pub fn run_frame(&mut self) {
        if let Some(selection) = self.presenter.run_frame() {
            self.presenter.on_menu_selection(selection);
        }
        let events = self.store.borrow_mut().drain_events();
        self.handle_core_events(&events);
    }

    /// Reload the snapshot when its file changed on disk.
    pub fn check_for_snapshot_updates(&mut self) {
        let modified = modified_time(&self.snapshot_path);
        if modified.is_none() || modified == self.snapshot_modified {
            return;
        }
        self.snapshot_modified = modified;

        match SocialStore::read_snapshot(&self.snapshot_path) {
            Ok(snapshot) => {
                let events = self.store.borrow_mut().replace(snapshot);
                tracing::info!("Snapshot reloaded, {} persona changes", events.len());
                self.handle_core_events(&events);
            }
            Err(e) => {
                tracing::warn!("Keeping previous snapshot: {}", e);
                self.set_warning_status(&format!("Snapshot reload failed: {}", e));
            }
        }
    }

    pub fn handle_core_events(&mut self, events: &[CoreEvent]) {
        for event in events {
            if let CoreEvent::OverlayActivated { action, user } = event {
                let name = self.store.borrow().persona_name(*user);
                self.set_status(&format!("Opened {} for {}", action, name));
            }
            self.presenter.handle_event(event);
        }
    }

    pub fn set_status(&mut self, message: &str) {
        self.status = Some(Status {
            level: StatusLevel::Info,
            message: message.to_string(),
        });
    }

    pub fn set_warning_status(&mut self, message: &str) {
        self.status = Some(Status {
            level: StatusLevel::Warning,
            message: message.to_string(),
        });
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
