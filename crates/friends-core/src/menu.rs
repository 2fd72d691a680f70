use crate::models::{MenuEntry, MenuPayload};

/// Menu widget the presenter draws into.
pub trait FriendsMenu {
    fn add_entry(&mut self, entry: MenuEntry);

    fn clear(&mut self);

    /// Remember the row under the cursor so a rebuild can put the cursor back
    fn push_selected(&mut self);

    /// Restore the cursor saved by the last `push_selected`
    fn pop_selected(&mut self);

    /// Render/poll for one frame. Yields at most one selection.
    fn run_frame(&mut self) -> Option<MenuPayload>;

    fn entries(&self) -> &[MenuEntry];

    fn selected_index(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct SavedCursor {
    index: usize,
    payload: MenuPayload,
}

/// Ordered rows plus a cursor. Rows are never reordered after insertion.
#[derive(Debug, Clone, Default)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
    index: usize,
    saved: Option<SavedCursor>,
    activated: Option<MenuPayload>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
    }

    pub fn select_index(&mut self, index: usize) {
        self.index = index;
        self.clamp_index();
    }

    /// Queue the row under the cursor; the next `run_frame` yields it once.
    pub fn activate(&mut self) {
        self.activated = self.entries.get(self.index).map(|e| e.payload);
    }

    pub fn selected(&self) -> Option<&MenuEntry> {
        self.entries.get(self.index)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clamp index to valid range when list shrinks
    fn clamp_index(&mut self) {
        if self.entries.is_empty() {
            self.index = 0;
        } else {
            self.index = self.index.min(self.entries.len() - 1);
        }
    }
}

impl FriendsMenu for MenuModel {
    fn add_entry(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
        self.activated = None;
    }

    fn push_selected(&mut self) {
        self.saved = self.entries.get(self.index).map(|e| SavedCursor {
            index: self.index,
            payload: e.payload,
        });
    }

    fn pop_selected(&mut self) {
        let Some(saved) = self.saved.take() else {
            self.clamp_index();
            return;
        };

        let same_row = if saved.payload.is_empty() {
            None
        } else {
            self.entries.iter().position(|e| e.payload == saved.payload)
        };
        self.index = same_row.unwrap_or(saved.index);
        self.clamp_index();
    }

    fn run_frame(&mut self) -> Option<MenuPayload> {
        self.activated.take()
    }

    fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    fn selected_index(&self) -> usize {
        self.index
    }
}
