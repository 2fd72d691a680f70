use crate::models::UserId;

/// What selecting a friend-bound row asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuCommand {
    #[default]
    None,
    AcceptRequest,
    IgnoreRequest,
    ViewProfile,
    SendMessage,
    RemoveFriend,
    Back,
}

/// Data carried by a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuPayload {
    /// Headers and separators
    #[default]
    Empty,
    Friend { user: UserId, command: MenuCommand },
}

impl MenuPayload {
    pub const EMPTY: MenuPayload = MenuPayload::Empty;

    pub fn friend(user: UserId) -> Self {
        MenuPayload::Friend {
            user,
            command: MenuCommand::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MenuPayload::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub payload: MenuPayload,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, payload: MenuPayload) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }

    pub fn header(label: impl Into<String>) -> Self {
        Self::new(label, MenuPayload::EMPTY)
    }

    /// Blank separator row
    pub fn blank() -> Self {
        Self::header("")
    }

    pub fn friend(label: impl Into<String>, user: UserId) -> Self {
        Self::new(label, MenuPayload::friend(user))
    }

    pub fn action(label: impl Into<String>, user: UserId, command: MenuCommand) -> Self {
        Self::new(label, MenuPayload::Friend { user, command })
    }
}
