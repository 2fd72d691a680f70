use crate::models::{GameId, PersonaState, UserId};

/// One friend as seen at rebuild time. Never mutated; the next rebuild makes new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendEntry {
    pub id: UserId,
    pub name: String,
    pub state: PersonaState,
    /// Set only while the friend is in a game we can see
    pub game: Option<GameId>,
}

impl FriendEntry {
    pub fn new(id: UserId, name: impl Into<String>, state: PersonaState, game: Option<GameId>) -> Self {
        Self {
            id,
            name: name.into(),
            state,
            game,
        }
    }

    pub fn in_game(&self) -> bool {
        self.game.is_some()
    }

    pub fn is_online(&self) -> bool {
        self.state.is_online()
    }
}
