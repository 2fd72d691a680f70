use serde::{Deserialize, Serialize};

use crate::models::{FriendsGroupId, GameId, PersonaState, Relationship, UserId};

/// Everything the platform knows about the local user's social graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSnapshot {
    pub self_id: UserId,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub state: PersonaState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameId>,
    #[serde(default)]
    pub relationship: Relationship,
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            state: PersonaState::Offline,
            game: None,
            relationship: Relationship::Friend,
        }
    }

    pub fn state(mut self, state: PersonaState) -> Self {
        self.state = state;
        self
    }

    pub fn playing(mut self, game: u64) -> Self {
        self.game = Some(GameId(game));
        self
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = relationship;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: FriendsGroupId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
}

impl SocialSnapshot {
    pub fn new(self_id: u64) -> Self {
        Self {
            self_id: UserId(self_id),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_group(mut self, id: i16, name: Option<&str>, members: &[u64]) -> Self {
        self.groups.push(GroupRecord {
            id: FriendsGroupId(id),
            name: name.map(str::to_string),
            members: members.iter().copied().map(UserId).collect(),
        });
        self
    }

    pub fn with_game(mut self, id: u64, name: impl Into<String>) -> Self {
        self.games.push(GameRecord {
            id: GameId(id),
            name: name.into(),
        });
        self
    }

    pub fn user(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }
}
