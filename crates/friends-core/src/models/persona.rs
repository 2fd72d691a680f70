use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle for one account on the social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// The handle carried by rows that do not point at anyone
    pub const NIL: UserId = UserId(0);

    pub fn is_valid(&self) -> bool {
        *self != Self::NIL
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::NIL
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

/// Identifier of a user-defined tag group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendsGroupId(pub i16);

impl FriendsGroupId {
    pub const INVALID: FriendsGroupId = FriendsGroupId(-1);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaState {
    #[default]
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl PersonaState {
    /// Every state past offline counts as online, including away and busy.
    pub fn is_online(&self) -> bool {
        !matches!(self, PersonaState::Offline)
    }

    /// Suffix shown after a friend's name, `None` when the name stands alone.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            PersonaState::Offline | PersonaState::Online => None,
            PersonaState::Busy => Some("Busy"),
            PersonaState::Away => Some("Away"),
            PersonaState::Snooze => Some("Snooze"),
            PersonaState::LookingToTrade => Some("Looking To Trade"),
            PersonaState::LookingToPlay => Some("Looking To Play"),
        }
    }
}

/// Directional edge between the local user and another account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    #[default]
    None,
    Friend,
    /// They asked us
    RequestRecipient,
    /// We asked them
    RequestInitiator,
    Blocked,
    Ignored,
}

/// Filter used to enumerate friends by relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendFlag {
    Immediate,
    /// Incoming requests
    FriendshipRequested,
    /// Outgoing requests
    RequestingFriendship,
}

impl FriendFlag {
    pub fn matches(&self, relationship: Relationship) -> bool {
        matches!(
            (self, relationship),
            (FriendFlag::Immediate, Relationship::Friend)
                | (FriendFlag::FriendshipRequested, Relationship::RequestRecipient)
                | (FriendFlag::RequestingFriendship, Relationship::RequestInitiator)
        )
    }
}

/// Social actions the platform performs on our behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    AcceptRequest,
    IgnoreRequest,
    Chat,
    ViewProfile,
    RemoveFriend,
}

impl OverlayAction {
    /// Dialog name understood by the platform overlay
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayAction::AcceptRequest => "friendrequestaccept",
            OverlayAction::IgnoreRequest => "friendrequestignore",
            OverlayAction::Chat => "chat",
            OverlayAction::ViewProfile => "steamid",
            OverlayAction::RemoveFriend => "friendremove",
        }
    }
}

impl fmt::Display for OverlayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
