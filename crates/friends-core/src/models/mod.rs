pub mod friend;
pub mod menu_entry;
pub mod persona;

pub use friend::FriendEntry;
pub use menu_entry::{MenuCommand, MenuEntry, MenuPayload};
pub use persona::{
    FriendFlag, FriendsGroupId, GameId, OverlayAction, PersonaState, Relationship, UserId,
};
