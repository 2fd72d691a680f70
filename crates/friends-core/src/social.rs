//! Query surface of the social platform.
//!
//! Every query degrades to an empty or default answer for unknown users,
//! groups or games. Callers treat that as "nothing to show", never as an
//! error.

use crate::models::{
    FriendFlag, FriendsGroupId, GameId, OverlayAction, PersonaState, Relationship, UserId,
};

pub trait SocialGraph {
    /// The local user
    fn self_id(&self) -> UserId;

    /// Users matching `flag`, in the platform's enumeration order
    fn friends(&self, flag: FriendFlag) -> Vec<UserId>;

    fn friend_count(&self, flag: FriendFlag) -> usize {
        self.friends(flag).len()
    }

    /// Tag groups in the platform's order. May contain `FriendsGroupId::INVALID`.
    fn friends_groups(&self) -> Vec<FriendsGroupId>;

    fn friends_group_name(&self, group: FriendsGroupId) -> Option<String>;

    fn friends_group_members(&self, group: FriendsGroupId) -> Vec<UserId>;

    fn friends_group_members_count(&self, group: FriendsGroupId) -> usize {
        self.friends_group_members(group).len()
    }

    fn persona_name(&self, user: UserId) -> String;

    fn persona_state(&self, user: UserId) -> PersonaState;

    /// The game `user` is currently playing, if any
    fn game_played(&self, user: UserId) -> Option<GameId>;

    fn game_name(&self, game: GameId) -> Option<String>;

    fn relationship(&self, user: UserId) -> Relationship;

    /// Open a platform dialog for `user`. Fire-and-forget: the outcome, if any,
    /// arrives later as a persona change.
    fn activate_overlay_to_user(&mut self, action: OverlayAction, user: UserId);
}
