//! Turns the social graph into the ordered rows of the friends overview.
//!
//! Section order is fixed: incoming requests, tag groups, untagged friends
//! (split by status), outgoing requests. All ordering happens here; rows are
//! never re-sorted once they reach the menu.

use std::collections::HashSet;

use crate::constants::{
    offline_header, online_header, GAME_NAME_MAX_CHARS, INCOMING_REQUESTS_HEADER, IN_GAME_HEADER,
    OUTGOING_REQUESTS_HEADER,
};
use crate::menu::FriendsMenu;
use crate::models::{FriendEntry, FriendFlag, MenuEntry, PersonaState, UserId};
use crate::social::SocialGraph;

/// Untagged friends split by status. Every friend lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBuckets {
    pub in_game: Vec<FriendEntry>,
    pub online: Vec<FriendEntry>,
    pub offline: Vec<FriendEntry>,
}

impl StatusBuckets {
    pub fn len(&self) -> usize {
        self.in_game.len() + self.online.len() + self.offline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FriendsListBuilder;

impl FriendsListBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Replace the menu contents with a fresh overview.
    pub fn rebuild<S, M>(&self, social: &S, menu: &mut M)
    where
        S: SocialGraph + ?Sized,
        M: FriendsMenu + ?Sized,
    {
        self.rebuild_with(social, menu, Vec::new());
    }

    /// Like [`rebuild`](Self::rebuild), with `footer` rows appended below the
    /// overview before the cursor is restored.
    pub fn rebuild_with<S, M>(&self, social: &S, menu: &mut M, footer: Vec<MenuEntry>)
    where
        S: SocialGraph + ?Sized,
        M: FriendsMenu + ?Sized,
    {
        menu.push_selected();
        menu.clear();
        for entry in self.build_entries(social).into_iter().chain(footer) {
            menu.add_entry(entry);
        }
        menu.pop_selected();
    }

    pub fn build_entries<S>(&self, social: &S) -> Vec<MenuEntry>
    where
        S: SocialGraph + ?Sized,
    {
        let mut entries = Vec::new();

        add_request_section(
            social,
            FriendFlag::FriendshipRequested,
            INCOMING_REQUESTS_HEADER,
            &mut entries,
        );

        let tagged = add_tag_groups(social, &mut entries);

        // Tagged friends only show under their tags
        let immediate = social.friends(FriendFlag::Immediate);
        if !immediate.is_empty() {
            entries.push(MenuEntry::blank());
            let untagged: Vec<FriendEntry> = immediate
                .into_iter()
                .filter(|id| !tagged.contains(id))
                .map(|id| snapshot_friend(social, id))
                .collect();
            add_friends_by_status(social, untagged, &mut entries);
        }

        add_request_section(
            social,
            FriendFlag::RequestingFriendship,
            OUTGOING_REQUESTS_HEADER,
            &mut entries,
        );

        tracing::debug!(
            "Rebuilt friends list: {} rows, {} tagged friends",
            entries.len(),
            tagged.len()
        );
        entries
    }
}

fn add_request_section<S>(social: &S, flag: FriendFlag, header: &str, entries: &mut Vec<MenuEntry>)
where
    S: SocialGraph + ?Sized,
{
    let users = social.friends(flag);
    if users.is_empty() {
        return;
    }
    entries.push(MenuEntry::blank());
    entries.push(MenuEntry::header(header));
    entries.extend(users.into_iter().map(|id| friend_row(social, id)));
}

/// Adds one section per non-empty tag group. Returns everyone placed.
fn add_tag_groups<S>(social: &S, entries: &mut Vec<MenuEntry>) -> HashSet<UserId>
where
    S: SocialGraph + ?Sized,
{
    let mut tagged = HashSet::new();
    for group in social.friends_groups() {
        if !group.is_valid() || social.friends_group_members_count(group) == 0 {
            continue;
        }

        let name = social.friends_group_name(group).unwrap_or_default();
        entries.push(MenuEntry::blank());
        entries.push(MenuEntry::header(name));

        for member in social.friends_group_members(group) {
            entries.push(friend_row(social, member));
            tagged.insert(member);
        }
    }
    tagged
}

fn add_friends_by_status<S>(social: &S, mut friends: Vec<FriendEntry>, entries: &mut Vec<MenuEntry>)
where
    S: SocialGraph + ?Sized,
{
    sort_by_name(&mut friends);
    let buckets = partition_by_status(friends);

    if !buckets.in_game.is_empty() {
        entries.push(MenuEntry::header(IN_GAME_HEADER));
        for run in game_runs(&buckets.in_game) {
            let game_name = run[0].game.and_then(|game| social.game_name(game));
            entries.push(MenuEntry::header(game_header(game_name.as_deref())));
            // Players are listed by name only, their status is the game
            entries.extend(run.iter().map(|f| MenuEntry::friend(f.name.clone(), f.id)));
        }
        entries.push(MenuEntry::blank());
    }

    if !buckets.online.is_empty() {
        entries.push(MenuEntry::header(online_header(buckets.online.len())));
        entries.extend(buckets.online.iter().map(labelled_row));
        entries.push(MenuEntry::blank());
    }

    if !buckets.offline.is_empty() {
        entries.push(MenuEntry::header(offline_header(buckets.offline.len())));
        entries.extend(buckets.offline.iter().map(labelled_row));
    }
}

fn snapshot_friend<S>(social: &S, id: UserId) -> FriendEntry
where
    S: SocialGraph + ?Sized,
{
    FriendEntry::new(
        id,
        social.persona_name(id),
        social.persona_state(id),
        social.game_played(id),
    )
}

fn friend_row<S>(social: &S, id: UserId) -> MenuEntry
where
    S: SocialGraph + ?Sized,
{
    let label = friend_label(&social.persona_name(id), social.persona_state(id));
    MenuEntry::friend(label, id)
}

fn labelled_row(friend: &FriendEntry) -> MenuEntry {
    MenuEntry::friend(friend_label(&friend.name, friend.state), friend.id)
}

/// `name`, or `name (status)` for states that carry a status text.
pub fn friend_label(name: &str, state: PersonaState) -> String {
    match state.status_text() {
        Some(status) => format!("{} ({})", name, status),
        None => name.to_string(),
    }
}

/// Stable, case-sensitive sort by display name.
pub fn sort_by_name(friends: &mut [FriendEntry]) {
    friends.sort_by(|a, b| a.name.cmp(&b.name));
}

/// In-game wins over online; everything else is offline. Order is preserved.
pub fn partition_by_status(friends: Vec<FriendEntry>) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for friend in friends {
        if friend.in_game() {
            buckets.in_game.push(friend);
        } else if friend.is_online() {
            buckets.online.push(friend);
        } else {
            buckets.offline.push(friend);
        }
    }
    buckets
}

/// Split into runs of adjacent friends playing the same game.
///
/// Only neighbours are merged: two friends in the same game separated by
/// someone in another game end up in separate runs.
pub fn game_runs(friends: &[FriendEntry]) -> Vec<&[FriendEntry]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for idx in 1..=friends.len() {
        if idx == friends.len() || friends[idx].game != friends[start].game {
            runs.push(&friends[start..idx]);
            start = idx;
        }
    }
    runs
}

/// Header row for one run of players, e.g. `| Team Fortress 2 |`.
pub fn game_header(game_name: Option<&str>) -> String {
    let name: String = game_name
        .unwrap_or_default()
        .chars()
        .take(GAME_NAME_MAX_CHARS)
        .collect();
    format!("| {} |", name)
}
