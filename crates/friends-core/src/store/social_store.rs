use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::events::CoreEvent;
use crate::models::{
    FriendFlag, FriendsGroupId, GameId, OverlayAction, PersonaState, Relationship, UserId,
};
use crate::social::SocialGraph;
use crate::store::snapshot::{SocialSnapshot, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode snapshot for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Social graph backed by a [`SocialSnapshot`].
/// Replaced wholesale on reload; reports per-user changes as persona events.
pub struct SocialStore {
    snapshot: SocialSnapshot,
    users_by_id: HashMap<UserId, usize>,
    pending_events: Vec<CoreEvent>,
}

impl SocialStore {
    pub fn new(snapshot: SocialSnapshot) -> Self {
        let users_by_id = index_users(&snapshot.users);
        Self {
            snapshot,
            users_by_id,
            pending_events: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(Self::read_snapshot(path)?))
    }

    pub fn read_snapshot(path: &Path) -> Result<SocialSnapshot, StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_snapshot(path: &Path, snapshot: &SocialSnapshot) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(snapshot).map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    pub fn snapshot(&self) -> &SocialSnapshot {
        &self.snapshot
    }

    /// Swap in a new snapshot and report every user whose record was added,
    /// removed or changed. Unchanged users produce nothing.
    pub fn replace(&mut self, snapshot: SocialSnapshot) -> Vec<CoreEvent> {
        let mut changed = Vec::new();

        for user in &snapshot.users {
            if self.user(user.id) != Some(user) && !changed.contains(&user.id) {
                changed.push(user.id);
            }
        }
        let new_index = index_users(&snapshot.users);
        for user in &self.snapshot.users {
            if !new_index.contains_key(&user.id) && !changed.contains(&user.id) {
                changed.push(user.id);
            }
        }

        tracing::debug!(
            "Snapshot replaced: {} users, {} changed",
            snapshot.users.len(),
            changed.len()
        );

        self.snapshot = snapshot;
        self.users_by_id = new_index;
        changed
            .into_iter()
            .map(|user| CoreEvent::PersonaChanged { user })
            .collect()
    }

    pub fn drain_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn user(&self, id: UserId) -> Option<&UserRecord> {
        self.users_by_id
            .get(&id)
            .and_then(|&idx| self.snapshot.users.get(idx))
    }
}

/// First record wins when an id repeats.
fn index_users(users: &[UserRecord]) -> HashMap<UserId, usize> {
    let mut index = HashMap::with_capacity(users.len());
    for (idx, user) in users.iter().enumerate() {
        index.entry(user.id).or_insert(idx);
    }
    index
}

impl SocialGraph for SocialStore {
    fn self_id(&self) -> UserId {
        self.snapshot.self_id
    }

    fn friends(&self, flag: FriendFlag) -> Vec<UserId> {
        self.snapshot
            .users
            .iter()
            .enumerate()
            .filter(|(idx, user)| {
                self.users_by_id.get(&user.id) == Some(idx) && flag.matches(user.relationship)
            })
            .map(|(_, user)| user.id)
            .collect()
    }

    fn friends_groups(&self) -> Vec<FriendsGroupId> {
        self.snapshot.groups.iter().map(|g| g.id).collect()
    }

    fn friends_group_name(&self, group: FriendsGroupId) -> Option<String> {
        self.snapshot
            .groups
            .iter()
            .find(|g| g.id == group)
            .and_then(|g| g.name.clone())
    }

    fn friends_group_members(&self, group: FriendsGroupId) -> Vec<UserId> {
        self.snapshot
            .groups
            .iter()
            .find(|g| g.id == group)
            .map(|g| g.members.clone())
            .unwrap_or_default()
    }

    fn persona_name(&self, user: UserId) -> String {
        self.user(user).map(|u| u.name.clone()).unwrap_or_default()
    }

    fn persona_state(&self, user: UserId) -> PersonaState {
        self.user(user).map(|u| u.state).unwrap_or_default()
    }

    fn game_played(&self, user: UserId) -> Option<GameId> {
        self.user(user).and_then(|u| u.game)
    }

    fn game_name(&self, game: GameId) -> Option<String> {
        self.snapshot
            .games
            .iter()
            .find(|g| g.id == game)
            .map(|g| g.name.clone())
    }

    fn relationship(&self, user: UserId) -> Relationship {
        self.user(user).map(|u| u.relationship).unwrap_or_default()
    }

    fn activate_overlay_to_user(&mut self, action: OverlayAction, user: UserId) {
        tracing::info!("Opening overlay '{}' for user {}", action, user);
        self.pending_events
            .push(CoreEvent::OverlayActivated { action, user });
    }
}
