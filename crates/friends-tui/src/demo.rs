//! Sample social graph written on first launch so there is something to browse.

use friends_core::models::{PersonaState, Relationship};
use friends_core::store::{SocialSnapshot, UserRecord};

pub const SPACEWAR: u64 = 480;
pub const TEAM_FORTRESS: u64 = 440;

pub fn sample_snapshot() -> SocialSnapshot {
    SocialSnapshot::new(1)
        .with_user(
            UserRecord::new(20, "Rook")
                .state(PersonaState::Online)
                .relationship(Relationship::RequestRecipient),
        )
        .with_user(UserRecord::new(21, "Ember").state(PersonaState::Online))
        .with_user(UserRecord::new(22, "Vex").state(PersonaState::Away))
        .with_user(
            UserRecord::new(23, "Juno")
                .state(PersonaState::Online)
                .playing(SPACEWAR),
        )
        .with_user(
            UserRecord::new(24, "Kite")
                .state(PersonaState::LookingToPlay)
                .playing(TEAM_FORTRESS),
        )
        .with_user(UserRecord::new(25, "Marlow").state(PersonaState::Busy))
        .with_user(UserRecord::new(26, "ada").state(PersonaState::Online))
        .with_user(UserRecord::new(27, "Nox"))
        .with_user(UserRecord::new(28, "Orin").state(PersonaState::Snooze))
        .with_user(
            UserRecord::new(29, "Quinn").relationship(Relationship::RequestInitiator),
        )
        .with_group(1, Some("Clan"), &[21, 22])
        .with_game(SPACEWAR, "Spacewar")
        .with_game(TEAM_FORTRESS, "Team Fortress 2")
}
