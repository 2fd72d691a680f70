pub mod snapshot;
pub mod social_store;

pub use snapshot::{GameRecord, GroupRecord, SocialSnapshot, UserRecord};
pub use social_store::{SocialStore, StoreError};
