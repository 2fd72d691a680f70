pub mod builder;
pub mod config;
pub mod constants;
pub mod events;
pub mod menu;
pub mod models;
pub mod presenter;
pub mod social;
pub mod store;

pub use builder::FriendsListBuilder;
pub use menu::{FriendsMenu, MenuModel};
pub use presenter::{FriendsListPresenter, PresenterState};
pub use social::SocialGraph;
pub use store::{SocialSnapshot, SocialStore, StoreError};
