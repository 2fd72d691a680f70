//! Labels and limits shared by the builder and the presenter.

/// File name of the social snapshot inside the data directory
pub const SNAPSHOT_FILE_NAME: &str = "friends.json";

// Section headers
pub const INCOMING_REQUESTS_HEADER: &str = "Incoming Friend Requests";
pub const OUTGOING_REQUESTS_HEADER: &str = "Outgoing Friend Requests";
pub const IN_GAME_HEADER: &str = "In Game";

/// Longest game name shown in an in-game run header, in characters
pub const GAME_NAME_MAX_CHARS: usize = 255;

// Action rows appended below the overview
pub mod actions {
    pub const ACCEPT_REQUEST: &str = "Accept Friend Request";
    pub const IGNORE_REQUEST: &str = "Ignore Friend Request";
    pub const SEND_MESSAGE: &str = "Send Message";
    pub const VIEW_PROFILE: &str = "View Profile";
    pub const REMOVE_FRIEND: &str = "Remove as Friend";
    pub const GO_BACK: &str = "Go Back";
}

/// Header for the online bucket, carrying the bucket size
pub fn online_header(count: usize) -> String {
    format!("Online Friends ({})", count)
}

/// Header for the offline bucket, carrying the bucket size
pub fn offline_header(count: usize) -> String {
    format!("Offline ({})", count)
}
