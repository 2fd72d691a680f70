use crate::models::{OverlayAction, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// Name, presence, game or relationship of a user changed
    PersonaChanged { user: UserId },
    /// An overlay dialog was opened for a user; the platform owns the outcome
    OverlayActivated { action: OverlayAction, user: UserId },
}
