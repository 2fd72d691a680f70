// Centralized theme for the friends list
// All colors and styles are defined here - edit this file to change the look

use friends_core::models::{MenuCommand, MenuEntry, MenuPayload};
use ratatui::style::{Color, Modifier, Style};

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber/orange
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple (action rows)
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

pub fn title() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn selected_row() -> Style {
    Style::default()
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

/// Style for one menu row: headers muted, friends plain, actions highlighted
pub fn entry_style(entry: &MenuEntry) -> Style {
    match entry.payload {
        MenuPayload::Empty => Style::default()
            .fg(TEXT_MUTED)
            .add_modifier(Modifier::BOLD),
        MenuPayload::Friend {
            command: MenuCommand::None,
            ..
        } => Style::default().fg(TEXT_PRIMARY),
        MenuPayload::Friend {
            command: MenuCommand::RemoveFriend | MenuCommand::IgnoreRequest,
            ..
        } => Style::default().fg(ACCENT_ERROR),
        MenuPayload::Friend {
            command: MenuCommand::AcceptRequest,
            ..
        } => Style::default().fg(ACCENT_SUCCESS),
        MenuPayload::Friend { .. } => Style::default().fg(ACCENT_SPECIAL),
    }
}
