use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use friends_core::menu::FriendsMenu;
use friends_core::PresenterState;

use crate::ui::app::StatusLevel;
use crate::ui::{layout, theme, App};

const KEY_HINTS: &str = "↑↓ move · enter select · r refresh · q quit";

pub fn render(f: &mut Frame, app: &App) {
    // Fill entire frame with app background (pure black)
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    render_header(f, app, padded(chunks[0]));
    render_menu(f, app, padded(chunks[1]));
    render_footer(f, app, padded(chunks[2]));
    render_statusbar(f, app, padded(chunks[3]));
}

fn padded(area: Rect) -> Rect {
    let pad = layout::CONTENT_PADDING_H;
    Rect {
        x: area.x + pad,
        width: area.width.saturating_sub(pad * 2),
        ..area
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.presenter_state() {
        PresenterState::Overview => "Friends".to_string(),
        PresenterState::FriendDetail(user) => format!("Friends · {}", app.persona_name(user)),
    };
    f.render_widget(Paragraph::new(Span::styled(title, theme::title())), area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let menu = app.menu();
    let items: Vec<ListItem> = menu
        .entries()
        .iter()
        .map(|entry| {
            let label = Span::styled(entry.label.clone(), theme::entry_style(entry));
            ListItem::new(Line::from(label))
        })
        .collect();

    let list = List::new(items).highlight_style(theme::selected_row());
    let mut state = ListState::default().with_selected(Some(menu.selected_index()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.pending_quit {
        ("Press Ctrl+C again to quit", Style::default().fg(theme::ACCENT_ERROR))
    } else {
        (KEY_HINTS, theme::hint())
    };
    f.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.level {
        StatusLevel::Info => theme::TEXT_MUTED,
        StatusLevel::Warning => theme::ACCENT_WARNING,
    };
    f.render_widget(
        Paragraph::new(Span::styled(status.message.as_str(), Style::default().fg(color))),
        area,
    );
}
