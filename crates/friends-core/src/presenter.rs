//! Selection-driven state machine around the friends overview.
//!
//! Every transition rebuilds the overview from scratch. Friend and request
//! views are the overview with action rows appended below it, not separate
//! screens.

use std::cell::RefCell;
use std::rc::Rc;

use crate::builder::FriendsListBuilder;
use crate::constants::actions;
use crate::events::CoreEvent;
use crate::menu::FriendsMenu;
use crate::models::{MenuCommand, MenuEntry, MenuPayload, OverlayAction, Relationship, UserId};
use crate::social::SocialGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenterState {
    #[default]
    Overview,
    /// Overview plus the action rows for one friend
    FriendDetail(UserId),
}

pub struct FriendsListPresenter<S: SocialGraph, M: FriendsMenu> {
    social: Rc<RefCell<S>>,
    menu: M,
    builder: FriendsListBuilder,
    state: PresenterState,
}

impl<S: SocialGraph, M: FriendsMenu> FriendsListPresenter<S, M> {
    /// Takes sole ownership of `menu` and shows the overview right away.
    pub fn new(social: Rc<RefCell<S>>, menu: M) -> Self {
        let mut presenter = Self {
            social,
            menu,
            builder: FriendsListBuilder::new(),
            state: PresenterState::Overview,
        };
        presenter.show();
        presenter
    }

    pub fn run_frame(&mut self) -> Option<MenuPayload> {
        self.menu.run_frame()
    }

    /// Shows / refreshes the friends overview
    pub fn show(&mut self) {
        self.state = PresenterState::Overview;
        self.builder.rebuild(&*self.social.borrow(), &mut self.menu);
    }

    pub fn on_menu_selection(&mut self, selection: MenuPayload) {
        let MenuPayload::Friend { user, command } = selection else {
            return;
        };
        if !user.is_valid() {
            return;
        }

        let relationship = self.social.borrow().relationship(user);
        match relationship {
            Relationship::RequestRecipient => self.select_incoming_request(user, command),
            Relationship::Friend => self.select_friend(user, command),
            // Outgoing requests and strangers have nothing to offer
            other => {
                tracing::debug!("Ignoring selection of user {} ({:?})", user, other);
            }
        }
    }

    /// Refresh on anyone's persona change except our own.
    pub fn on_persona_changed(&mut self, changed: UserId) {
        if changed == self.social.borrow().self_id() {
            return;
        }
        self.show();
    }

    pub fn handle_event(&mut self, event: &CoreEvent) {
        match event {
            CoreEvent::PersonaChanged { user } => self.on_persona_changed(*user),
            CoreEvent::OverlayActivated { .. } => {}
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    pub fn social(&self) -> &Rc<RefCell<S>> {
        &self.social
    }

    fn select_incoming_request(&mut self, user: UserId, command: MenuCommand) {
        let action = match command {
            MenuCommand::AcceptRequest => Some(OverlayAction::AcceptRequest),
            MenuCommand::IgnoreRequest => Some(OverlayAction::IgnoreRequest),
            _ => None,
        };
        if let Some(action) = action {
            self.social.borrow_mut().activate_overlay_to_user(action, user);
        }

        self.state = PresenterState::Overview;
        self.rebuild_with(vec![
            MenuEntry::action(actions::ACCEPT_REQUEST, user, MenuCommand::AcceptRequest),
            MenuEntry::action(actions::IGNORE_REQUEST, user, MenuCommand::IgnoreRequest),
        ]);
    }

    fn select_friend(&mut self, user: UserId, command: MenuCommand) {
        let action = match command {
            MenuCommand::SendMessage => Some(OverlayAction::Chat),
            MenuCommand::ViewProfile => Some(OverlayAction::ViewProfile),
            MenuCommand::RemoveFriend => Some(OverlayAction::RemoveFriend),
            MenuCommand::Back => {
                self.show();
                return;
            }
            _ => None,
        };
        if let Some(action) = action {
            self.social.borrow_mut().activate_overlay_to_user(action, user);
        }

        self.state = PresenterState::FriendDetail(user);
        self.rebuild_with(vec![
            MenuEntry::blank(),
            MenuEntry::action(actions::SEND_MESSAGE, user, MenuCommand::SendMessage),
            MenuEntry::action(actions::VIEW_PROFILE, user, MenuCommand::ViewProfile),
            MenuEntry::action(actions::REMOVE_FRIEND, user, MenuCommand::RemoveFriend),
            MenuEntry::blank(),
            MenuEntry::action(actions::GO_BACK, user, MenuCommand::Back),
        ]);
    }

    fn rebuild_with(&mut self, footer: Vec<MenuEntry>) {
        self.builder
            .rebuild_with(&*self.social.borrow(), &mut self.menu, footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuModel;
    use crate::models::{PersonaState, Relationship};
    use crate::store::{SocialSnapshot, SocialStore, UserRecord};

    const SELF: u64 = 1;
    const REQUESTER: UserId = UserId(10);
    const FRIEND: UserId = UserId(11);
    const PENDING: UserId = UserId(12);
    const STRANGER: UserId = UserId(13);

    fn snapshot() -> SocialSnapshot {
        SocialSnapshot::new(SELF)
            .with_user(UserRecord::new(10, "R").relationship(Relationship::RequestRecipient))
            .with_user(UserRecord::new(11, "Fay").state(PersonaState::Online))
            .with_user(UserRecord::new(12, "Pat").relationship(Relationship::RequestInitiator))
            .with_user(UserRecord::new(13, "Stan").relationship(Relationship::None))
    }

    const OVERVIEW: [&str; 9] = [
        "",
        "Incoming Friend Requests",
        "R",
        "",
        "Online Friends (1)",
        "Fay",
        "",
        "",
        "Outgoing Friend Requests",
    ];

    fn overview_plus(tail: &[&'static str]) -> Vec<&'static str> {
        let mut labels = OVERVIEW.to_vec();
        labels.push("Pat");
        labels.extend_from_slice(tail);
        labels
    }

    fn presenter() -> FriendsListPresenter<SocialStore, MenuModel> {
        let store = Rc::new(RefCell::new(SocialStore::new(snapshot())));
        FriendsListPresenter::new(store, MenuModel::new())
    }

    /// Overlay actions opened since the last call, oldest first
    fn activations<M: FriendsMenu>(p: &FriendsListPresenter<SocialStore, M>) -> Vec<(OverlayAction, UserId)> {
        p.social()
            .borrow_mut()
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                CoreEvent::OverlayActivated { action, user } => Some((action, user)),
                CoreEvent::PersonaChanged { .. } => None,
            })
            .collect()
    }

    fn select<M: FriendsMenu>(p: &mut FriendsListPresenter<SocialStore, M>, user: UserId, command: MenuCommand) {
        p.on_menu_selection(MenuPayload::Friend { user, command });
    }

    const DETAIL_FOOTER: [&str; 6] = [
        "",
        "Send Message",
        "View Profile",
        "Remove as Friend",
        "",
        "Go Back",
    ];

    /// Menu that records how often it was cleared and what it held at the time
    #[derive(Default)]
    struct CountingMenu {
        inner: MenuModel,
        clears: usize,
        empty_after_clear: bool,
    }

    impl FriendsMenu for CountingMenu {
        fn add_entry(&mut self, entry: MenuEntry) {
            self.inner.add_entry(entry);
        }
        fn clear(&mut self) {
            self.inner.clear();
            self.clears += 1;
            self.empty_after_clear = self.inner.entries().is_empty();
        }
        fn push_selected(&mut self) {
            self.inner.push_selected();
        }
        fn pop_selected(&mut self) {
            self.inner.pop_selected();
        }
        fn run_frame(&mut self) -> Option<MenuPayload> {
            self.inner.run_frame()
        }
        fn entries(&self) -> &[MenuEntry] {
            self.inner.entries()
        }
        fn selected_index(&self) -> usize {
            self.inner.selected_index()
        }
    }

    #[test]
    fn test_new_shows_overview() {
        let p = presenter();
        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(p.menu().labels(), overview_plus(&[]));
    }

    #[test]
    fn test_run_frame_passes_selection_through() {
        let mut p = presenter();
        assert_eq!(p.run_frame(), None);

        p.menu_mut().select_index(5);
        p.menu_mut().activate();
        assert_eq!(p.run_frame(), Some(MenuPayload::friend(FRIEND)));
        assert_eq!(p.run_frame(), None);
    }

    #[test]
    fn test_empty_and_invalid_selections_are_ignored() {
        let mut p = presenter();
        p.on_menu_selection(MenuPayload::EMPTY);
        select(&mut p, UserId::NIL, MenuCommand::SendMessage);

        assert_eq!(p.menu().labels(), overview_plus(&[]));
        assert!(activations(&p).is_empty());
    }

    #[test]
    fn test_outgoing_request_and_stranger_are_ignored() {
        let mut p = presenter();
        select(&mut p, PENDING, MenuCommand::None);
        select(&mut p, STRANGER, MenuCommand::SendMessage);

        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(p.menu().labels(), overview_plus(&[]));
        assert!(activations(&p).is_empty());
    }

    #[test]
    fn test_incoming_request_appends_accept_and_ignore() {
        let mut p = presenter();
        select(&mut p, REQUESTER, MenuCommand::None);

        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(
            p.menu().labels(),
            overview_plus(&["Accept Friend Request", "Ignore Friend Request"])
        );
        let footer = &p.menu().entries()[p.menu().len() - 2..];
        assert_eq!(
            footer[0].payload,
            MenuPayload::Friend {
                user: REQUESTER,
                command: MenuCommand::AcceptRequest
            }
        );
        assert!(activations(&p).is_empty());
    }

    #[test]
    fn test_accept_triggers_exactly_one_action() {
        let mut p = presenter();
        select(&mut p, REQUESTER, MenuCommand::AcceptRequest);

        assert_eq!(
            activations(&p),
            vec![(OverlayAction::AcceptRequest, REQUESTER)]
        );
        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(
            p.menu().labels(),
            overview_plus(&["Accept Friend Request", "Ignore Friend Request"])
        );
    }

    #[test]
    fn test_ignore_request() {
        let mut p = presenter();
        select(&mut p, REQUESTER, MenuCommand::IgnoreRequest);
        assert_eq!(
            activations(&p),
            vec![(OverlayAction::IgnoreRequest, REQUESTER)]
        );
        assert_eq!(p.state(), PresenterState::Overview);
    }

    #[test]
    fn test_selecting_friend_enters_detail() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);

        assert_eq!(p.state(), PresenterState::FriendDetail(FRIEND));
        assert_eq!(p.menu().labels(), overview_plus(&DETAIL_FOOTER));
        assert!(activations(&p).is_empty());
    }

    #[test]
    fn test_detail_actions_dispatch_and_stay_in_detail() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);
        select(&mut p, FRIEND, MenuCommand::SendMessage);
        select(&mut p, FRIEND, MenuCommand::ViewProfile);
        select(&mut p, FRIEND, MenuCommand::RemoveFriend);

        assert_eq!(
            activations(&p),
            vec![
                (OverlayAction::Chat, FRIEND),
                (OverlayAction::ViewProfile, FRIEND),
                (OverlayAction::RemoveFriend, FRIEND),
            ]
        );
        assert_eq!(p.state(), PresenterState::FriendDetail(FRIEND));
        assert_eq!(p.menu().labels(), overview_plus(&DETAIL_FOOTER));
    }

    #[test]
    fn test_back_returns_to_plain_overview() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);
        select(&mut p, FRIEND, MenuCommand::Back);

        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(p.menu().labels(), overview_plus(&[]));
        assert!(activations(&p).is_empty());
    }

    #[test]
    fn test_cursor_stays_on_action_row() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);

        let view_profile = p.menu().len() - 4;
        p.menu_mut().select_index(view_profile);
        p.menu_mut().activate();
        let selection = p.run_frame().unwrap();
        p.on_menu_selection(selection);

        assert_eq!(p.menu().selected_index(), view_profile);
        assert_eq!(p.menu().selected().unwrap().label, "View Profile");
    }

    #[test]
    fn test_persona_change_from_other_user_rebuilds_overview() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);

        p.on_persona_changed(FRIEND);
        assert_eq!(p.state(), PresenterState::Overview);
        assert_eq!(p.menu().labels(), overview_plus(&[]));
    }

    #[test]
    fn test_persona_change_from_self_is_ignored() {
        let store = Rc::new(RefCell::new(SocialStore::new(snapshot())));
        let mut p = FriendsListPresenter::new(store, CountingMenu::default());
        assert_eq!(p.menu().clears, 1);

        p.on_persona_changed(UserId(SELF));
        assert_eq!(p.menu().clears, 1);

        p.on_persona_changed(FRIEND);
        assert_eq!(p.menu().clears, 2);
    }

    #[test]
    fn test_menu_is_empty_right_after_clear() {
        let store = Rc::new(RefCell::new(SocialStore::new(snapshot())));
        let mut p = FriendsListPresenter::new(store, CountingMenu::default());
        select(&mut p, FRIEND, MenuCommand::None);
        assert_eq!(p.menu().clears, 2);
        assert!(p.menu().empty_after_clear);
    }

    #[test]
    fn test_counting_menu_sees_one_clear_per_action() {
        let store = Rc::new(RefCell::new(SocialStore::new(snapshot())));
        let mut p = FriendsListPresenter::new(store, CountingMenu::default());
        select(&mut p, FRIEND, MenuCommand::None);
        select(&mut p, FRIEND, MenuCommand::SendMessage);
        select(&mut p, FRIEND, MenuCommand::Back);

        assert_eq!(p.menu().clears, 4);
        assert_eq!(activations(&p), vec![(OverlayAction::Chat, FRIEND)]);
        assert_eq!(p.state(), PresenterState::Overview);
    }

    #[test]
    fn test_reload_through_events() {
        let mut p = presenter();
        select(&mut p, FRIEND, MenuCommand::None);

        let mut next = snapshot();
        next.users[1].state = PersonaState::Offline;
        let events = p.social().borrow_mut().replace(next);
        assert_eq!(events, vec![CoreEvent::PersonaChanged { user: FRIEND }]);

        for event in &events {
            p.handle_event(event);
        }
        assert_eq!(p.state(), PresenterState::Overview);
        assert!(p.menu().labels().contains(&"Offline (1)"));
    }
}
