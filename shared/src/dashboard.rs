//! View state of the list and details pages, independent of the UI toolkit.

use log::{debug, warn};
use std::fmt::Display;

use crate::fetch::{FetchMachine, FetchState, Ticket};
use crate::filter::StatusFilter;
use crate::models::tournament::Tournament;

pub const LIST_LOAD_FAILED: &str = "Couldn't load tournaments. Please try again later.";
pub const CREATE_FAILED: &str = "Failed to add tournament. Please try again.";
pub const DETAIL_LOAD_FAILED: &str = "Failed to load tournament details.";
pub const DETAIL_NOT_FOUND: &str = "Tournament not found";

/// The dashboard collection plus the outcome of the last create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentListState {
    fetch: FetchMachine<Vec<Tournament>>,
    create_error: Option<String>,
}

impl TournamentListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_state(&self) -> &FetchState<Vec<Tournament>> {
        self.fetch.state()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.state().is_loading()
    }

    /// Message for the full-page error, from either the load or a create.
    pub fn error(&self) -> Option<&str> {
        self.create_error.as_deref().or_else(|| self.fetch.state().error())
    }

    pub fn tournaments(&self) -> &[Tournament] {
        self.fetch.state().data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tournaments visible under `filter`, in arrival order.
    pub fn visible(&self, filter: StatusFilter) -> Vec<&Tournament> {
        filter.apply(self.tournaments())
    }

    pub fn begin_load_at(&mut self, ticket: Ticket) -> bool {
        if !self.fetch.begin_at(ticket) {
            return false;
        }
        self.create_error = None;
        true
    }

    pub fn finish_load<E: Display>(&mut self, ticket: Ticket, result: Result<Vec<Tournament>, E>) -> bool {
        self.fetch.resolve(ticket, result, LIST_LOAD_FAILED)
    }

    /// Applies the outcome of a create request.
    ///
    /// The saved record is appended only when the collection has loaded;
    /// a failure sets the fixed create error.
    pub fn finish_create<E: Display>(&mut self, result: Result<Tournament, E>) {
        match result {
            Ok(saved) => match self.fetch.state_mut().data_mut() {
                Some(list) => {
                    debug!("Appending created tournament {}", saved.id);
                    list.push(saved);
                }
                None => warn!("Created tournament {} arrived before the list loaded; dropping it", saved.id),
            },
            Err(e) => {
                warn!("Create request failed: {}", e);
                self.create_error = Some(CREATE_FAILED.to_string());
            }
        }
    }
}

/// Single tournament shown on the details page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentDetailState {
    fetch: FetchMachine<Tournament>,
    requested_id: Option<i64>,
}

impl TournamentDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_state(&self) -> &FetchState<Tournament> {
        self.fetch.state()
    }

    pub fn requested_id(&self) -> Option<i64> {
        self.requested_id
    }

    pub fn tournament(&self) -> Option<&Tournament> {
        self.fetch.state().data()
    }

    /// Heading shown when there is no record to render.
    pub fn failure_heading(&self) -> &str {
        self.fetch.state().error().unwrap_or(DETAIL_NOT_FOUND)
    }

    pub fn begin_load_at(&mut self, id: i64, ticket: Ticket) -> bool {
        if !self.fetch.begin_at(ticket) {
            return false;
        }
        self.requested_id = Some(id);
        true
    }

    pub fn finish_load<E: Display>(&mut self, ticket: Ticket, result: Result<Tournament, E>) -> bool {
        self.fetch.resolve(ticket, result, DETAIL_LOAD_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::tournament::{DraftField, TournamentDraft};
    use crate::error::SharedError;
    use crate::models::tournament::TournamentStatus;
    use pretty_assertions::assert_eq;

    fn tournament(id: i64, status: &str) -> Tournament {
        Tournament {
            id,
            title: format!("Cup {}", id),
            game_name: "Overwatch".to_string(),
            date: "2024-11-30".to_string(),
            prize_pool: 4000.0,
            status: TournamentStatus::from(status),
            description: "6v6, Best of 5".to_string(),
        }
    }

    fn transport(detail: &str) -> SharedError {
        SharedError::Transport(detail.to_string())
    }

    fn begin_list(state: &mut TournamentListState) -> Ticket {
        let ticket = state.fetch.current_ticket().next();
        assert!(state.begin_load_at(ticket));
        ticket
    }

    fn begin_detail(state: &mut TournamentDetailState, id: i64) -> Ticket {
        let ticket = state.fetch.current_ticket().next();
        assert!(state.begin_load_at(id, ticket));
        ticket
    }

    fn loaded(list: Vec<Tournament>) -> TournamentListState {
        let mut state = TournamentListState::new();
        let ticket = begin_list(&mut state);
        assert!(state.finish_load::<SharedError>(ticket, Ok(list)));
        state
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let state = loaded(vec![]);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert!(state.visible(StatusFilter::All).is_empty());
    }

    #[test]
    fn test_failed_load_has_fixed_message_and_no_data() {
        let mut state = TournamentListState::new();
        let ticket = begin_list(&mut state);
        state.finish_load(ticket, Err(transport("unexpected status 500 for /api/tournaments")));

        assert_eq!(state.error(), Some(LIST_LOAD_FAILED));
        assert!(state.tournaments().is_empty());
    }

    #[test]
    fn test_visible_applies_filter() {
        let state = loaded(vec![tournament(1, "Upcoming"), tournament(2, "Completed")]);
        let ids: Vec<i64> = state.visible(StatusFilter::Completed).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(state.tournaments().len(), 2);
    }

    #[test]
    fn test_create_appends_server_record() {
        let mut state = loaded(vec![tournament(1, "Upcoming")]);
        let draft = TournamentDraft::default().with_field(DraftField::Title, "Spring Showdown 2025");

        state.finish_create::<SharedError>(Ok(draft.into_tournament(6)));

        let ids: Vec<i64> = state.tournaments().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert_eq!(state.tournaments()[1].title, "Spring Showdown 2025");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_create_failure_sets_fixed_message_and_keeps_list() {
        let mut state = loaded(vec![tournament(1, "Upcoming")]);

        state.finish_create::<SharedError>(Err(transport("unexpected status 400 for /api/tournaments")));

        assert_eq!(state.error(), Some(CREATE_FAILED));
        assert_eq!(state.tournaments().len(), 1);
    }

    #[test]
    fn test_create_before_load_is_dropped() {
        let mut state = TournamentListState::new();
        begin_list(&mut state);
        state.finish_create::<SharedError>(Ok(tournament(3, "Upcoming")));
        assert!(state.is_loading());
    }

    #[test]
    fn test_detail_success() {
        let mut state = TournamentDetailState::new();
        let ticket = begin_detail(&mut state, 42);
        state.finish_load::<SharedError>(ticket, Ok(tournament(42, "Completed")));

        assert_eq!(state.requested_id(), Some(42));
        assert_eq!(state.tournament().map(|t| t.id), Some(42));
    }

    #[test]
    fn test_detail_failure_heading() {
        let mut state = TournamentDetailState::new();
        assert_eq!(state.failure_heading(), DETAIL_NOT_FOUND);

        let ticket = begin_detail(&mut state, 404);
        state.finish_load(ticket, Err(transport("unexpected status 500 for /api/tournaments/404")));
        assert_eq!(state.failure_heading(), DETAIL_LOAD_FAILED);
        assert_eq!(state.tournament(), None);
    }

    #[test]
    fn test_detail_ignores_response_for_previous_id() {
        let mut state = TournamentDetailState::new();
        let first = begin_detail(&mut state, 1);
        let second = begin_detail(&mut state, 2);

        assert!(!state.finish_load::<SharedError>(first, Ok(tournament(1, "Upcoming"))));
        assert!(state.finish_load::<SharedError>(second, Ok(tournament(2, "Upcoming"))));
        assert_eq!(state.tournament().map(|t| t.id), Some(2));
    }
}
