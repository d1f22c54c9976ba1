use log::{debug, warn};
use shared::{
    DraftField, SharedError, Ticket, Tournament, TournamentDetailState, TournamentDraft,
    TournamentListState,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Hands out the next ticket from a per-component counter.
pub fn issue_ticket(counter: &RefCell<Ticket>) -> Ticket {
    let mut current = counter.borrow_mut();
    *current = current.next();
    *current
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListStore {
    pub view: TournamentListState,
}

#[derive(Debug)]
pub enum ListAction {
    Begin(Ticket),
    Loaded(Ticket, Result<Vec<Tournament>, SharedError>),
    Created(Result<Tournament, SharedError>),
}

impl Reducible for ListStore {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ListAction::Begin(ticket) => next.view.begin_load_at(ticket),
            ListAction::Loaded(ticket, result) => next.view.finish_load(ticket, result),
            ListAction::Created(result) => {
                next.view.finish_create(result);
                true
            }
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailStore {
    pub view: TournamentDetailState,
}

#[derive(Debug)]
pub enum DetailAction {
    Begin { id: i64, ticket: Ticket },
    Loaded(Ticket, Result<Tournament, SharedError>),
}

impl Reducible for DetailStore {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            DetailAction::Begin { id, ticket } => next.view.begin_load_at(id, ticket),
            DetailAction::Loaded(ticket, result) => next.view.finish_load(ticket, result),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Contents of the create form.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftStore {
    pub draft: TournamentDraft,
    /// Raw prize pool text, so partial input like "12." survives re-renders
    pub prize_pool_text: String,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self {
            draft: TournamentDraft::default(),
            prize_pool_text: "0".to_string(),
        }
    }
}

impl DraftStore {
    /// The draft to hand to the dashboard, or `None` while a required
    /// field is still blank. On `Some` the form emits it and closes.
    pub fn submission(&self) -> Option<TournamentDraft> {
        match self.draft.clone().checked() {
            Ok(checked) => {
                debug!("Submitting tournament draft: {}", checked.title);
                Some(checked)
            }
            Err(err) => {
                warn!("Draft not submitted: {}", err);
                None
            }
        }
    }
}

#[derive(Debug)]
pub enum DraftAction {
    Set(DraftField, String),
}

impl Reducible for DraftStore {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Set(field, value) => {
                let draft = self.draft.with_field(field, &value);
                let prize_pool_text = if field == DraftField::PrizePool {
                    value
                } else {
                    self.prize_pool_text.clone()
                };
                Rc::new(Self { draft, prize_pool_text })
            }
        }
    }
}
