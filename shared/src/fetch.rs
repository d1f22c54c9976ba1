//! Loading/success/failure lifecycle of one remote read.
//!
//! Each activation takes a fresh [`Ticket`]. Only the response carrying the
//! current ticket may move the machine out of `Loading`; anything older is
//! dropped, so a slow response for a previous identifier cannot overwrite
//! the state of a newer one.

use log::{debug, warn};
use std::fmt::Display;

/// Identifies one activation of a [`FetchMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    pub fn next(self) -> Self {
        Ticket(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    /// Carries the fixed user-facing message, never the underlying error.
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchMachine<T> {
    state: FetchState<T>,
    ticket: Ticket,
}

impl<T> Default for FetchMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchMachine<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Loading,
            ticket: Ticket::default(),
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FetchState<T> {
        &mut self.state
    }

    pub fn current_ticket(&self) -> Ticket {
        self.ticket
    }

    /// Restarts at `Loading` under a ticket issued by the caller.
    ///
    /// Tickets must increase; an older or repeated one is ignored and
    /// `false` is returned.
    pub fn begin_at(&mut self, ticket: Ticket) -> bool {
        if ticket <= self.ticket {
            debug!("Ignoring restart with outdated ticket {:?} (current {:?})", ticket, self.ticket);
            return false;
        }
        self.ticket = ticket;
        self.state = FetchState::Loading;
        true
    }

    /// Applies the outcome of the request issued under `ticket`.
    ///
    /// Returns `false` without touching the state when the ticket is stale
    /// or the current activation has already been resolved.
    pub fn resolve<E: Display>(
        &mut self,
        ticket: Ticket,
        result: Result<T, E>,
        failure_message: &str,
    ) -> bool {
        if ticket != self.ticket {
            debug!("Discarding stale response for {:?} (current {:?})", ticket, self.ticket);
            return false;
        }
        if !self.state.is_loading() {
            debug!("Discarding duplicate response for {:?}", ticket);
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => {
                warn!("Request {:?} failed: {}", ticket, e);
                FetchState::Failure(failure_message.to_string())
            }
        };
        true
    }
}
