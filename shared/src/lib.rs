pub mod models {
    pub mod tournament;
}

pub mod dto {
    pub mod tournament;
}

pub mod dashboard;
pub mod display;
pub mod error;
pub mod fetch;
pub mod filter;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::tournament::{Tournament, TournamentStatus};
pub use dto::tournament::{TournamentDraft, DraftField, parse_prize_pool};

pub use dashboard::{
    TournamentListState, TournamentDetailState,
    LIST_LOAD_FAILED, CREATE_FAILED, DETAIL_LOAD_FAILED, DETAIL_NOT_FOUND,
};
pub use display::{PrizePlace, PrizeShare, RULES, prize_breakdown, format_amount, format_date};
pub use fetch::{FetchMachine, FetchState, Ticket};
pub use filter::StatusFilter;
