pub mod common_modal;
pub mod nav;
pub mod page_state;
pub mod tournament_card;
pub mod tournament_form;
