use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::tournament::{Tournament, TournamentStatus};

/// An unsaved tournament as collected by the creation form.
///
/// Never has an `id`; the API assigns one when the draft is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Game name is required"))]
    pub game_name: String,

    /// `YYYY-MM-DD`, as produced by a date input
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    pub prize_pool: f64,

    pub status: TournamentStatus,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl Default for TournamentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            game_name: String::new(),
            date: String::new(),
            prize_pool: 0.0,
            status: TournamentStatus::Upcoming,
            description: String::new(),
        }
    }
}

/// Form fields of a draft, named as the inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    GameName,
    Date,
    PrizePool,
    Status,
    Description,
}

impl DraftField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::GameName => "gameName",
            Self::Date => "date",
            Self::PrizePool => "prizePool",
            Self::Status => "status",
            Self::Description => "description",
        }
    }
}

impl TournamentDraft {
    /// Returns a copy with one field replaced by raw input text.
    pub fn with_field(&self, field: DraftField, value: &str) -> Self {
        let mut draft = self.clone();
        match field {
            DraftField::Title => draft.title = value.to_string(),
            DraftField::GameName => draft.game_name = value.to_string(),
            DraftField::Date => draft.date = value.to_string(),
            DraftField::PrizePool => draft.prize_pool = parse_prize_pool(value),
            DraftField::Status => draft.status = TournamentStatus::from(value),
            DraftField::Description => draft.description = value.to_string(),
        }
        draft
    }

    /// Checks the required fields, returning the draft unchanged if they are all filled.
    pub fn checked(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Pairs the draft with a server-assigned id.
    pub fn into_tournament(self, id: i64) -> Tournament {
        Tournament {
            id,
            title: self.title,
            game_name: self.game_name,
            date: self.date,
            prize_pool: self.prize_pool,
            status: self.status,
            description: self.description,
        }
    }
}

/// Parses prize pool input, falling back to zero for anything that is not a finite number.
pub fn parse_prize_pool(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharedError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn filled() -> TournamentDraft {
        TournamentDraft::default()
            .with_field(DraftField::Title, "Summer Brawl")
            .with_field(DraftField::GameName, "Fortnite")
            .with_field(DraftField::Date, "2025-06-15")
            .with_field(DraftField::PrizePool, "7500")
            .with_field(DraftField::Description, "Solo, Battle Royale")
    }

    #[test]
    fn test_default_draft() {
        let draft = TournamentDraft::default();
        assert_eq!(draft.prize_pool, 0.0);
        assert_eq!(draft.status, TournamentStatus::Upcoming);
        assert!(draft.title.is_empty());
    }

    #[rstest]
    #[case("1500", 1500.0)]
    #[case(" 99.5 ", 99.5)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    fn test_parse_prize_pool(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_prize_pool(raw), expected);
    }

    #[test]
    fn test_draft_wire_format_has_no_id() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Summer Brawl",
                "gameName": "Fortnite",
                "date": "2025-06-15",
                "prizePool": 7500.0,
                "status": "Upcoming",
                "description": "Solo, Battle Royale"
            })
        );
    }

    #[test]
    fn test_status_field_from_select() {
        let draft = filled().with_field(DraftField::Status, "Completed");
        assert_eq!(draft.status, TournamentStatus::Completed);
    }

    #[test]
    fn test_checked_accepts_filled_draft() {
        assert!(filled().checked().is_ok());
    }

    #[rstest]
    #[case(DraftField::Title)]
    #[case(DraftField::GameName)]
    #[case(DraftField::Date)]
    #[case(DraftField::Description)]
    fn test_checked_rejects_blank_required_field(#[case] field: DraftField) {
        let draft = filled().with_field(field, "");
        assert!(matches!(draft.checked(), Err(SharedError::Validation(_))));
    }

    #[test]
    fn test_zero_prize_pool_is_allowed() {
        let draft = filled().with_field(DraftField::PrizePool, "");
        assert!(draft.checked().is_ok());
    }

    #[test]
    fn test_into_tournament_keeps_fields() {
        let tournament = filled().into_tournament(6);
        assert_eq!(tournament.id, 6);
        assert_eq!(tournament.title, "Summer Brawl");
        assert_eq!(tournament.prize_pool, 7500.0);
    }
}
