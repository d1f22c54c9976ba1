use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::display::{format_amount, format_date, prize_breakdown, PrizeShare};

/// Lifecycle status of a tournament.
///
/// Parsing is case-insensitive. Anything other than `upcoming` or
/// `completed` is kept verbatim so an unexpected value from the API does not
/// fail the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TournamentStatus {
    Upcoming,
    Completed,
    Other(String),
}

impl TournamentStatus {
    /// Canonical text for the status, as the API and the form use it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

impl From<String> for TournamentStatus {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "upcoming" => Self::Upcoming,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TournamentStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TournamentStatus> for String {
    fn from(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tournament persisted by the remote API. Always carries the
/// server-assigned `id`; unsaved values are `TournamentDraft`s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    /// Server-assigned identifier
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub game_name: String,

    /// ISO-8601 calendar date (`YYYY-MM-DD`), kept as received
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prize_pool: f64,

    #[serde(default = "blank_status", deserialize_with = "status_or_blank")]
    pub status: TournamentStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl Tournament {
    /// Date formatted for cards and the details header.
    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }

    /// Prize pool with a currency sign and thousands separators.
    pub fn display_prize_pool(&self) -> String {
        format!("${}", format_amount(self.prize_pool))
    }

    pub fn prize_breakdown(&self) -> [PrizeShare; 3] {
        prize_breakdown(self.prize_pool)
    }
}

// The API serializes missing columns as `null`; treat them as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_status() -> TournamentStatus {
    TournamentStatus::Other(String::new())
}

fn status_or_blank<'de, D>(deserializer: D) -> Result<TournamentStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(TournamentStatus::from)
        .unwrap_or_else(blank_status))
}
