use std::fmt;

use crate::models::tournament::Tournament;

/// Status selector for the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Upcoming, Self::Completed];

    /// Lowercase key compared against a tournament's status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    /// Button text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(&self, tournament: &Tournament) -> bool {
        match self {
            Self::All => true,
            _ => tournament.status.as_str().to_lowercase() == self.as_str(),
        }
    }

    /// Tournaments passing the filter, in their original order.
    pub fn apply<'a>(&self, tournaments: &'a [Tournament]) -> Vec<&'a Tournament> {
        tournaments.iter().filter(|t| self.matches(t)).collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
