// Contract Domain Model

use serde::{Deserialize, Serialize};

/// Kind of engagement an employee is on.
///
/// Adding a kind here means adding a rate to [`super::GrossDailyRates`] and an
/// [`super::Employee`] variant alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Contract {
    Permanent,
    Null,
}

impl Contract {
    /// Every contract kind, in declaration order
    pub const ALL: [Contract; 2] = [Contract::Permanent, Contract::Null];

    pub fn is_null(self) -> bool {
        self == Contract::Null
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Contract::Permanent => write!(f, "PERMANENT"),
            Contract::Null => write!(f, "NULL"),
        }
    }
}
