//! Wizard screen enumeration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four screens of the checklist wizard, in flow order.
///
/// `Related` and `Name` are conditional stops; `Checklist` is terminal until
/// an explicit reset returns the wizard to `Tasks`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Initial task selection
    #[default]
    Tasks,

    /// Suggested companion tasks
    Related,

    /// Checklist naming
    Name,

    /// The consolidated checklist
    Checklist,
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tasks" => Ok(Screen::Tasks),
            "related" => Ok(Screen::Related),
            "name" => Ok(Screen::Name),
            "checklist" => Ok(Screen::Checklist),
            _ => Err(format!("Invalid screen: {s}")),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Screen {
    /// Convert to the string representation used in logs and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Tasks => "tasks",
            Screen::Related => "related",
            Screen::Name => "name",
            Screen::Checklist => "checklist",
        }
    }
}
