//! Filter selection over the task list.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::task::Task;

/// Which subset of tasks the view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every task.
    #[default]
    All,
    /// Incomplete tasks only.
    Active,
    /// Completed tasks only.
    Completed,
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter mode {0:?} (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FilterMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns `true` if `task` belongs in the view under this mode.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.is_active(),
            Self::Completed => task.is_completed(),
        }
    }

    /// Tab label for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Position of this mode in [`FilterMode::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    /// Next mode, wrapping from `Completed` back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    /// Previous mode, wrapping from `All` to `Completed`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Active => Self::All,
            Self::Completed => Self::Active,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
