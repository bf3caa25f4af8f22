//! Menu categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown category {0:?} (expected Starters, Mains or Desserts)")]
    Unknown(String),
}

/// The closed set of menu sections.
///
/// Parsing is case-sensitive: `"Starters"` is a category, `"starters"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 3] = [Self::Starters, Self::Mains, Self::Desserts];

    /// The category name as shown on the menu.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Mains => "Mains",
            Self::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_owned()))
    }
}
