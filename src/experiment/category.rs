//! Category - closed set of experiment disciplines

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Scientific discipline an experiment belongs to.
///
/// The set is closed: parsing accepts only the exact, case-sensitive labels
/// returned by [`Category::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Chemistry experiments.
    Chemistry,
    /// Biology experiments.
    Biology,
    /// Physics experiments.
    Physics,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Chemistry, Self::Biology, Self::Physics];

    /// Surface label used for parsing and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::Physics => "Physics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidCategory {
                input: s.to_string(),
            })
    }
}
