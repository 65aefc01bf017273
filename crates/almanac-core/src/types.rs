use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Calendar system tag selecting which adapter converts a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSystem {
    #[default]
    Gregorian,
    Egyptian,
    Islamic,
}

impl CalendarSystem {
    /// Every supported system, in display order.
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Egyptian, Self::Islamic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Egyptian => "egyptian",
            Self::Islamic => "islamic",
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::ParseError(format!("unknown calendar system: {s}")))
    }
}
