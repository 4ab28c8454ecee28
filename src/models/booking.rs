use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A completed reservation request. Only built from a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub date: String,
    pub time: String,
    /// Guest count as entered; validated to fall in 1..=10 before a
    /// booking is built.
    pub guests: String,
    pub occasion: Occasion,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occasion {
    #[default]
    Birthday,
    Anniversary,
    Business,
    Other,
}

impl Occasion {
    pub const ALL: [Occasion; 4] = [
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::Business,
        Occasion::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::Business => "Business",
            Occasion::Other => "Other",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occasion::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| AppError::UnknownOccasion(s.to_string()))
    }
}
