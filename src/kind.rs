use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Selects which counting rule governs interval arithmetic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    /// Every calendar day counts.
    #[default]
    #[display(fmt = "consecutive")]
    Consecutive,
    /// Only Monday through Friday count.
    #[display(fmt = "business")]
    Business,
}

impl FromStr for DayKind {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consecutive" | "calendar" | "c" => Ok(Self::Consecutive),
            "business" | "b" => Ok(Self::Business),
            _ => Err(DateError::InvalidKind(s.to_owned())),
        }
    }
}
