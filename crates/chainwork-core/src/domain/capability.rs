//! Capability levels.
//!
//! A level is a rank starting at 1. The three common ranks have names, but
//! the scale is open: `CapabilityLevel::from_rank(7)` is a valid level that
//! outranks `LEAD`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CapabilityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "u8")]
pub struct CapabilityLevel(u8);

impl CapabilityLevel {
    pub const JUNIOR: Self = Self(1);
    pub const SENIOR: Self = Self(2);
    pub const LEAD: Self = Self(3);

    /// Build a level from its rank. Rank 0 is not a level.
    pub fn from_rank(rank: u8) -> Result<Self, CapabilityError> {
        if rank == 0 {
            return Err(CapabilityError::ZeroRank);
        }
        Ok(Self(rank))
    }

    pub fn rank(self) -> u8 {
        self.0
    }

    /// True when this level is enough for work requiring `required`.
    pub fn satisfies(self, required: CapabilityLevel) -> bool {
        self >= required
    }

    fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("junior"),
            2 => Some("senior"),
            3 => Some("lead"),
            _ => None,
        }
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "level-{}", self.0),
        }
    }
}

impl FromStr for CapabilityLevel {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "junior" => Ok(Self::JUNIOR),
            "senior" => Ok(Self::SENIOR),
            "lead" => Ok(Self::LEAD),
            other => {
                let digits = other.strip_prefix("level-").unwrap_or(other);
                digits
                    .parse::<u8>()
                    .map_err(|_| CapabilityError::Unknown(trimmed.to_string()))
                    .and_then(Self::from_rank)
            }
        }
    }
}

impl From<CapabilityLevel> for u8 {
    fn from(level: CapabilityLevel) -> Self {
        level.0
    }
}

/// Accepted input shapes: `2` or `"senior"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Rank(u8),
    Name(String),
}

impl TryFrom<LevelRepr> for CapabilityLevel {
    type Error = CapabilityError;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Rank(rank) => Self::from_rank(rank),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}
