use crate::types::err::{self};

/// How far the simplification pipeline takes a raw formula.
///
/// Each level includes the levels before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cooking {
    /// Sort only.
    Raw,

    /// Unit resolution.
    Bleu,

    /// Subsumption.
    Medium,

    /// Redundancy elimination.
    WellDone,
}

impl Cooking {
    pub const MIN: Self = Self::Raw;
    pub const MAX: Self = Self::WellDone;
}

impl std::fmt::Display for Cooking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Bleu => write!(f, "bleu"),
            Self::Medium => write!(f, "medium"),
            Self::WellDone => write!(f, "well-done"),
        }
    }
}

impl std::str::FromStr for Cooking {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "bleu" => Ok(Self::Bleu),
            "medium" => Ok(Self::Medium),
            "well-done" => Ok(Self::WellDone),
            _ => Err(err::ConfigError::InvalidValue("cooking")),
        }
    }
}
