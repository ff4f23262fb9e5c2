use crate::types::err::{self};

/// The order in which relevance search visits coordinates.
///
/// The search is greedy, so different orders may settle on different kept sets, of different sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Ascending coordinate index.
    Ascending,

    /// Descending coordinate index.
    Descending,

    /// A random permutation, drawn from the seeded generator of the run.
    Random,

    /// Ascending count of positive rows with a nonzero value at the coordinate.
    LowScore,

    /// Descending count of positive rows with a nonzero value at the coordinate.
    HighScore,

    /// Descending externally supplied precedence weight.
    Precedence,
}

impl Direction {
    pub const MIN: Self = Self::Ascending;
    pub const MAX: Self = Self::Precedence;
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
            Self::Random => write!(f, "random"),
            Self::LowScore => write!(f, "low-score"),
            Self::HighScore => write!(f, "high-score"),
            Self::Precedence => write!(f, "precedence"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "random" => Ok(Self::Random),
            "low-score" => Ok(Self::LowScore),
            "high-score" => Ok(Self::HighScore),
            "precedence" => Ok(Self::Precedence),
            _ => Err(err::ConfigError::InvalidValue("direction")),
        }
    }
}
