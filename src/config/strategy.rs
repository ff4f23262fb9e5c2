use crate::types::err::{self};

/// How much of the example structure a learner consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Eliminate negative examples one by one.
    /// Scales to large example sets, and is the only strategy for every closure on every domain.
    Large,

    /// Characterize the positive examples exactly, ignoring the negative side.
    /// For the Horn family this is restricted to boolean domains.
    Exact,
}

impl Strategy {
    pub const MIN: Self = Self::Large;
    pub const MAX: Self = Self::Exact;
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Large => write!(f, "large"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(Self::Large),
            "exact" => Ok(Self::Exact),
            _ => Err(err::ConfigError::InvalidValue("strategy")),
        }
    }
}
