use crate::types::err::{self};

/// Which positive/negative pairings of groups a run learns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskMode {
    /// Every ordered pair of distinct groups.
    OneToOne,

    /// Every group against the union of the others.
    OneToAll,

    /// Each selected group against the union of the others.
    SelectedToAll,
}

impl TaskMode {
    pub const MIN: Self = Self::OneToOne;
    pub const MAX: Self = Self::SelectedToAll;
}

impl std::fmt::Display for TaskMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneToOne => write!(f, "one"),
            Self::OneToAll => write!(f, "all"),
            Self::SelectedToAll => write!(f, "selected"),
        }
    }
}

impl std::str::FromStr for TaskMode {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Self::OneToOne),
            "all" => Ok(Self::OneToAll),
            "selected" => Ok(Self::SelectedToAll),
            _ => Err(err::ConfigError::InvalidValue("mode")),
        }
    }
}
