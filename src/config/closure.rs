use crate::types::err::{self};

/// The logical fragment a run learns formulas in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closure {
    /// Clauses with at most one lower-bound literal.
    Horn,

    /// Clauses with at most one upper-bound literal, learned by reflecting the examples through their domain bounds.
    DualHorn,

    /// Clauses with at most two literals.
    Bijunctive,

    /// Clauses without restriction.
    CNF,
}

impl Closure {
    /// True for the Horn family, whose admissibility test goes through the Horn closure rather than plain disjointness.
    pub fn horn_family(&self) -> bool {
        matches!(self, Closure::Horn | Closure::DualHorn)
    }

    pub const MIN: Self = Self::Horn;
    pub const MAX: Self = Self::CNF;
}

impl std::fmt::Display for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horn => write!(f, "horn"),
            Self::DualHorn => write!(f, "dual-horn"),
            Self::Bijunctive => write!(f, "bijunctive"),
            Self::CNF => write!(f, "cnf"),
        }
    }
}

impl std::str::FromStr for Closure {
    type Err = err::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horn" => Ok(Self::Horn),
            "dual-horn" | "dhorn" => Ok(Self::DualHorn),
            "bijunctive" | "2sat" => Ok(Self::Bijunctive),
            "cnf" => Ok(Self::CNF),
            _ => Err(err::ConfigError::InvalidValue("closure")),
        }
    }
}
