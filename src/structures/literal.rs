//! Literals, aka. bound constraints on a single coordinate.
//!
//! A literal expresses an upper bound, a lower bound, both, or nothing, over the bounded integer domain of its coordinate.
//! A [Both](Literal::Both) literal is a disjunction of its halves --- it is satisfied by a value at or below the upper bound *or* at or above the lower bound.
//! With a gap between the bounds, then, a both literal excludes exactly the values strictly between them.
//!
//! ```rust
//! # use otter_learn::structures::literal::Literal;
//! let literal = Literal::Both { leq: 1, geq: 3 };
//!
//! assert!(literal.satisfied_by(0));
//! assert!(literal.satisfied_by(1));
//! assert!(!literal.satisfied_by(2));
//! assert!(literal.satisfied_by(3));
//! ```
//!
//! On a boolean domain an upper bound of zero is the familiar negative literal, and a lower bound of one the familiar positive literal.
//!
//! The coordinate of a literal is *not* part of the literal.
//! Literals are stored one per coordinate in a [clause](crate::structures::clause), and the position of the literal fixes its coordinate.

use crate::structures::value::Value;

/// A constraint on the value of a single coordinate.
///
/// The derived order (none, then upper bounds, then lower bounds, then both) is used to break ties when ordering clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Literal {
    /// No constraint.
    ///
    /// As a disjunct, an absent literal contributes nothing.
    None,

    /// Satisfied by values at or below the bound.
    Leq(Value),

    /// Satisfied by values at or above the bound.
    Geq(Value),

    /// Satisfied by either half.
    Both { leq: Value, geq: Value },
}

impl Literal {
    /// True if the literal is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    /// True if `value` satisfies the literal.
    ///
    /// An absent literal is satisfied by no value, as befits a missing disjunct.
    pub fn satisfied_by(&self, value: Value) -> bool {
        match self {
            Literal::None => false,
            Literal::Leq(n) => value <= *n,
            Literal::Geq(p) => value >= *p,
            Literal::Both { leq, geq } => value <= *leq || value >= *geq,
        }
    }

    /// The literal with its bounds reflected through `dmax`.
    ///
    /// Reflection exchanges upper and lower bounds: a value `v` satisfies the literal if and only if `dmax − v` satisfies the reflection.
    pub fn swap_polarity(&self, dmax: Value) -> Literal {
        match self {
            Literal::None => Literal::None,
            Literal::Leq(n) => Literal::Geq(dmax - n),
            Literal::Geq(p) => Literal::Leq(dmax - p),
            Literal::Both { leq, geq } => Literal::Both {
                leq: dmax - geq,
                geq: dmax - leq,
            },
        }
    }

    /// The disjunction of `self` and `other`, as a single literal.
    ///
    /// Requires the result to be expressible as one literal, which holds whenever the bounds do not cover the whole domain.
    pub fn or(self, other: Literal) -> Literal {
        let (leq, geq) = {
            let (self_leq, self_geq) = self.bounds();
            let (other_leq, other_geq) = other.bounds();
            (max_bound(self_leq, other_leq), min_bound(self_geq, other_geq))
        };
        Literal::from_bounds(leq, geq)
    }

    /// True if every value satisfying `self` satisfies `other`.
    ///
    /// An absent literal implies anything, and only a trivial literal is implied by an absent one.
    pub fn implies(&self, other: &Literal) -> bool {
        let (self_leq, self_geq) = self.bounds();
        let (other_leq, other_geq) = other.bounds();

        let leq_ok = match (self_leq, other_leq) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(s), Some(o)) => s <= o,
        };

        let geq_ok = match (self_geq, other_geq) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(s), Some(o)) => s >= o,
        };

        leq_ok && geq_ok
    }

    /// The upper and lower bound of the literal, if present.
    pub fn bounds(&self) -> (Option<Value>, Option<Value>) {
        match self {
            Literal::None => (None, None),
            Literal::Leq(n) => (Some(*n), None),
            Literal::Geq(p) => (None, Some(*p)),
            Literal::Both { leq, geq } => (Some(*leq), Some(*geq)),
        }
    }

    /// The literal with the given upper and lower bound.
    pub fn from_bounds(leq: Option<Value>, geq: Option<Value>) -> Literal {
        match (leq, geq) {
            (None, None) => Literal::None,
            (Some(n), None) => Literal::Leq(n),
            (None, Some(p)) => Literal::Geq(p),
            (Some(n), Some(p)) => Literal::Both { leq: n, geq: p },
        }
    }

    /// The literal excluding exactly `value` from the domain `0..=dmax`, or an absent literal if the domain has no other value.
    pub fn excluding(value: Value, dmax: Value) -> Literal {
        match (value == 0, value == dmax) {
            (true, true) => Literal::None,
            (true, false) => Literal::Geq(value + 1),
            (false, true) => Literal::Leq(value - 1),
            (false, false) => Literal::Both {
                leq: value - 1,
                geq: value + 1,
            },
        }
    }

    /// True if the literal is satisfied by every value of the domain `0..=dmax`.
    pub fn tautological(&self, dmax: Value) -> bool {
        match self {
            Literal::None => false,
            Literal::Leq(n) => *n >= dmax,
            Literal::Geq(p) => *p == 0,
            Literal::Both { leq, geq } => *geq <= leq + 1,
        }
    }
}

fn max_bound(a: Option<Value>, b: Option<Value>) -> Option<Value> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (bound, None) | (None, bound) => bound,
    }
}

fn min_bound(a: Option<Value>, b: Option<Value>) -> Option<Value> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (bound, None) | (None, bound) => bound,
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, "·"),
            Literal::Leq(n) => write!(f, "<={n}"),
            Literal::Geq(p) => write!(f, ">={p}"),
            Literal::Both { leq, geq } => write!(f, "<={leq}|>={geq}"),
        }
    }
}
