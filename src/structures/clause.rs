//! Clauses, aka. disjunctions of literals, one (possibly absent) literal per coordinate.
//!
//! A clause is satisfied by a row whenever some literal of the clause is satisfied by the row's value at the literal's coordinate.
//! The clause with no literals is never satisfied.
//!
//! Clauses are ordered by literal count, then by the index of the first literal, then literal by literal.
//! This order is used throughout: subsumption requires it, and formulas are re-sorted to it after learning.
//!
//! ```rust
//! # use otter_learn::structures::clause::Clause;
//! # use otter_learn::structures::literal::Literal;
//! # use otter_learn::structures::row::Row;
//! let mut clause = Clause::fresh(3);
//! clause.set_literal(0, Literal::Geq(1));
//! clause.set_literal(2, Literal::Leq(0));
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.first_index(), Some(0));
//!
//! assert!(clause.satisfied_by(&Row::from(vec![1, 1, 1])));
//! assert!(!clause.satisfied_by(&Row::from(vec![0, 1, 1])));
//! ```

use crate::structures::{literal::Literal, row::Row, value::Value};

/// One literal per coordinate, read as a disjunction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// The clause of the given width with no literals.
    ///
    /// As the empty disjunction, a fresh clause is unsatisfiable until a literal is set.
    pub fn fresh(width: usize) -> Self {
        Clause {
            literals: vec![Literal::None; width],
        }
    }

    /// The number of coordinates of the clause.
    pub fn width(&self) -> usize {
        self.literals.len()
    }

    /// The literal at `coordinate`.
    pub fn literal(&self, coordinate: usize) -> Literal {
        self.literals[coordinate]
    }

    /// Sets the literal at `coordinate`.
    pub fn set_literal(&mut self, coordinate: usize, literal: Literal) {
        self.literals[coordinate] = literal;
    }

    /// An iterator over every slot of the clause, absent literals included.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// An iterator over the present literals, with their coordinates.
    pub fn present_literals(&self) -> impl Iterator<Item = (usize, Literal)> + '_ {
        self.literals
            .iter()
            .enumerate()
            .filter(|(_, literal)| !literal.is_none())
            .map(|(coordinate, literal)| (coordinate, *literal))
    }

    /// The number of present literals.
    pub fn size(&self) -> usize {
        self.literals.iter().filter(|l| !l.is_none()).count()
    }

    /// True if the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.iter().all(|l| l.is_none())
    }

    /// True if the clause has exactly one literal.
    pub fn is_unit(&self) -> bool {
        self.size() == 1
    }

    /// The coordinate of the first present literal, if any.
    pub fn first_index(&self) -> Option<usize> {
        self.literals.iter().position(|l| !l.is_none())
    }

    /// True if some literal of the clause is satisfied by the corresponding value of `row`.
    pub fn satisfied_by(&self, row: &Row) -> bool {
        self.literals
            .iter()
            .zip(row.values())
            .any(|(literal, value)| literal.satisfied_by(value))
    }

    /// True if no literal of the clause is satisfied by the corresponding value of `row`.
    pub fn falsified_by(&self, row: &Row) -> bool {
        !self.satisfied_by(row)
    }

    /// True if every present literal of `self` implies the corresponding literal of `other`.
    ///
    /// Subsumption in this sense licenses dropping `other` from a formula containing `self`.
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.literals
            .iter()
            .zip(&other.literals)
            .all(|(s, o)| s.is_none() || (!o.is_none() && s.implies(o)))
    }

    /// The clause with every literal's bounds reflected through the corresponding entry of `dmaxs`.
    pub fn swap_polarity(&self, dmaxs: &[Value]) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .zip(dmaxs)
                .map(|(literal, dmax)| literal.swap_polarity(*dmax))
                .collect(),
        }
    }
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Clause {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.first_index().cmp(&other.first_index()))
            .then_with(|| self.literals.cmp(&other.literals))
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut presented = self.present_literals();
        if let Some((coordinate, literal)) = presented.next() {
            write!(f, "x{coordinate}{literal}")?;
            for (coordinate, literal) in presented {
                write!(f, " x{coordinate}{literal}")?;
            }
        } else {
            write!(f, "⊥")?;
        }
        Ok(())
    }
}
