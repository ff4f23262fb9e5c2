//! Rows, aka. fixed-length tuples of values.
//!
//! Rows are value objects.
//! Cloning a row is explicit, and amounts to a flat copy of its values.
//!
//! Two orders are of interest:
//! - The (derived) total lexicographic order, used to sort matrices and to pair lexicographic neighbours in the exact learners.
//! - The element-wise *dominance* order, a partial order, with `a` dominating `b` if and only if every value of `a` is at least the corresponding value of `b`.
//!
//! ```rust
//! # use otter_learn::structures::row::Row;
//! let a = Row::from(vec![1, 1, 0]);
//! let b = Row::from(vec![1, 0, 0]);
//!
//! assert!(a > b);
//! assert!(a.dominates(&b));
//! assert!(!b.dominates(&a));
//!
//! assert_eq!(a.meet(&b), b);
//! ```

use crate::structures::value::Value;

/// An ordered, fixed-length, sequence of values, one per coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// The number of coordinates of the row.
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// The value at `coordinate`.
    ///
    /// Callers are expected to stay within the arity of the row.
    pub fn value_at(&self, coordinate: usize) -> Value {
        self.values[coordinate]
    }

    /// An iterator over the values of the row, in coordinate order.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.values.iter().copied()
    }

    /// True if every value of `self` is at least the corresponding value of `other`.
    ///
    /// Dominance is a partial order on rows of equal arity, and is reflexive.
    pub fn dominates(&self, other: &Row) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(s, o)| s >= o)
    }

    /// The coordinate-wise minimum of `self` and `other`.
    pub fn meet(&self, other: &Row) -> Row {
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(s, o)| *s.min(o))
            .collect();
        Row { values }
    }

    /// The row with every value `v` replaced by `dmax − v`, per coordinate.
    ///
    /// Swapping twice with the same bounds returns the original row.
    pub fn swap_polarity(&self, dmaxs: &[Value]) -> Row {
        let values = self
            .values
            .iter()
            .zip(dmaxs)
            .map(|(v, dmax)| dmax - v)
            .collect();
        Row { values }
    }

    /// The restriction of the row to the given columns, as a fresh row.
    pub fn restrict_to(&self, columns: &[usize]) -> Row {
        let values = columns.iter().map(|c| self.values[*c]).collect();
        Row { values }
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row { values }
    }
}

impl std::ops::Index<usize> for Row {
    type Output = Value;

    fn index(&self, coordinate: usize) -> &Self::Output {
        &self.values[coordinate]
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
