//! The headline --- static per-coordinate metadata.
//!
//! A headline fixes, for every coordinate, a human-readable name and the upper bound `dmax` of the coordinate's domain `0..=dmax`.
//! The headline is supplied (or inferred) before any learning runs and is immutable thereafter, and so may be shared freely across workers.

use crate::structures::{mask::Mask, row::Row, value::Value};

/// The name and domain bound of one coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// The human-readable name of the coordinate.
    pub name: String,

    /// The greatest value of the coordinate's domain.
    pub dmax: Value,
}

/// Per-coordinate metadata for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    attributes: Vec<Attribute>,
}

impl Headline {
    /// A headline made of the given attributes.
    pub fn from_attributes(attributes: Vec<Attribute>) -> Self {
        Headline { attributes }
    }

    /// The boolean headline of the given arity, with generated names.
    pub fn boolean(arity: usize) -> Self {
        let attributes = (0..arity)
            .map(|index| Attribute {
                name: format!("x{index}"),
                dmax: 1,
            })
            .collect();
        Headline { attributes }
    }

    /// A headline inferred from rows: generated names, and per-coordinate bounds from the greatest observed values.
    pub fn infer<'a>(arity: usize, rows: impl Iterator<Item = &'a Row>) -> Self {
        let mut dmaxs = vec![0; arity];
        for row in rows {
            for (coordinate, value) in row.values().enumerate() {
                if value > dmaxs[coordinate] {
                    dmaxs[coordinate] = value;
                }
            }
        }
        let attributes = dmaxs
            .into_iter()
            .enumerate()
            .map(|(index, dmax)| Attribute {
                name: format!("x{index}"),
                dmax,
            })
            .collect();
        Headline { attributes }
    }

    /// The number of coordinates.
    pub fn arity(&self) -> usize {
        self.attributes.len()
    }

    /// The attribute of `coordinate`.
    pub fn attribute(&self, coordinate: usize) -> &Attribute {
        &self.attributes[coordinate]
    }

    /// The domain bound of `coordinate`.
    pub fn dmax(&self, coordinate: usize) -> Value {
        self.attributes[coordinate].dmax
    }

    /// The domain bounds of every coordinate, in order.
    pub fn dmax_vec(&self) -> Vec<Value> {
        self.attributes.iter().map(|a| a.dmax).collect()
    }

    /// True if every coordinate is boolean.
    pub fn is_boolean(&self) -> bool {
        self.attributes.iter().all(|a| a.dmax == 1)
    }

    /// The headline restricted to the kept coordinates of `mask`.
    pub fn restrict(&self, mask: &Mask) -> Headline {
        Headline {
            attributes: mask
                .kept_columns()
                .into_iter()
                .map(|c| self.attributes[c].clone())
                .collect(),
        }
    }
}
