//! Matrices, aka. ordered collections of rows sharing an arity.
//!
//! A matrix is owned by whichever [group](crate::db::group) currently holds it.
//! Restriction to a subset of columns is supported both in place and by building a fresh matrix, as call sites differ on which they need.
//! Either way, restriction is followed by a sort and deduplication, so restricted matrices are always in lexicographic order.

use crate::{
    structures::{mask::Mask, row::Row, value::Value},
    types::err::{self, ErrorKind},
};

/// An ordered collection of rows, each with the same arity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    arity: usize,
    rows: Vec<Row>,
}

impl Matrix {
    /// An empty matrix of the given arity.
    pub fn new(arity: usize) -> Self {
        Matrix {
            arity,
            rows: Vec::default(),
        }
    }

    /// A matrix made from the given rows, so long as each row has the given arity.
    pub fn from_rows(arity: usize, rows: Vec<Row>) -> Result<Self, ErrorKind> {
        for (index, row) in rows.iter().enumerate() {
            if row.arity() != arity {
                return Err(ErrorKind::from(err::DataError::ArityMismatch {
                    line: index,
                    expected: arity,
                    found: row.arity(),
                }));
            }
        }
        Ok(Matrix { arity, rows })
    }

    /// The arity of every row of the matrix.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The number of rows of the matrix.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// An iterator over the rows of the matrix, in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Appends a row, so long as the row has the arity of the matrix.
    pub fn append(&mut self, row: Row) -> Result<(), ErrorKind> {
        if row.arity() != self.arity {
            return Err(ErrorKind::from(err::DataError::ArityMismatch {
                line: self.rows.len(),
                expected: self.arity,
                found: row.arity(),
            }));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends every row of `other`, so long as the arities agree.
    pub fn extend(&mut self, other: &Matrix) -> Result<(), ErrorKind> {
        for row in other.rows() {
            self.append(row.clone())?;
        }
        Ok(())
    }

    /// Removes the row at `index`.
    pub fn remove_row(&mut self, index: usize) -> Row {
        self.rows.remove(index)
    }

    /// Sorts the rows lexicographically and removes duplicates.
    pub fn sort_dedup(&mut self) {
        self.rows.sort_unstable();
        self.rows.dedup();
    }

    /// True if some row of the matrix equals `row`.
    pub fn contains(&self, row: &Row) -> bool {
        self.rows.iter().any(|r| r == row)
    }

    /// A fresh matrix holding the restriction of every row to the kept columns of `mask`, deduplicated and sorted.
    pub fn restrict(&self, mask: &Mask) -> Matrix {
        let columns = mask.kept_columns();
        let mut restricted = Matrix {
            arity: columns.len(),
            rows: self.rows.iter().map(|r| r.restrict_to(&columns)).collect(),
        };
        restricted.sort_dedup();
        restricted
    }

    /// Restricts the matrix to the kept columns of `mask`, in place, deduplicated and sorted.
    pub fn restrict_in_place(&mut self, mask: &Mask) {
        let columns = mask.kept_columns();
        for row in &mut self.rows {
            *row = row.restrict_to(&columns);
        }
        self.arity = columns.len();
        self.sort_dedup();
    }

    /// The transpose of the matrix: one row per original column.
    pub fn transpose(&self) -> Matrix {
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(self.rows.len()); self.arity];
        for row in &self.rows {
            for (column, store) in columns.iter_mut().enumerate() {
                store.push(row.value_at(column));
            }
        }
        Matrix {
            arity: self.rows.len(),
            rows: columns.into_iter().map(Row::from).collect(),
        }
    }

    /// A fresh matrix with the polarity of every row swapped through the given bounds.
    pub fn swap_polarity(&self, dmaxs: &[Value]) -> Matrix {
        Matrix {
            arity: self.arity,
            rows: self.rows.iter().map(|r| r.swap_polarity(dmaxs)).collect(),
        }
    }

    /// The distinct values taken at `column`, in ascending order.
    pub fn column_values(&self, column: usize) -> Vec<Value> {
        let mut values: Vec<Value> = self.rows.iter().map(|r| r.value_at(column)).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}
