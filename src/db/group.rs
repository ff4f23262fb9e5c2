//! The group database --- named example matrices.
//!
//! Each group pairs a label with the matrix of example rows read for that label.
//! The database is built once while loading input, and is read-only for the duration of learning: learners only ever work on masked or cloned copies.

use crate::{
    structures::{matrix::Matrix, row::Row},
    types::err::{self, ErrorKind},
};

/// A named matrix, the example set of one labeled class.
#[derive(Clone, Debug)]
pub struct Group {
    /// The label of the group.
    pub name: String,

    /// The example rows of the group.
    pub matrix: Matrix,
}

/// The groups of a run, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct GroupDB {
    groups: Vec<Group>,
}

impl GroupDB {
    /// Appends `row` to the group named `name`, creating the group if the name is fresh.
    pub fn insert_row(&mut self, name: &str, row: Row) -> Result<(), ErrorKind> {
        match self.groups.iter().position(|g| g.name == name) {
            Some(index) => self.groups[index].matrix.append(row),
            None => {
                let mut matrix = Matrix::new(row.arity());
                matrix.append(row)?;
                self.groups.push(Group {
                    name: name.to_owned(),
                    matrix,
                });
                Ok(())
            }
        }
    }

    /// The number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// True if no group has been created.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group at `index`.
    pub fn group(&self, index: usize) -> &Group {
        &self.groups[index]
    }

    /// An iterator over the groups, in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// The index of the group named `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// The common arity of the groups, taken from the first.
    pub fn arity(&self) -> usize {
        self.groups.first().map_or(0, |g| g.matrix.arity())
    }

    /// The union of every group's matrix except the group at `excluded`, deduplicated and sorted.
    pub fn union_excluding(&self, excluded: usize) -> Result<Matrix, ErrorKind> {
        let mut union = Matrix::new(self.arity());
        for (index, group) in self.groups.iter().enumerate() {
            if index != excluded {
                union.extend(&group.matrix)?;
            }
        }
        if union.is_empty() {
            return Err(ErrorKind::from(err::DataError::Empty));
        }
        union.sort_dedup();
        Ok(union)
    }
}
