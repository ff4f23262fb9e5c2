//! Task enumeration and partitioning.
//!
//! A task pairs one group, treated as positive, with a negative side: another group, or the union of every other group.
//! Tasks are enumerated once, in a fixed order, and are independent of one another --- nothing a task writes is read by any other.

use crate::{
    config::{Config, TaskMode},
    db::group::GroupDB,
    types::err::{self, ErrorKind},
};

/// The negative side of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Negative {
    /// A single group.
    Group(usize),

    /// The union of every group but the positive.
    Rest,
}

/// One unit of work: learn a formula for a positive group against a negative side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// The index of the task in enumeration order.
    pub index: usize,

    /// The positive group.
    pub positive: usize,

    /// The negative side.
    pub negative: Negative,

    /// A label for reports, built from the group names involved.
    pub label: String,
}

/// Enumerates the tasks of a run over `groups`, per the configured mode.
pub fn enumerate(config: &Config, groups: &GroupDB) -> Result<Vec<Task>, ErrorKind> {
    if groups.group_count() < 2 {
        return Err(ErrorKind::from(err::DataError::Empty));
    }

    let mut tasks: Vec<Task> = Vec::default();

    match config.mode {
        TaskMode::OneToOne => {
            for positive in 0..groups.group_count() {
                for negative in 0..groups.group_count() {
                    if positive != negative {
                        tasks.push(Task {
                            index: tasks.len(),
                            positive,
                            negative: Negative::Group(negative),
                            label: format!(
                                "{}_vs_{}",
                                groups.group(positive).name,
                                groups.group(negative).name
                            ),
                        });
                    }
                }
            }
        }

        TaskMode::OneToAll => {
            for positive in 0..groups.group_count() {
                tasks.push(Task {
                    index: tasks.len(),
                    positive,
                    negative: Negative::Rest,
                    label: groups.group(positive).name.clone(),
                });
            }
        }

        TaskMode::SelectedToAll => {
            if config.selected.is_empty() {
                return Err(ErrorKind::from(err::ConfigError::EmptySelection));
            }
            for name in &config.selected {
                match groups.index_of(name) {
                    Some(positive) => tasks.push(Task {
                        index: tasks.len(),
                        positive,
                        negative: Negative::Rest,
                        label: name.clone(),
                    }),
                    None => return Err(ErrorKind::from(err::ConfigError::InvalidValue("selected"))),
                }
            }
        }
    }

    Ok(tasks)
}

/// The task indices owned by `worker` of `workers`: every index congruent to the worker, modulo the worker count.
///
/// Across workers the assignments cover every index of `task_count` exactly once, whatever the worker count.
pub fn round_robin(task_count: usize, workers: usize, worker: usize) -> Vec<usize> {
    (worker..task_count).step_by(workers.max(1)).collect()
}
