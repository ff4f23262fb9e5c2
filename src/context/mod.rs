/*!
The context --- to which example groups are added and within which learning takes place, etc.

A context owns the configuration, the headline, and the group database, all fixed before learning.
Each [task](tasks::Task) of a run drives the same pipeline:

1. For the dual-Horn closure, both sides are reflected through the domain bounds, so the Horn machinery applies throughout; the formula is reflected back at the end.
2. [Relevance search](crate::procedures::minsect) settles the kept coordinates --- or discovers the pair is not separable, in which case the task reports exactly that and stops.
   Whether a pair was separable is per-task state, carried in the task's report, so no flag needs resetting between tasks.
3. Both sides are restricted to the kept coordinates.
4. The [learner](crate::procedures::ClosureStrategy) of the run builds a raw formula.
5. The formula is [cooked](crate::procedures::cooking), and optionally [covered](crate::procedures::set_cover) against the negative rows.

Tasks are independent, and the groups and headline are read-only throughout, so a run may be partitioned across [workers](workers) without locks.

# Example

```rust
# use otter_learn::config::{Config, Closure};
# use otter_learn::context::Context;
# use otter_learn::structures::row::Row;
let mut config = Config::default();
config.closure = Closure::CNF;

let mut the_context = Context::from_config(config);
the_context.add_row("a", Row::from(vec![0, 0])).unwrap();
the_context.add_row("a", Row::from(vec![1, 1])).unwrap();
the_context.add_row("b", Row::from(vec![0, 1])).unwrap();

let reports = the_context.run().unwrap();

assert_eq!(reports.len(), 2);
assert!(reports[0].formula().is_some());
```
*/

pub mod tasks;
pub mod workers;

use crate::{
    config::{Closure, Config},
    db::{group::GroupDB, headline::Headline},
    misc::log::targets::{self},
    procedures::{
        cooking::cook,
        minsect::minsect,
        set_cover::set_cover,
        ClosureStrategy,
    },
    reports::{TaskOutcome, TaskReport},
    structures::{formula::Formula, matrix::Matrix, row::Row},
    types::err::{self, ErrorKind},
};

use tasks::{Negative, Task};

/// The context of a run: configuration, headline, and groups.
pub struct Context {
    /// The configuration of the run.
    pub config: Config,

    /// Per-coordinate metadata, inferred from the examples unless supplied.
    pub headline: Option<Headline>,

    /// The example groups.
    pub groups: GroupDB,
}

impl Context {
    /// A context with the given configuration and no examples.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            headline: None,
            groups: GroupDB::default(),
        }
    }

    /// Fixes the headline of the run.
    ///
    /// Without one, a headline is inferred from the examples when the run begins.
    pub fn set_headline(&mut self, headline: Headline) {
        self.headline = Some(headline);
    }

    /// Adds an example row to the group named `name`.
    pub fn add_row(&mut self, name: &str, row: Row) -> Result<(), ErrorKind> {
        if !self.groups.is_empty() && row.arity() != self.groups.arity() {
            return Err(ErrorKind::from(err::DataError::ArityMismatch {
                line: 0,
                expected: self.groups.arity(),
                found: row.arity(),
            }));
        }

        if let Some(headline) = &self.headline {
            for (coordinate, value) in row.values().enumerate() {
                if value > headline.dmax(coordinate) {
                    return Err(ErrorKind::from(err::DataError::DomainExceeded {
                        coordinate,
                        value,
                    }));
                }
            }
        }

        self.groups.insert_row(name, row)
    }

    /// The headline of the run, inferred now if none was supplied.
    pub fn headline(&self) -> Headline {
        match &self.headline {
            Some(headline) => headline.clone(),
            None => Headline::infer(
                self.groups.arity(),
                self.groups.groups().flat_map(|group| group.matrix.rows()),
            ),
        }
    }

    /// The tasks of the run, in enumeration order.
    pub fn tasks(&self) -> Result<Vec<Task>, ErrorKind> {
        tasks::enumerate(&self.config, &self.groups)
    }

    /// Runs every task on the calling thread, in enumeration order.
    pub fn run(&self) -> Result<Vec<TaskReport>, ErrorKind> {
        let headline = self.headline();
        let learner = ClosureStrategy::select(&self.config, &headline);

        self.tasks()?
            .iter()
            .map(|task| self.run_task_with(task, learner, &headline))
            .collect()
    }

    /// Runs every task, partitioned round-robin across the configured number of worker threads.
    pub fn run_parallel(&self) -> Result<Vec<TaskReport>, ErrorKind> {
        workers::run_partitioned(self, self.config.workers)
    }

    /// Runs a single task with the learner of the run.
    pub fn run_task(&self, task: &Task) -> Result<TaskReport, ErrorKind> {
        let headline = self.headline();
        let learner = ClosureStrategy::select(&self.config, &headline);
        self.run_task_with(task, learner, &headline)
    }

    pub(crate) fn run_task_with(
        &self,
        task: &Task,
        learner: ClosureStrategy,
        headline: &Headline,
    ) -> Result<TaskReport, ErrorKind> {
        let arity = self.groups.arity();
        log::info!(target: targets::TASKS, "Task {}: {}", task.index, task.label);

        let mut t = self.groups.group(task.positive).matrix.clone();
        let mut f = match task.negative {
            Negative::Group(negative) => self.groups.group(negative).matrix.clone(),
            Negative::Rest => self.groups.union_excluding(task.positive)?,
        };

        let dmaxs = headline.dmax_vec();
        let dual = self.config.closure == Closure::DualHorn;
        if dual {
            t = t.swap_polarity(&dmaxs);
            f = f.swap_polarity(&dmaxs);
        }

        let section = minsect(&t, &f, &self.config);
        if !section.admissible {
            return Ok(TaskReport {
                index: task.index,
                label: task.label.clone(),
                arity,
                kept: Vec::default(),
                outcome: TaskOutcome::NotDisjoint,
            });
        }

        let kept = section.mask.kept_columns();
        let t_restricted = t.restrict(&section.mask);
        let f_restricted = f.restrict(&section.mask);
        let headline_restricted = headline.restrict(&section.mask);

        let raw = match learner.learn(&t_restricted, &f_restricted, &headline_restricted) {
            Ok(formula) => formula,
            Err(err::LearnError::NoIsolation) => {
                return Ok(TaskReport {
                    index: task.index,
                    label: task.label.clone(),
                    arity,
                    kept,
                    outcome: TaskOutcome::NoFormula,
                });
            }
            Err(other) => return Err(ErrorKind::from(other)),
        };

        let mut formula = cook(raw, self.config.cooking, &headline_restricted);

        if self.config.set_cover && !f_restricted.is_empty() {
            formula = set_cover(&formula, &f_restricted);
        }

        if self.config.self_check {
            self.self_check(task, &formula, &t_restricted, &f_restricted);
        }

        if dual {
            formula = formula.swap_polarity(&headline_restricted.dmax_vec());
        }

        Ok(TaskReport {
            index: task.index,
            label: task.label.clone(),
            arity,
            kept,
            outcome: TaskOutcome::Learned(formula),
        })
    }

    /// Checks a learned formula against the restricted examples of its task, noting any violation.
    fn self_check(&self, task: &Task, formula: &Formula, t: &Matrix, f: &Matrix) {
        for row in t.rows() {
            if !formula.satisfied_by(row) {
                log::warn!(target: targets::TASKS, "Task {}: positive example {row} fails the learned formula", task.index);
            }
        }
        for row in f.rows() {
            if formula.satisfied_by(row) {
                log::warn!(target: targets::TASKS, "Task {}: negative example {row} satisfies the learned formula", task.index);
            }
        }
    }
}
