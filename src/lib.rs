//! A library for inferring compact logical formulas which separate labeled collections of multi-valued tuples.
//!
//! otter_learn reads groups of example rows over bounded integer domains and produces, for each group treated as positive, a formula true on that group and false on the others.
//! Formulas are drawn from a configurable fragment: Horn, dual-Horn, bijunctive (2-SAT), or general CNF.
//!
//! Some guiding principles of otter_learn are:
//! - Modularity: the run is factored into documented [procedures] over a handful of read-only databases.
//! - Documentation, of both implementation and the combinatorics behind it.
//! - Determinism: a configuration fixes a run, randomness included, so results are reproducible.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration, example rows are added directly or [read from text](context::Context::read_matrix), and a run drives each [task](context::tasks) --- a positive group paired with a negative side --- through the same pipeline:
//!
//! - [Relevance search](procedures::minsect) settles a minimal set of coordinates which keeps the pair separable.
//! - A [learner](procedures::ClosureStrategy) for the configured fragment builds a raw formula over the kept coordinates:
//!   [Horn](procedures::horn), [bijunctive](procedures::bijunctive), or [CNF](procedures::cnf).
//! - [Cooking](procedures::cooking) simplifies the formula, and an optional [set cover](procedures::set_cover) minimizes its clause set against the negative rows.
//!
//! Useful starting points, then, may be:
//! - The [context] for the dynamics of a run.
//! - The [structures] for the elements a run manipulates: rows, matrices, masks, literals, clauses, formulas.
//! - The [configuration](config) for the fragments, strategies, and orders supported.
//!
//! # Examples
//!
//! + Learn a bijunctive description of equality on a pair of boolean coordinates.
//!
//! ```rust
//! # use otter_learn::config::{Closure, Config, TaskMode};
//! # use otter_learn::context::Context;
//! # use otter_learn::structures::row::Row;
//! let mut config = Config::default();
//! config.closure = Closure::Bijunctive;
//! config.mode = TaskMode::OneToOne;
//!
//! let mut the_context = Context::from_config(config);
//!
//! the_context.add_row("same", Row::from(vec![0, 0])).unwrap();
//! the_context.add_row("same", Row::from(vec![1, 1])).unwrap();
//! the_context.add_row("diff", Row::from(vec![0, 1])).unwrap();
//! the_context.add_row("diff", Row::from(vec![1, 0])).unwrap();
//!
//! let reports = the_context.run().unwrap();
//!
//! let formula = reports[0].formula().unwrap();
//! assert_eq!(formula.clause_count(), 2);
//!
//! assert!(formula.satisfied_by(&Row::from(vec![0, 0])));
//! assert!(formula.satisfied_by(&Row::from(vec![1, 1])));
//! assert!(!formula.satisfied_by(&Row::from(vec![0, 1])));
//! assert!(!formula.satisfied_by(&Row::from(vec![1, 0])));
//! ```
//!
//! + Read a matrix from text and learn Horn formulas, one group against the rest.
//!
//! ```rust
//! # use otter_learn::config::Config;
//! # use otter_learn::context::Context;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut matrix = vec![];
//! let _ = matrix.write(b"
//! a 1 1 0
//! a 1 0 0
//! b 0 1 1
//! ");
//!
//! the_context.read_matrix(matrix.as_slice()).unwrap();
//! let reports = the_context.run().unwrap();
//! assert!(reports.iter().all(|report| report.formula().is_some()));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [relevance search](procedures::minsect) can be filtered with `RUST_LOG=minsect …` or,
//! - Warnings from the learners alone with `RUST_LOG=horn=warn,bijunctive=warn,cnf=warn …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod reports;
