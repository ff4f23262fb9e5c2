//! The procedures a task is made of.
//!
//! In dependency order: [relevance search](minsect) narrows the coordinates, a [learner](ClosureStrategy) builds a raw formula, [cooking](cooking) simplifies it, and [set cover](set_cover) optionally minimizes the clause set.
//!
//! The learner for a run is fixed once, as a [ClosureStrategy], rather than re-branched on configuration at every task.

pub mod bijunctive;
pub mod cnf;
pub mod cooking;
pub mod horn;
pub mod minsect;
pub mod set_cover;

use crate::{
    config::{Closure, Config, Strategy},
    db::headline::Headline,
    misc::log::targets::{self},
    structures::{formula::Formula, matrix::Matrix},
    types::err::{self},
};

/// The learner selected for a run: one closure, one strategy, resolved against the headline once.
///
/// Dual-Horn runs select a Horn variant; the polarity reflection around learning is the caller's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosureStrategy {
    HornExact,
    HornLarge,
    Bijunctive,
    CnfExact,
    CnfLarge,
}

impl ClosureStrategy {
    /// Resolves the configured closure and strategy against the headline.
    ///
    /// The exact strategy of the Horn family is boolean-only, and falls back to the large strategy --- once, here, with a warning --- on wider domains.
    pub fn select(config: &Config, headline: &Headline) -> Self {
        match (config.closure, config.strategy) {
            (Closure::Horn | Closure::DualHorn, Strategy::Exact) => {
                match headline.is_boolean() {
                    true => ClosureStrategy::HornExact,
                    false => {
                        log::warn!(target: targets::HORN, "The exact strategy requires boolean domains, falling back to large");
                        ClosureStrategy::HornLarge
                    }
                }
            }
            (Closure::Horn | Closure::DualHorn, Strategy::Large) => ClosureStrategy::HornLarge,
            (Closure::Bijunctive, _) => ClosureStrategy::Bijunctive,
            (Closure::CNF, Strategy::Exact) => ClosureStrategy::CnfExact,
            (Closure::CNF, Strategy::Large) => ClosureStrategy::CnfLarge,
        }
    }

    /// Runs the learner on a restricted pair of example matrices.
    ///
    /// The exact variants consume `t` alone; the large variants eliminate the rows of `f`.
    pub fn learn(
        &self,
        t: &Matrix,
        f: &Matrix,
        headline: &Headline,
    ) -> Result<Formula, err::LearnError> {
        match self {
            ClosureStrategy::HornExact => horn::learn_horn_exact(t, headline),
            ClosureStrategy::HornLarge => Ok(horn::learn_horn_large(t, f, headline)),
            ClosureStrategy::Bijunctive => bijunctive::learn_bijunctive(t, f, headline),
            ClosureStrategy::CnfExact => Ok(cnf::learn_cnf_exact(t, headline)),
            ClosureStrategy::CnfLarge => Ok(cnf::learn_cnf_large(f, headline)),
        }
    }
}
