/*!
Relevance search --- a minimal set of coordinates sufficient to separate two example sets.

# Overview

Given a positive matrix 𝐓 and a negative matrix 𝐅 of the same arity, [minsect] returns a mask of coordinates such that 𝐓 and 𝐅, restricted to the mask, remain *admissible* for the target closure:

- For the Horn family, admissible means no row of 𝐅 lies in the Horn closure of 𝐓.
  A row lies in the closure if and only if it equals the coordinate-wise minimum of the rows of 𝐓 which dominate it --- with no dominating row, it does not.
- For the bijunctive and CNF closures, admissible means 𝐓 and 𝐅 are disjoint as sets.

The search itself is a greedy scan: coordinates are visited in the configured order, and a coordinate is dropped whenever hiding its column from both matrices preserves admissibility, and otherwise restored.
The result is 1-minimal --- no single kept coordinate is droppable --- though not globally minimal, and different visit orders may settle on different masks of different sizes.

All probes go through [masked views](crate::structures::mask), so no row storage is copied during the search.

# Outcomes

- An inadmissible pair yields a fully-false mask, with the outcome marked so callers skip the pair.
- With no-section requested the fully-true mask is returned and the scan is skipped, though admissibility is still established.
- If the scan somehow empties the mask, the first visited coordinate on which the two sides differ is force-kept, so an admissible outcome always keeps at least one coordinate.
*/

use rand::Rng;
use rand_core::SeedableRng;

use crate::{
    config::{Closure, Config, Direction},
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    structures::{
        mask::{Mask, MatrixView, RowView},
        matrix::Matrix,
        value::Value,
    },
};

/// The outcome of relevance search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// The kept coordinates.
    pub mask: Mask,

    /// False if the pair is not separable in the target closure, in which case the mask keeps nothing.
    pub admissible: bool,
}

/// Searches for a minimal relevant coordinate set for `t` against `f`.
///
/// Requires `t` and `f` to be non-empty and of equal arity.
pub fn minsect(t: &Matrix, f: &Matrix, config: &Config) -> Section {
    let arity = t.arity();

    let full = Mask::all(arity);
    if !admissible(t, f, &full, config.closure) {
        log::info!(target: targets::MINSECT, "Example sets are not disjoint under {}", config.closure);
        return Section {
            mask: Mask::none(arity),
            admissible: false,
        };
    }

    if config.no_section {
        return Section {
            mask: full,
            admissible: true,
        };
    }

    let order = visit_order(t, config, arity);
    let mut mask = full;

    for &coordinate in &order {
        mask.set(coordinate, false);
        if admissible(t, f, &mask, config.closure) {
            log::trace!(target: targets::MINSECT, "Dropped coordinate {coordinate}");
        } else {
            mask.set(coordinate, true);
        }
    }

    if mask.kept_count() == 0 {
        force_keep(t, f, &order, &mut mask);
    }

    log::info!(target: targets::MINSECT, "Kept {} of {} coordinates", mask.kept_count(), arity);
    Section {
        mask,
        admissible: true,
    }
}

/// True if `t` and `f`, seen through `mask`, are separable in `closure`.
pub fn admissible(t: &Matrix, f: &Matrix, mask: &Mask, closure: Closure) -> bool {
    let t_view = MatrixView::from_mask(t, mask);
    let f_view = MatrixView::from_mask(f, mask);

    if closure.horn_family() {
        !f_view
            .row_views()
            .any(|f_row| in_horn_closure(&f_row, &t_view))
    } else {
        !f_view.row_views().any(|f_row| t_view.contains(&f_row))
    }
}

/// True if `row` lies in the Horn closure of the rows of `t`.
///
/// That is, if `row` equals the coordinate-wise minimum of the rows of `t` dominating it.
fn in_horn_closure(row: &RowView, t: &MatrixView) -> bool {
    let mut meet: Option<Vec<Value>> = None;

    for t_row in t.row_views() {
        if t_row.dominates(row) {
            match &mut meet {
                None => meet = Some(t_row.values().collect()),
                Some(meet) => {
                    for (slot, value) in meet.iter_mut().zip(t_row.values()) {
                        if value < *slot {
                            *slot = value;
                        }
                    }
                }
            }
        }
    }

    match meet {
        None => false,
        Some(meet) => meet.into_iter().eq(row.values()),
    }
}

/// The coordinate-visit order requested by the configuration.
fn visit_order(t: &Matrix, config: &Config, arity: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..arity).collect();

    match config.direction {
        Direction::Ascending => {}

        Direction::Descending => order.reverse(),

        Direction::Random => {
            let mut rng = MinimalPCG32::from_seed(config.seed.to_le_bytes());
            for index in (1..order.len()).rev() {
                let other = rng.random_range(0..=index);
                order.swap(index, other);
            }
        }

        Direction::LowScore => {
            order.sort_by_key(|&coordinate| (positive_count(t, coordinate), coordinate));
        }

        Direction::HighScore => {
            order.sort_by_key(|&coordinate| {
                (std::cmp::Reverse(positive_count(t, coordinate)), coordinate)
            });
        }

        Direction::Precedence => match &config.precedence {
            Some(weights) if weights.len() == arity => {
                order.sort_by_key(|&coordinate| {
                    (std::cmp::Reverse(weights[coordinate]), coordinate)
                });
            }
            _ => {
                log::warn!(target: targets::MINSECT, "Precedence direction without usable weights, visiting coordinates in ascending order");
            }
        },
    }

    order
}

/// The number of rows of `t` with a nonzero value at `coordinate`.
fn positive_count(t: &Matrix, coordinate: usize) -> usize {
    t.rows().filter(|row| row.value_at(coordinate) > 0).count()
}

/// Force-keeps the first visited coordinate on which the example sets can be told apart.
fn force_keep(t: &Matrix, f: &Matrix, order: &[usize], mask: &mut Mask) {
    for &coordinate in order {
        let t_values = t.column_values(coordinate);
        let f_values = f.column_values(coordinate);
        if t_values != f_values || (t_values.len() > 1 && f_values.len() > 1) {
            log::warn!(target: targets::MINSECT, "Scan kept nothing, force-keeping coordinate {coordinate}");
            mask.set(coordinate, true);
            return;
        }
    }
}
