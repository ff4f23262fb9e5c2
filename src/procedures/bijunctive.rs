/*!
The bijunctive learner --- geometric isolation of negative rows.

# Overview

A bijunctive formula is a conjunction of clauses with at most two literals.
A negative row can be excluded by such a clause in one of two ways:

- On a single coordinate, when the row's value there is absent from the *strip* of values the positive rows take.
  The excluded stretch of values becomes a unit clause.
- On a pair of coordinates, when the row's projection is *isolated* in an ordinal quadrant: no positive projection lies on the same side of both axes at once.
  A two-literal clause then points away from the negative point, with an endpoint past the domain dropping to an absent literal --- no bound on that side.

Isolation is decided against a [two-level point index](crate::generic::pair_tree) built per coordinate pair from the positive rows; the walk prunes subtrees outside the queried half-planes.

Found clauses accumulate in a [Bucket] keyed by the (coordinate, side, coordinate, side) pattern of the clause.
Insertion is deduplicating: a point whose quadrant is contained in a stored point's quadrant is dropped, a point whose quadrant contains stored quadrants evicts them, and unit stretches on the same coordinate merge whenever they overlap or touch.

If some negative row is isolated on no coordinate and no pair, no bijunctive formula separates the example sets, and the learner reports exactly that, as an error rather than a formula.
*/

use crate::{
    db::headline::Headline,
    generic::pair_tree::{PairTree, Side},
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::Formula,
        literal::Literal,
        matrix::Matrix,
        row::Row,
        value::Value,
    },
    types::err::{self},
};

/// The four ordinal quadrants.
const QUADRANTS: [(Side, Side); 4] = [
    (Side::AtMost, Side::AtMost),
    (Side::AtMost, Side::AtLeast),
    (Side::AtLeast, Side::AtMost),
    (Side::AtLeast, Side::AtLeast),
];

/// Learns a bijunctive formula satisfied by every row of `t` and falsifying every row of `f`.
///
/// An [err::LearnError::NoIsolation] error records that no such formula exists.
pub fn learn_bijunctive(
    t: &Matrix,
    f: &Matrix,
    headline: &Headline,
) -> Result<Formula, err::LearnError> {
    if t.is_empty() || f.is_empty() {
        return Err(err::LearnError::EmptyExamples);
    }

    let width = t.arity();

    let strips: Vec<Vec<Value>> = (0..width).map(|c| t.column_values(c)).collect();

    let indices = PairIndices::build(t);

    let mut bucket = Bucket::new(width);

    'negative_rows: for negative in f.rows() {
        if bucket.excludes(negative) {
            continue 'negative_rows;
        }

        // A unit clause from a strip miss, if some coordinate offers one.
        for (coordinate, strip) in strips.iter().enumerate() {
            let value = negative.value_at(coordinate);
            if strip.binary_search(&value).is_err() {
                let low = match strip.first() {
                    Some(least) if *least < value => value,
                    _ => 0,
                };
                let high = match strip.last() {
                    Some(greatest) if *greatest > value => value,
                    _ => headline.dmax(coordinate),
                };
                bucket.insert_unit(coordinate, low, high);
                continue 'negative_rows;
            }
        }

        // A two-literal clause from an isolated quadrant, if some pair offers one.
        for first in 0..width {
            for second in first + 1..width {
                let tree = indices.tree(first, second);
                let point = (negative.value_at(first), negative.value_at(second));

                for (first_side, second_side) in QUADRANTS {
                    if !tree.any_in_quadrant(first_side, point.0, second_side, point.1) {
                        bucket.insert_pair(
                            Pattern {
                                first,
                                first_side,
                                second,
                                second_side,
                            },
                            point,
                        );
                        continue 'negative_rows;
                    }
                }
            }
        }

        log::info!(target: targets::BIJUNCTIVE, "Negative example {negative} is not isolated, no bijunctive formula exists");
        return Err(err::LearnError::NoIsolation);
    }

    Ok(bucket.flatten(headline))
}

/// The point indices of every coordinate pair, built once from the positive rows.
struct PairIndices {
    width: usize,
    trees: Vec<PairTree>,
}

impl PairIndices {
    fn build(t: &Matrix) -> Self {
        let width = t.arity();
        let mut trees = Vec::with_capacity(width.saturating_sub(1) * width / 2);

        for first in 0..width {
            for second in first + 1..width {
                let points: Vec<(Value, Value)> = t
                    .rows()
                    .map(|row| (row.value_at(first), row.value_at(second)))
                    .collect();
                trees.push(PairTree::build(&points));
            }
        }

        PairIndices { width, trees }
    }

    fn tree(&self, first: usize, second: usize) -> &PairTree {
        // The linear index of (first, second), with first < second, in build order.
        let before = first * self.width - (first * (first + 1)) / 2;
        &self.trees[before + second - first - 1]
    }
}

/// The sign/coordinate pattern of a two-literal clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pattern {
    first: usize,
    first_side: Side,
    second: usize,
    second_side: Side,
}

/// A deduplicating store of isolating points and unit stretches.
pub struct Bucket {
    width: usize,
    units: Vec<Vec<(Value, Value)>>,
    pairs: Vec<(Pattern, Vec<(Value, Value)>)>,
}

impl Bucket {
    fn new(width: usize) -> Self {
        Bucket {
            width,
            units: vec![Vec::default(); width],
            pairs: Vec::default(),
        }
    }

    /// Records the exclusion of `low..=high` on `coordinate`, stretching into any stored stretch it overlaps or touches.
    fn insert_unit(&mut self, coordinate: usize, low: Value, high: Value) {
        let stretches = &mut self.units[coordinate];
        let mut low = low;
        let mut high = high;

        stretches.retain(|(stored_low, stored_high)| {
            let apart = *stored_low > high.saturating_add(1) || stored_high.saturating_add(1) < low;
            if !apart {
                low = low.min(*stored_low);
                high = high.max(*stored_high);
            }
            apart
        });

        stretches.push((low, high));
        stretches.sort_unstable();
    }

    /// Records an isolated point under `pattern`, unless a stored point already covers it, evicting any stored points it covers.
    fn insert_pair(&mut self, pattern: Pattern, point: (Value, Value)) {
        let position = match self.pairs.iter().position(|(stored, _)| *stored == pattern) {
            Some(position) => position,
            None => {
                self.pairs.push((pattern, Vec::default()));
                self.pairs.len() - 1
            }
        };
        let points = &mut self.pairs[position].1;

        let covers = |covering: (Value, Value), covered: (Value, Value)| {
            wider(pattern.first_side, covering.0, covered.0)
                && wider(pattern.second_side, covering.1, covered.1)
        };

        if points.iter().any(|stored| covers(*stored, point)) {
            return;
        }
        points.retain(|stored| !covers(point, *stored));
        points.push(point);
    }

    /// True if some recorded exclusion already falsifies `row`.
    fn excludes(&self, row: &Row) -> bool {
        for (coordinate, stretches) in self.units.iter().enumerate() {
            let value = row.value_at(coordinate);
            if stretches.iter().any(|(low, high)| *low <= value && value <= *high) {
                return true;
            }
        }

        self.pairs.iter().any(|(pattern, points)| {
            points.iter().any(|point| {
                pattern.first_side.admits(row.value_at(pattern.first), point.0)
                    && pattern.second_side.admits(row.value_at(pattern.second), point.1)
            })
        })
    }

    /// The bucket as a formula, one clause per stretch and per point.
    fn flatten(&self, headline: &Headline) -> Formula {
        let mut formula = Formula::new(self.width);

        for (coordinate, stretches) in self.units.iter().enumerate() {
            let dmax = headline.dmax(coordinate);
            for (low, high) in stretches {
                let literal = match (*low == 0, *high == dmax) {
                    (true, true) => continue,
                    (true, false) => Literal::Geq(high + 1),
                    (false, true) => Literal::Leq(low - 1),
                    (false, false) => Literal::Both {
                        leq: low - 1,
                        geq: high + 1,
                    },
                };
                let mut clause = Clause::fresh(self.width);
                clause.set_literal(coordinate, literal);
                formula.push_unique(clause);
            }
        }

        for (pattern, points) in &self.pairs {
            for point in points {
                let mut clause = Clause::fresh(self.width);
                clause.set_literal(
                    pattern.first,
                    away_literal(pattern.first_side, point.0, headline.dmax(pattern.first)),
                );
                clause.set_literal(
                    pattern.second,
                    away_literal(pattern.second_side, point.1, headline.dmax(pattern.second)),
                );
                if !clause.is_empty() {
                    formula.push_unique(clause);
                }
            }
        }

        formula.sort();
        formula
    }
}

/// True if `a` admits at least the values `b` admits on `side`.
fn wider(side: Side, a: Value, b: Value) -> bool {
    match side {
        Side::AtMost => a >= b,
        Side::AtLeast => a <= b,
    }
}

/// The literal pointing away from an excluded quadrant endpoint, absent when the domain ends first.
fn away_literal(side: Side, value: Value, dmax: Value) -> Literal {
    match side {
        // The quadrant admits values at or least `value`, so satisfaction lies strictly below.
        Side::AtLeast => match value {
            0 => Literal::None,
            _ => Literal::Leq(value - 1),
        },
        // The quadrant admits values at or most `value`, so satisfaction lies strictly above.
        Side::AtMost => match value {
            _ if value >= dmax => Literal::None,
            _ => Literal::Geq(value + 1),
        },
    }
}
