/*!
The general CNF learners.

# Overview

With clauses unrestricted, the two strategies are direct:

- The *large* strategy emits, per negative row, the single clause falsified by exactly that row: every coordinate receives the literal excluding the row's value there, sized to the domain bounds.
  The clause is satisfied by every other row of the space, and in particular by every positive row.
- The *exact* strategy characterizes the (deduplicated, sorted) positive matrix itself.
  The rows not in the matrix fall into the lexicographic intervals between its consecutive rows, and each interval decomposes into boxes: agree with a row on a prefix, then pass it on the first free coordinate.
  One clause per box, bounding each coordinate beyond the *fork index* --- the first divergence from the lexicographic neighbour --- relative to the previous or next row, plus a gap clause on the fork coordinate itself when the neighbours leave room between them.
  The clauses then pass through [primality reduction](crate::procedures::horn::prime_reduce).

The models of the exact formula are exactly the rows of the positive matrix: every clause is falsified only on its box, boxes contain no positive row, and the boxes cover everything else.
*/

use crate::{
    db::headline::Headline,
    misc::log::targets::{self},
    procedures::horn::prime_reduce,
    structures::{clause::Clause, formula::Formula, literal::Literal, matrix::Matrix, row::Row},
};

/// Learns a CNF formula falsifying every row of `f`, one clause per distinct negative row.
pub fn learn_cnf_large(f: &Matrix, headline: &Headline) -> Formula {
    let width = f.arity();
    let mut formula = Formula::new(width);

    for negative in f.rows() {
        if formula.falsifies(negative) {
            continue;
        }

        let mut clause = Clause::fresh(width);
        for (coordinate, value) in negative.values().enumerate() {
            clause.set_literal(coordinate, Literal::excluding(value, headline.dmax(coordinate)));
        }

        if clause.is_empty() {
            // Every domain is a single value, so the one possible row cannot be excluded.
            log::warn!(target: targets::CNF, "Negative example {negative} spans the whole space");
            continue;
        }

        formula.push(clause);
    }

    formula
}

/// Learns a CNF formula whose rows of satisfaction are exactly the distinct rows of `t`.
pub fn learn_cnf_exact(t: &Matrix, headline: &Headline) -> Formula {
    let width = t.arity();

    let mut working = t.clone();
    working.sort_dedup();

    let mut formula = Formula::new(width);
    let count = working.row_count();

    for index in 0..count {
        let row = working.row(index);

        // Below the row, relative to the predecessor: boxes past the fork stay above the predecessor.
        let start = match index {
            0 => 0,
            _ => fork_index(working.row(index - 1), row) + 1,
        };
        for coordinate in start..width {
            if row.value_at(coordinate) > 0 {
                formula.push_unique(box_clause(row, coordinate, Literal::Geq(row.value_at(coordinate)), headline));
            }
        }

        // The gap on the fork coordinate itself, when the predecessor leaves one.
        if index > 0 {
            let previous = working.row(index - 1);
            let fork = fork_index(previous, row);
            if row.value_at(fork) > previous.value_at(fork) + 1 {
                formula.push_unique(box_clause(
                    previous,
                    fork,
                    Literal::Both {
                        leq: previous.value_at(fork),
                        geq: row.value_at(fork),
                    },
                    headline,
                ));
            }
        }

        // Above the row, relative to the successor.
        let start = match index + 1 == count {
            true => 0,
            false => fork_index(row, working.row(index + 1)) + 1,
        };
        for coordinate in start..width {
            if row.value_at(coordinate) < headline.dmax(coordinate) {
                formula.push_unique(box_clause(row, coordinate, Literal::Leq(row.value_at(coordinate)), headline));
            }
        }
    }

    prime_reduce(&mut formula, &working);
    formula
}

/// The clause falsified exactly on the box agreeing with `row` before `coordinate` and escaping `bound` at `coordinate`.
fn box_clause(row: &Row, coordinate: usize, bound: Literal, headline: &Headline) -> Clause {
    let mut clause = Clause::fresh(row.arity());
    for prefix in 0..coordinate {
        clause.set_literal(
            prefix,
            Literal::excluding(row.value_at(prefix), headline.dmax(prefix)),
        );
    }
    clause.set_literal(coordinate, bound);
    clause
}

/// The first coordinate at which lexicographic neighbours diverge.
fn fork_index(a: &Row, b: &Row) -> usize {
    let mut coordinate = 0;
    while coordinate < a.arity() && a.value_at(coordinate) == b.value_at(coordinate) {
        coordinate += 1;
    }
    coordinate
}
