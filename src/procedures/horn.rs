/*!
The Horn learners.

# Overview

Two strategies produce Horn formulas --- conjunctions of clauses with at most one lower-bound literal.

The *exact* strategy consumes the positive matrix only, and characterizes its Horn closure: the least set of rows containing the matrix and closed under coordinate-wise minimum.
The construction is restricted to boolean domains.
The closure is materialized, sorted lexicographically, and clauses are emitted from ones-prefixes of its rows: for each row, each coordinate past the divergence from the lexicographic predecessor contributes a candidate clause whose body is the row's ones before that coordinate, with at most one later one of the row added when the plain prefix does not suffice.
A candidate survives only if every closure row satisfies it, and the survivors then pass through [primality reduction](prime_reduce).

Materializing the closure is worst-case expensive, and deliberately so: exactness is the point of the strategy, and the large strategy exists for inputs where the closure is out of reach.

The *large* strategy consumes both matrices, eliminating negative rows one at a time: each not-yet-falsified negative row contributes the all-negative clause over its nonzero coordinates, and, when the positive matrix rejects that clause, a single coordinate is sought --- first fit --- whose lower-bound literal restores satisfaction on the whole positive side.
A row no single flip can eliminate is reported and skipped; the formula stays sound for the positive side either way.

Dual-Horn learning is a property of the *caller*: reflect both matrices through their domain bounds, learn Horn, and reflect the formula back.

# Bookkeeping

Predecessor divergence is kept per row *index* into the sorted closure, so rows are never hashed or used as map keys.
*/

use crate::{
    db::headline::Headline,
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::Formula,
        literal::Literal,
        matrix::Matrix,
        row::Row,
    },
    types::err::{self},
};

/// The Horn closure of `t`: the least superset of its rows closed under coordinate-wise minimum.
pub fn horn_closure(t: &Matrix) -> Matrix {
    let mut closed: Vec<Row> = t.rows().cloned().collect();
    closed.sort_unstable();
    closed.dedup();

    // Meets of the frontier against everything settled so far, to a fixpoint.
    let mut frontier: Vec<Row> = closed.clone();

    while !frontier.is_empty() {
        let mut fresh: Vec<Row> = Vec::default();

        for new in &frontier {
            for old in &closed {
                let meet = new.meet(old);
                if !closed.contains(&meet) && !fresh.contains(&meet) {
                    fresh.push(meet);
                }
            }
        }

        for row in &fresh {
            closed.push(row.clone());
        }
        closed.sort_unstable();
        closed.dedup();

        frontier = fresh;
    }

    // Arity is preserved, so rebuilding cannot fail.
    Matrix::from_rows(t.arity(), closed).expect("closure preserves arity")
}

/// Learns a Horn formula whose rows of satisfaction are exactly the Horn closure of `t`.
///
/// Boolean domains only; a wider domain is reported as an error for the caller to fall back on.
pub fn learn_horn_exact(t: &Matrix, headline: &Headline) -> Result<Formula, err::LearnError> {
    if t.is_empty() {
        return Err(err::LearnError::EmptyExamples);
    }
    if !headline.is_boolean() {
        return Err(err::LearnError::ExactRequiresBoolean);
    }

    let width = t.arity();
    let closure = horn_closure(t);
    log::info!(target: targets::HORN, "Closure of {} rows has {} rows", t.row_count(), closure.row_count());

    let mut formula = Formula::new(width);

    // Coordinates constant across the closure become units.
    for coordinate in 0..width {
        let values = closure.column_values(coordinate);
        if values == [1] {
            let mut unit = Clause::fresh(width);
            unit.set_literal(coordinate, Literal::Geq(1));
            formula.push_unique(unit);
        } else if values == [0] {
            let mut unit = Clause::fresh(width);
            unit.set_literal(coordinate, Literal::Leq(0));
            formula.push_unique(unit);
        }
    }

    for index in 0..closure.row_count() {
        let row = closure.row(index);

        // Coordinates before the divergence from the predecessor repeat the predecessor's candidates.
        let start = match index {
            0 => 0,
            _ => divergence(closure.row(index - 1), row),
        };

        for coordinate in start..width {
            let body: Vec<usize> = (0..coordinate).filter(|c| row.value_at(*c) == 1).collect();

            let mut candidate = Clause::fresh(width);
            for c in &body {
                candidate.set_literal(*c, Literal::Leq(0));
            }
            match row.value_at(coordinate) {
                1 => candidate.set_literal(coordinate, Literal::Geq(1)),
                _ => candidate.set_literal(coordinate, Literal::Leq(0)),
            }

            if holds_on(&candidate, &closure) {
                formula.push_unique(candidate);
                continue;
            }

            // A second body literal, from the earliest later one of the row which restores satisfaction.
            for extra in coordinate + 1..width {
                if row.value_at(extra) == 1 {
                    let mut extended = candidate.clone();
                    extended.set_literal(extra, Literal::Leq(0));
                    if holds_on(&extended, &closure) {
                        formula.push_unique(extended);
                        break;
                    }
                }
            }
        }
    }

    prime_reduce(&mut formula, &closure);
    Ok(formula)
}

/// True if every row of `matrix` satisfies `candidate`.
fn holds_on(candidate: &Clause, matrix: &Matrix) -> bool {
    matrix.rows().all(|row| candidate.satisfied_by(row))
}

/// The first coordinate at which `a` and `b` differ, aka. the length of their greatest common prefix.
fn divergence(a: &Row, b: &Row) -> usize {
    let mut coordinate = 0;
    while coordinate < a.arity() && a.value_at(coordinate) == b.value_at(coordinate) {
        coordinate += 1;
    }
    coordinate
}

/// Learns a Horn formula satisfied by every row of `t` and falsifying rows of `f`, one negative row at a time.
pub fn learn_horn_large(t: &Matrix, f: &Matrix, headline: &Headline) -> Formula {
    let width = t.arity();
    let mut formula = Formula::new(width);

    for negative in f.rows() {
        if formula.falsifies(negative) {
            continue;
        }

        // The all-negative clause over the row's nonzero coordinates.
        let mut clause = Clause::fresh(width);
        for (coordinate, value) in negative.values().enumerate() {
            if value > 0 {
                clause.set_literal(coordinate, Literal::Leq(value - 1));
            }
        }

        if !clause.is_empty() && holds_on(&clause, t) {
            formula.push_unique(clause);
            continue;
        }

        // One coordinate, first fit, flipped to a lower-bound literal.
        let mut resolved = false;
        for coordinate in 0..width {
            let value = negative.value_at(coordinate);
            if value >= headline.dmax(coordinate) {
                continue;
            }

            let mut extended = clause.clone();
            let flipped = extended.literal(coordinate).or(Literal::Geq(value + 1));
            extended.set_literal(coordinate, flipped);

            if holds_on(&extended, t) {
                formula.push_unique(extended);
                resolved = true;
                break;
            }
        }

        if !resolved {
            log::warn!(target: targets::HORN, "No single flip eliminates negative example {negative}");
        }
    }

    formula
}

/// Primality reduction: relaxes each clause, literal by literal, so long as every row of `matrix` still satisfies the clause.
///
/// Relaxation tries to drop a literal outright, and failing that to drop one half of a both literal.
/// Clauses reduced to nothing are restored, as the empty clause is satisfied by no row.
pub fn prime_reduce(formula: &mut Formula, matrix: &Matrix) {
    let clauses: Vec<Clause> = formula
        .clauses()
        .cloned()
        .map(|mut clause| {
            for coordinate in 0..clause.width() {
                let literal = clause.literal(coordinate);
                if literal.is_none() {
                    continue;
                }

                let mut relaxations = vec![Literal::None];
                if let Literal::Both { leq, geq } = literal {
                    relaxations.push(Literal::Leq(leq));
                    relaxations.push(Literal::Geq(geq));
                }

                for relaxed in relaxations {
                    let mut attempt = clause.clone();
                    attempt.set_literal(coordinate, relaxed);
                    if !attempt.is_empty() && holds_on(&attempt, matrix) {
                        clause = attempt;
                        break;
                    }
                }
            }
            clause
        })
        .collect();

    let mut reduced = Formula::new(formula.width());
    for clause in clauses {
        reduced.push_unique(clause);
    }
    *formula = reduced;
}
