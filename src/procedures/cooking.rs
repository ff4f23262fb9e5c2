/*!
Cooking --- the staged simplification of a learned formula.

# Overview

Four levels, each including those before it:

- *Raw* sorts the clauses by clause order, and nothing more.
- *Bleu* adds [unit resolution](unit_resolution): single-literal clauses are merged into their tightest per-coordinate bounds, and those bounds repeatedly tighten, erase, or delete literals and clauses elsewhere.
  Contradictory bounds on one coordinate collapse the formula to a single empty clause.
- *Medium* adds [subsumption](subsume): with clauses sorted by literal count, a clause whose every literal is at least as tight as the corresponding literal of another licenses dropping the other.
- *Well-done* adds [redundancy elimination](eliminate_redundant): each clause, longest first, is tentatively removed, its negation asserted as unit bounds, and unit resolution asked for a contradiction; a contradiction proves the clause redundant, and otherwise it is restored.

Cooking past well-done is a fixpoint: re-cooking a well-done formula returns it unchanged.

Clauses are only ever deleted on proof of implication, so every level preserves the set of rows satisfying the formula.
*/

use crate::{
    config::Cooking,
    db::headline::Headline,
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::Formula,
        literal::Literal,
        value::Value,
    },
};

/// Cooks `formula` to the requested level.
pub fn cook(formula: Formula, level: Cooking, headline: &Headline) -> Formula {
    let mut cooked = formula;

    if level >= Cooking::Bleu {
        cooked = unit_resolution(cooked, headline);
    }

    if level >= Cooking::Medium {
        cooked = subsume(cooked);
    }

    if level >= Cooking::WellDone {
        cooked = eliminate_redundant(cooked, headline);
    }

    cooked.sort();
    cooked
}

/// The tightest per-coordinate bounds asserted by the unit clauses of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
struct UnitBounds {
    lower: Vec<Option<Value>>,
    upper: Vec<Option<Value>>,
}

impl UnitBounds {
    fn fresh(width: usize) -> Self {
        UnitBounds {
            lower: vec![None; width],
            upper: vec![None; width],
        }
    }

    /// Absorbs a unit literal, keeping the tighter of any same-sign bounds.
    ///
    /// A unit *both* literal asserts nothing by itself, and is left to live as a clause.
    fn absorb(&mut self, coordinate: usize, literal: Literal) {
        match literal {
            Literal::Leq(n) => {
                self.upper[coordinate] = Some(match self.upper[coordinate] {
                    None => n,
                    Some(stored) => stored.min(n),
                });
            }
            Literal::Geq(p) => {
                self.lower[coordinate] = Some(match self.lower[coordinate] {
                    None => p,
                    Some(stored) => stored.max(p),
                });
            }
            _ => {}
        }
    }

    /// True if some coordinate's bounds exclude every value.
    fn contradictory(&self) -> bool {
        self.lower
            .iter()
            .zip(&self.upper)
            .any(|(lower, upper)| matches!((lower, upper), (Some(p), Some(n)) if p > n))
    }

    /// The values of `coordinate` admitted by the bounds, within the domain `0..=dmax`.
    fn admitted(&self, coordinate: usize, dmax: Value) -> (Value, Value) {
        (
            self.lower[coordinate].unwrap_or(0),
            self.upper[coordinate].unwrap_or(dmax),
        )
    }

    /// The bounds as unit clauses, skipping bounds the domain makes trivial.
    fn clauses(&self, headline: &Headline) -> Vec<Clause> {
        let width = self.lower.len();
        let mut units = Vec::default();

        for coordinate in 0..width {
            if let Some(p) = self.lower[coordinate] {
                if p > 0 {
                    let mut unit = Clause::fresh(width);
                    unit.set_literal(coordinate, Literal::Geq(p));
                    units.push(unit);
                }
            }
            if let Some(n) = self.upper[coordinate] {
                if n < headline.dmax(coordinate) {
                    let mut unit = Clause::fresh(width);
                    unit.set_literal(coordinate, Literal::Leq(n));
                    units.push(unit);
                }
            }
        }

        units
    }
}

/// What became of a clause examined under unit bounds.
enum Examined {
    /// The clause is implied by the bounds.
    Tautology,

    /// The clause, with impossible literals erased.
    Kept(Clause),

    /// Every literal was erased.
    Contradiction,
}

/// Examines `clause` under `bounds`: literals implied by the bounds make the clause a tautology, and literals the bounds make unsatisfiable are erased.
fn examine(clause: &Clause, bounds: &UnitBounds, headline: &Headline) -> Examined {
    let mut kept = Clause::fresh(clause.width());

    for (coordinate, literal) in clause.present_literals() {
        let (low, high) = bounds.admitted(coordinate, headline.dmax(coordinate));
        let (leq, geq) = literal.bounds();

        // Each half is kept, dropped as unsatisfiable, or found to cover every admitted value.
        let leq = match leq {
            Some(n) if n >= high => return Examined::Tautology,
            Some(n) if n < low => None,
            kept_half => kept_half,
        };

        let geq = match geq {
            Some(p) if p <= low => return Examined::Tautology,
            Some(p) if p > high => None,
            kept_half => kept_half,
        };

        kept.set_literal(coordinate, Literal::from_bounds(leq, geq));
    }

    match kept.is_empty() {
        true => Examined::Contradiction,
        false => Examined::Kept(kept),
    }
}

/// Unit resolution, to a fixpoint.
///
/// Unit clauses are merged into tightest bounds, the bounds examine every other clause, and any erasure is given another round, as deletions may expose fresh units.
pub fn unit_resolution(formula: Formula, headline: &Headline) -> Formula {
    let width = formula.width();
    let mut clauses: Vec<Clause> = formula.into_clauses();

    loop {
        let mut bounds = UnitBounds::fresh(width);

        for clause in &clauses {
            if clause.is_empty() {
                return Formula::unsatisfiable(width);
            }
            if let Some(coordinate) = unit_coordinate(clause) {
                bounds.absorb(coordinate, clause.literal(coordinate));
            }
        }

        if bounds.contradictory() {
            log::info!(target: targets::COOKING, "Contradictory unit bounds, formula is unsatisfiable");
            return Formula::unsatisfiable(width);
        }

        let mut next: Vec<Clause> = bounds.clauses(headline);
        let mut changed = false;

        for clause in &clauses {
            if unit_coordinate(clause).is_some() {
                // Represented by the merged bounds; a dropped trivial unit is a change in its own right.
                if !next.contains(clause) {
                    changed = true;
                }
                continue;
            }

            match examine(clause, &bounds, headline) {
                Examined::Tautology => changed = true,
                Examined::Contradiction => {
                    log::info!(target: targets::COOKING, "A clause lost every literal, formula is unsatisfiable");
                    return Formula::unsatisfiable(width);
                }
                Examined::Kept(kept) => {
                    if &kept != clause {
                        changed = true;
                    }
                    if !next.contains(&kept) {
                        next.push(kept);
                    } else {
                        changed = true;
                    }
                }
            }
        }

        clauses = next;

        if !changed {
            let mut resolved = Formula::new(width);
            for clause in clauses {
                resolved.push(clause);
            }
            resolved.sort();
            return resolved;
        }
    }
}

/// The coordinate of the sole literal of a unit clause whose literal is a plain bound, if so.
fn unit_coordinate(clause: &Clause) -> Option<usize> {
    match clause.is_unit() {
        true => {
            let coordinate = clause.first_index()?;
            match clause.literal(coordinate) {
                Literal::Leq(_) | Literal::Geq(_) => Some(coordinate),
                _ => None,
            }
        }
        false => None,
    }
}

/// Subsumption: drops any clause another clause subsumes.
///
/// Clauses are visited sorted by literal count, so a subsuming clause is always met before the clauses it subsumes.
pub fn subsume(formula: Formula) -> Formula {
    let width = formula.width();
    let mut clauses: Vec<Clause> = formula.into_clauses();
    clauses.sort_unstable();

    let mut kept: Vec<Clause> = Vec::with_capacity(clauses.len());

    for clause in clauses {
        if kept.iter().any(|shorter| shorter.subsumes(&clause)) {
            log::trace!(target: targets::COOKING, "Subsumed: {clause}");
            continue;
        }
        kept.push(clause);
    }

    let mut subsumed = Formula::new(width);
    for clause in kept {
        subsumed.push(clause);
    }
    subsumed
}

/// Redundancy elimination: removes each clause the rest of the formula can be shown to imply.
///
/// The test negates the clause into unit bounds and asks [unit_resolution] for a contradiction, so removal is always justified and the satisfied-row set never changes.
pub fn eliminate_redundant(formula: Formula, headline: &Headline) -> Formula {
    let width = formula.width();
    let mut clauses: Vec<Clause> = formula.into_clauses();

    // Longest first.
    clauses.sort_unstable_by(|a, b| b.cmp(a));

    let mut index = 0;
    while index < clauses.len() {
        let clause = clauses[index].clone();

        let mut trial = Formula::new(width);
        for (other_index, other) in clauses.iter().enumerate() {
            if other_index != index {
                trial.push(other.clone());
            }
        }
        for unit in negation_units(&clause, headline) {
            trial.push(unit);
        }

        let resolved = unit_resolution(trial, headline);
        let contradicted = resolved.clause_count() == 1 && resolved.clause(0).is_empty();

        if contradicted {
            log::trace!(target: targets::COOKING, "Redundant: {clause}");
            clauses.remove(index);
        } else {
            index += 1;
        }
    }

    let mut reduced = Formula::new(width);
    for clause in clauses {
        reduced.push(clause);
    }
    reduced
}

/// The negation of a clause, as unit clauses: one per bound, with both literals contributing both halves.
fn negation_units(clause: &Clause, headline: &Headline) -> Vec<Clause> {
    let width = clause.width();
    let mut units = Vec::default();

    for (coordinate, literal) in clause.present_literals() {
        let (leq, geq) = literal.bounds();

        if let Some(n) = leq {
            if n < headline.dmax(coordinate) {
                let mut unit = Clause::fresh(width);
                unit.set_literal(coordinate, Literal::Geq(n + 1));
                units.push(unit);
            }
        }

        if let Some(p) = geq {
            if p > 0 {
                let mut unit = Clause::fresh(width);
                unit.set_literal(coordinate, Literal::Leq(p - 1));
                units.push(unit);
            }
        }
    }

    units
}
