/*!
Greedy set cover of the falsified-tuple universe.

# Overview

A learned formula may falsify each negative row several times over.
[set_cover] selects a subset of clauses which still falsifies every row of the universe, greedily: the clause falsifying the most still-uncovered rows is taken, the rows it falsifies are retired, and the process repeats until the universe is covered or no candidate falsifies anything further.
Ties go to the earlier clause in clause order.

The result never has more clauses than the input, and the selected clauses collectively falsify every row the input formula falsified.

Counting is the one region of a task worth parallelising: per-clause counts are independent, so the clause list is chunked across scoped threads and the counts reduced afterwards.
Everything else in a run parallelises across tasks instead.
*/

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, matrix::Matrix},
};

/// Clause lists shorter than this are counted on the calling thread.
const CHUNK_MINIMUM: usize = 64;

/// Greedily selects clauses of `formula` until every falsifiable row of `universe` is falsified by some selection.
pub fn set_cover(formula: &Formula, universe: &Matrix) -> Formula {
    let width = formula.width();

    let mut candidates: Vec<Clause> = formula.clauses().cloned().collect();
    candidates.sort_unstable();

    let mut uncovered: Vec<bool> = vec![true; universe.row_count()];
    let mut selected: Vec<Clause> = Vec::default();

    loop {
        let counts = coverage_counts(&candidates, universe, &uncovered);

        let best = counts
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(index, count)| (index, *count));

        match best {
            Some((index, count)) if count > 0 => {
                let clause = candidates.remove(index);
                for (row_index, still) in uncovered.iter_mut().enumerate() {
                    if *still && clause.falsified_by(universe.row(row_index)) {
                        *still = false;
                    }
                }
                selected.push(clause);
            }
            _ => break,
        }

        if uncovered.iter().all(|still| !still) {
            break;
        }
    }

    if uncovered.iter().any(|still| *still) {
        log::warn!(target: targets::COVER, "Cover leaves {} rows unfalsified", uncovered.iter().filter(|s| **s).count());
    }

    log::info!(target: targets::COVER, "Cover kept {} of {} clauses", selected.len(), formula.clause_count());

    let mut cover = Formula::new(width);
    for clause in selected {
        cover.push(clause);
    }
    cover.sort();
    cover
}

/// Per-clause counts of still-uncovered rows falsified, chunked across scoped threads when the clause list warrants it.
fn coverage_counts(candidates: &[Clause], universe: &Matrix, uncovered: &[bool]) -> Vec<usize> {
    let count_for = |clause: &Clause| {
        universe
            .rows()
            .zip(uncovered)
            .filter(|(row, still)| **still && clause.falsified_by(row))
            .count()
    };

    if candidates.len() < CHUNK_MINIMUM {
        return candidates.iter().map(count_for).collect();
    }

    let threads = std::thread::available_parallelism().map_or(1, |threads| threads.get());
    let chunk_length = candidates.len().div_ceil(threads);

    let count_for = &count_for;
    let mut counts = Vec::with_capacity(candidates.len());
    std::thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .chunks(chunk_length)
            .map(|chunk| {
                scope.spawn(move || chunk.iter().map(count_for).collect::<Vec<usize>>())
            })
            .collect();

        for handle in handles {
            // A counting thread has nothing to panic over.
            counts.append(&mut handle.join().expect("counting thread panicked"));
        }
    });
    counts
}
