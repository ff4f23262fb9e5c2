use otter_learn::{
    config::Cooking,
    db::headline::Headline,
    procedures::cooking::{cook, eliminate_redundant, subsume, unit_resolution},
    structures::{clause::Clause, formula::Formula, literal::Literal, row::Row},
};

fn unit(width: usize, coordinate: usize, literal: Literal) -> Clause {
    let mut clause = Clause::fresh(width);
    clause.set_literal(coordinate, literal);
    clause
}

mod units {
    use super::*;

    #[test]
    fn same_sign_units_merge_to_the_tightest_bound() {
        let headline = Headline::infer(1, [Row::from(vec![3])].iter());

        let mut formula = Formula::new(1);
        formula.push(unit(1, 0, Literal::Geq(1)));
        formula.push(unit(1, 0, Literal::Geq(2)));

        let resolved = unit_resolution(formula, &headline);

        assert_eq!(resolved.clause_count(), 1);
        assert_eq!(resolved.clause(0).literal(0), Literal::Geq(2));
    }

    #[test]
    fn contradictory_units_collapse_to_the_empty_clause() {
        let headline = Headline::boolean(2);

        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Geq(1)));
        formula.push(unit(2, 0, Literal::Leq(0)));

        let resolved = unit_resolution(formula, &headline);

        assert_eq!(resolved.clause_count(), 1);
        assert!(resolved.clause(0).is_empty());
    }

    #[test]
    fn units_delete_clauses_they_make_tautological() {
        let headline = Headline::infer(2, [Row::from(vec![2, 2])].iter());

        let mut tautological = Clause::fresh(2);
        tautological.set_literal(0, Literal::Leq(1));
        tautological.set_literal(1, Literal::Geq(2));

        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Leq(1)));
        formula.push(tautological);

        let resolved = unit_resolution(formula, &headline);

        assert_eq!(resolved.clause_count(), 1);
        assert_eq!(resolved.clause(0).literal(0), Literal::Leq(1));
    }

    #[test]
    fn units_erase_impossible_literals() {
        let headline = Headline::infer(2, [Row::from(vec![2, 2])].iter());

        let mut weakened = Clause::fresh(2);
        weakened.set_literal(0, Literal::Geq(2));
        weakened.set_literal(1, Literal::Geq(1));

        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Leq(1)));
        formula.push(weakened);

        let resolved = unit_resolution(formula, &headline);

        // The erased literal leaves a fresh unit on the second coordinate.
        assert_eq!(resolved.clause_count(), 2);
        assert!(resolved.clauses().any(|c| c.literal(1) == Literal::Geq(1) && c.is_unit()));
    }
}

mod subsumption {
    use super::*;

    #[test]
    fn subsumed_clauses_are_dropped() {
        let mut longer = Clause::fresh(2);
        longer.set_literal(0, Literal::Geq(1));
        longer.set_literal(1, Literal::Leq(0));

        let mut formula = Formula::new(2);
        formula.push(longer);
        formula.push(unit(2, 0, Literal::Geq(1)));

        let subsumed = subsume(formula);

        assert_eq!(subsumed.clause_count(), 1);
        assert!(subsumed.clause(0).is_unit());
    }

    #[test]
    fn subsumption_never_grows_a_formula() {
        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Geq(1)));
        formula.push(unit(2, 1, Literal::Leq(0)));

        let before = formula.clause_count();
        assert!(subsume(formula).clause_count() <= before);
    }
}

mod redundancy {
    use super::*;

    #[test]
    fn implied_clauses_are_removed() {
        let headline = Headline::boolean(2);

        let mut implied = Clause::fresh(2);
        implied.set_literal(0, Literal::Geq(1));
        implied.set_literal(1, Literal::Geq(1));

        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Geq(1)));
        formula.push(implied);

        let reduced = eliminate_redundant(formula, &headline);

        assert_eq!(reduced.clause_count(), 1);
        assert_eq!(reduced.clause(0).literal(0), Literal::Geq(1));
    }

    #[test]
    fn elimination_preserves_the_satisfied_rows() {
        let headline = Headline::boolean(2);

        let mut implied = Clause::fresh(2);
        implied.set_literal(0, Literal::Geq(1));
        implied.set_literal(1, Literal::Geq(1));

        let mut formula = Formula::new(2);
        formula.push(unit(2, 0, Literal::Geq(1)));
        formula.push(implied);

        let reduced = eliminate_redundant(formula.clone(), &headline);

        for a in 0..=1 {
            for b in 0..=1 {
                let row = Row::from(vec![a, b]);
                assert_eq!(formula.satisfied_by(&row), reduced.satisfied_by(&row));
            }
        }
    }
}

mod levels {
    use super::*;

    fn messy_formula() -> (Formula, Headline) {
        let headline = Headline::infer(3, [Row::from(vec![2, 1, 1])].iter());

        let mut subsumed = Clause::fresh(3);
        subsumed.set_literal(0, Literal::Geq(1));
        subsumed.set_literal(1, Literal::Leq(0));

        let mut implied = Clause::fresh(3);
        implied.set_literal(0, Literal::Geq(1));
        implied.set_literal(2, Literal::Geq(1));

        let mut formula = Formula::new(3);
        formula.push(subsumed);
        formula.push(implied);
        formula.push(unit(3, 0, Literal::Geq(2)));
        formula.push(unit(3, 0, Literal::Geq(1)));

        (formula, headline)
    }

    #[test]
    fn raw_only_sorts() {
        let (formula, headline) = messy_formula();
        let count = formula.clause_count();

        let raw = cook(formula, Cooking::Raw, &headline);
        assert_eq!(raw.clause_count(), count);

        for window in 0..raw.clause_count() - 1 {
            assert!(raw.clause(window) <= raw.clause(window + 1));
        }
    }

    #[test]
    fn levels_never_grow_the_formula() {
        let (formula, headline) = messy_formula();
        let mut last = usize::MAX;

        for level in [Cooking::Raw, Cooking::Bleu, Cooking::Medium, Cooking::WellDone] {
            let cooked = cook(formula.clone(), level, &headline);
            assert!(cooked.clause_count() <= last.min(formula.clause_count()));
            last = cooked.clause_count();
        }
    }

    #[test]
    fn well_done_is_a_fixpoint() {
        let (formula, headline) = messy_formula();

        let once = cook(formula, Cooking::WellDone, &headline);
        let twice = cook(once.clone(), Cooking::WellDone, &headline);

        assert_eq!(once, twice);
    }

    #[test]
    fn cooking_preserves_the_satisfied_rows() {
        let (formula, headline) = messy_formula();
        let well_done = cook(formula.clone(), Cooking::WellDone, &headline);

        for a in 0..=2 {
            for b in 0..=1 {
                for c in 0..=1 {
                    let row = Row::from(vec![a, b, c]);
                    assert_eq!(formula.satisfied_by(&row), well_done.satisfied_by(&row));
                }
            }
        }
    }
}
