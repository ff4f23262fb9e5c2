use otter_learn::{
    config::{Closure, Config},
    db::headline::Headline,
    procedures::{bijunctive, cnf, horn, minsect},
    structures::{mask::Mask, matrix::Matrix, row::Row},
    types::err::LearnError,
};

fn matrix(arity: usize, rows: &[&[u32]]) -> Matrix {
    Matrix::from_rows(arity, rows.iter().map(|r| Row::from(r.to_vec())).collect()).unwrap()
}

mod relevance {
    use super::*;

    #[test]
    fn kept_restriction_stays_admissible() {
        let t = matrix(3, &[&[1, 1, 0], &[1, 0, 0]]);
        let f = matrix(3, &[&[0, 1, 1]]);

        let config = Config::default();
        let section = minsect::minsect(&t, &f, &config);

        assert!(section.admissible);
        assert!(section.mask.kept_count() >= 1);
        assert!(minsect::admissible(&t, &f, &section.mask, config.closure));
    }

    #[test]
    fn no_section_keeps_everything() {
        let t = matrix(3, &[&[1, 1, 0], &[1, 0, 0]]);
        let f = matrix(3, &[&[0, 1, 1]]);

        let mut config = Config::default();
        config.no_section = true;

        let section = minsect::minsect(&t, &f, &config);
        assert!(section.admissible);
        assert_eq!(section.mask, Mask::all(3));
    }

    #[test]
    fn equal_sets_are_inadmissible() {
        let t = matrix(2, &[&[0, 1]]);
        let f = matrix(2, &[&[0, 1]]);

        let section = minsect::minsect(&t, &f, &Config::default());
        assert!(!section.admissible);
        assert_eq!(section.mask.kept_count(), 0);
    }

    #[test]
    fn horn_admissibility_goes_through_the_closure() {
        // The meet of the two positive rows equals the negative row, so the pair
        // is separable as sets though not in the Horn fragment.
        let t = matrix(2, &[&[1, 0], &[0, 1]]);
        let f = matrix(2, &[&[0, 0]]);

        let mut config = Config::default();
        config.closure = Closure::Horn;
        assert!(!minsect::minsect(&t, &f, &config).admissible);

        config.closure = Closure::CNF;
        assert!(minsect::minsect(&t, &f, &config).admissible);
    }

    #[test]
    fn visit_orders_agree_on_admissibility() {
        use otter_learn::config::Direction;

        let t = matrix(4, &[&[1, 1, 0, 1], &[1, 0, 0, 0]]);
        let f = matrix(4, &[&[0, 1, 1, 1], &[0, 0, 1, 0]]);

        for direction in [
            Direction::Ascending,
            Direction::Descending,
            Direction::Random,
            Direction::LowScore,
            Direction::HighScore,
        ] {
            let mut config = Config::default();
            config.direction = direction;

            let section = minsect::minsect(&t, &f, &config);
            assert!(section.admissible);
            assert!(minsect::admissible(&t, &f, &section.mask, config.closure));
        }
    }
}

mod horn_learning {
    use super::*;

    #[test]
    fn closure_is_closed_under_meets() {
        let t = matrix(3, &[&[1, 1, 0], &[1, 0, 1]]);
        let closed = horn::horn_closure(&t);

        assert_eq!(closed.row_count(), 3);
        assert!(closed.contains(&Row::from(vec![1, 0, 0])));

        for left in 0..closed.row_count() {
            for right in 0..closed.row_count() {
                let meet = closed.row(left).meet(closed.row(right));
                assert!(closed.contains(&meet));
            }
        }
    }

    #[test]
    fn exact_separates_the_concrete_scenario() {
        let t = matrix(3, &[&[1, 1, 0], &[1, 0, 0]]);
        let f_row = Row::from(vec![0, 1, 1]);

        let headline = Headline::boolean(3);
        let formula = horn::learn_horn_exact(&t, &headline).unwrap();

        for clause in formula.clauses() {
            assert!(t.rows().all(|row| clause.satisfied_by(row)));
        }
        assert!(formula.falsifies(&f_row));
        assert_eq!(formula.clause_count(), 2);
    }

    #[test]
    fn exact_models_are_the_closure() {
        let t = matrix(3, &[&[1, 1, 0], &[1, 0, 1]]);
        let headline = Headline::boolean(3);

        let closed = horn::horn_closure(&t);
        let formula = horn::learn_horn_exact(&t, &headline).unwrap();

        // Every boolean row satisfies the formula exactly when it lies in the closure.
        for a in 0..=1 {
            for b in 0..=1 {
                for c in 0..=1 {
                    let row = Row::from(vec![a, b, c]);
                    assert_eq!(formula.satisfied_by(&row), closed.contains(&row));
                }
            }
        }
    }

    #[test]
    fn exact_rejects_wider_domains() {
        let t = matrix(2, &[&[2, 0]]);
        let headline = Headline::infer(2, t.rows());

        assert_eq!(
            horn::learn_horn_exact(&t, &headline),
            Err(LearnError::ExactRequiresBoolean),
        );
    }

    #[test]
    fn large_clauses_eliminate_their_rows() {
        let t = matrix(2, &[&[2, 0], &[1, 1]]);
        let f = matrix(2, &[&[0, 1]]);
        let headline = Headline::infer(2, t.rows().chain(f.rows()));

        let formula = horn::learn_horn_large(&t, &f, &headline);

        assert_eq!(formula.clause_count(), 1);
        for clause in formula.clauses() {
            assert!(t.rows().all(|row| clause.satisfied_by(row)));
        }
        assert!(formula.falsifies(&Row::from(vec![0, 1])));
    }

    #[test]
    fn dual_horn_round_trips_through_the_reflection() {
        // Closed under coordinate-wise maximum, the dual of the Horn condition.
        let t = matrix(2, &[&[1, 1], &[0, 1], &[1, 0]]);
        let f = matrix(2, &[&[0, 0]]);
        let headline = Headline::boolean(2);
        let dmaxs = headline.dmax_vec();

        let t_reflected = t.swap_polarity(&dmaxs);
        let f_reflected = f.swap_polarity(&dmaxs);

        let reflected = horn::learn_horn_large(&t_reflected, &f_reflected, &headline);
        let formula = reflected.swap_polarity(&dmaxs);

        assert!(formula.satisfied_by_all(&t));
        assert!(formula.falsifies_all(&f));

        // Reflecting twice returns the reflected formula.
        assert_eq!(formula.swap_polarity(&dmaxs), reflected);
    }
}

mod bijunctive_learning {
    use super::*;

    #[test]
    fn equality_on_two_booleans() {
        let t = matrix(2, &[&[0, 0], &[1, 1]]);
        let f = matrix(2, &[&[0, 1], &[1, 0]]);
        let headline = Headline::boolean(2);

        let formula = bijunctive::learn_bijunctive(&t, &f, &headline).unwrap();

        assert_eq!(formula.clause_count(), 2);
        assert!(formula.satisfied_by(&Row::from(vec![0, 0])));
        assert!(formula.satisfied_by(&Row::from(vec![1, 1])));
        assert!(formula.falsifies(&Row::from(vec![0, 1])));
        assert!(formula.falsifies(&Row::from(vec![1, 0])));
    }

    #[test]
    fn strip_misses_become_unit_clauses() {
        let t = matrix(2, &[&[0, 0], &[0, 2]]);
        let f = matrix(2, &[&[2, 0]]);
        let headline = Headline::infer(2, t.rows().chain(f.rows()));

        let formula = bijunctive::learn_bijunctive(&t, &f, &headline).unwrap();

        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.clause(0).size(), 1);
        assert!(formula.satisfied_by_all(&t));
        assert!(formula.falsifies_all(&f));
    }

    #[test]
    fn parity_has_no_bijunctive_formula() {
        let t = matrix(3, &[&[0, 0, 0], &[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
        let f = matrix(3, &[&[1, 1, 1]]);
        let headline = Headline::boolean(3);

        assert_eq!(
            bijunctive::learn_bijunctive(&t, &f, &headline),
            Err(LearnError::NoIsolation),
        );
    }

    #[test]
    fn every_clause_has_at_most_two_literals() {
        let t = matrix(3, &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]]);
        let f = matrix(3, &[&[1, 0, 1], &[1, 1, 1]]);
        let headline = Headline::boolean(3);

        if let Ok(formula) = bijunctive::learn_bijunctive(&t, &f, &headline) {
            assert!(formula.clauses().all(|clause| clause.size() <= 2));
            assert!(formula.satisfied_by_all(&t));
        }
    }
}

mod cnf_learning {
    use super::*;

    #[test]
    fn large_excludes_exactly_the_negative_rows() {
        let t = matrix(2, &[&[0, 1]]);
        let f = matrix(2, &[&[0, 0], &[1, 1]]);
        let headline = Headline::boolean(2);

        let formula = cnf::learn_cnf_large(&f, &headline);

        assert_eq!(formula.clause_count(), 2);
        assert!(formula.satisfied_by_all(&t));
        assert!(formula.falsifies_all(&f));
        assert!(formula.satisfied_by(&Row::from(vec![1, 0])));
    }

    #[test]
    fn exact_models_are_the_positive_rows() {
        let t = matrix(2, &[&[0, 0], &[1, 1]]);
        let headline = Headline::boolean(2);

        let formula = cnf::learn_cnf_exact(&t, &headline);

        for a in 0..=1 {
            for b in 0..=1 {
                let row = Row::from(vec![a, b]);
                assert_eq!(formula.satisfied_by(&row), t.contains(&row));
            }
        }
    }

    #[test]
    fn exact_models_over_wider_domains() {
        let t = matrix(2, &[&[0, 2], &[1, 0], &[2, 1]]);
        let headline = Headline::infer(2, t.rows());

        let formula = cnf::learn_cnf_exact(&t, &headline);

        for a in 0..=2 {
            for b in 0..=2 {
                let row = Row::from(vec![a, b]);
                assert_eq!(formula.satisfied_by(&row), t.contains(&row));
            }
        }
    }
}
