use otter_learn::structures::{
    clause::Clause,
    literal::Literal,
    mask::{Mask, MatrixView},
    matrix::Matrix,
    row::Row,
};

mod rows {
    use super::*;

    #[test]
    fn dominance_is_elementwise() {
        let a = Row::from(vec![2, 1, 0]);
        let b = Row::from(vec![1, 1, 0]);
        let c = Row::from(vec![0, 2, 0]);

        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));

        // Incomparable either way.
        assert!(!a.dominates(&c));
        assert!(!c.dominates(&a));
    }

    #[test]
    fn dominance_is_reflexive() {
        let a = Row::from(vec![3, 0, 1]);
        assert!(a.dominates(&a));
    }

    #[test]
    fn lexicographic_order() {
        let low = Row::from(vec![1, 0, 0]);
        let high = Row::from(vec![1, 1, 0]);

        assert!(low < high);
        assert!(high > low);
    }

    #[test]
    fn meet_is_coordinatewise_minimum() {
        let a = Row::from(vec![2, 0, 1]);
        let b = Row::from(vec![1, 1, 1]);

        let meet = a.meet(&b);
        assert_eq!(meet, Row::from(vec![1, 0, 1]));
        assert!(a.dominates(&meet));
        assert!(b.dominates(&meet));
    }

    #[test]
    fn polarity_swap_round_trips() {
        let dmaxs = vec![3, 1, 2];
        let row = Row::from(vec![1, 0, 2]);

        let swapped = row.swap_polarity(&dmaxs);
        assert_eq!(swapped, Row::from(vec![2, 1, 0]));
        assert_eq!(swapped.swap_polarity(&dmaxs), row);
    }
}

mod masks {
    use super::*;

    fn example_matrix() -> Matrix {
        Matrix::from_rows(
            3,
            vec![
                Row::from(vec![1, 1, 0]),
                Row::from(vec![1, 0, 0]),
                Row::from(vec![0, 1, 1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn views_match_restricted_rows() {
        let matrix = example_matrix();

        let mut mask = Mask::all(3);
        mask.set(1, false);

        let view = MatrixView::from_mask(&matrix, &mask);
        let columns = mask.kept_columns();

        for index in 0..matrix.row_count() {
            assert_eq!(
                view.row_view(index).to_row(),
                matrix.row(index).restrict_to(&columns),
            );
        }
    }

    #[test]
    fn view_comparisons_match_restricted_comparisons() {
        let matrix = example_matrix();

        let mut mask = Mask::all(3);
        mask.set(0, false);

        let view = MatrixView::from_mask(&matrix, &mask);
        let columns = mask.kept_columns();

        for left in 0..matrix.row_count() {
            for right in 0..matrix.row_count() {
                let left_restricted = matrix.row(left).restrict_to(&columns);
                let right_restricted = matrix.row(right).restrict_to(&columns);

                assert_eq!(
                    view.row_view(left).cmp(&view.row_view(right)),
                    left_restricted.cmp(&right_restricted),
                );
                assert_eq!(
                    view.row_view(left).dominates(&view.row_view(right)),
                    left_restricted.dominates(&right_restricted),
                );
            }
        }
    }

    #[test]
    fn restriction_sorts_and_deduplicates() {
        let matrix = example_matrix();

        let mut mask = Mask::none(3);
        mask.set(0, true);

        // Projected to the first coordinate the three rows collapse to two.
        let restricted = matrix.restrict(&mask);
        assert_eq!(restricted.row_count(), 2);
        assert_eq!(restricted.row(0), &Row::from(vec![0]));
        assert_eq!(restricted.row(1), &Row::from(vec![1]));
    }

    #[test]
    fn in_place_restriction_matches_the_fresh_restriction() {
        let matrix = example_matrix();

        let mut mask = Mask::all(3);
        mask.set(1, false);

        let mut in_place = matrix.clone();
        in_place.restrict_in_place(&mask);

        assert_eq!(in_place, matrix.restrict(&mask));
    }

    #[test]
    fn row_deletion_preserves_order() {
        let mut matrix = example_matrix();
        let removed = matrix.remove_row(1);

        assert_eq!(removed, Row::from(vec![1, 0, 0]));
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.row(0), &Row::from(vec![1, 1, 0]));
        assert_eq!(matrix.row(1), &Row::from(vec![0, 1, 1]));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let matrix = example_matrix();
        let transposed = matrix.transpose();

        assert_eq!(transposed.arity(), 3);
        assert_eq!(transposed.row_count(), 3);
        for row in 0..matrix.row_count() {
            for column in 0..matrix.arity() {
                assert_eq!(
                    matrix.row(row).value_at(column),
                    transposed.row(column).value_at(row),
                );
            }
        }
    }
}

mod literals {
    use super::*;

    #[test]
    fn both_is_satisfied_by_either_half() {
        let literal = Literal::Both { leq: 1, geq: 3 };

        assert!(literal.satisfied_by(0));
        assert!(literal.satisfied_by(1));
        assert!(!literal.satisfied_by(2));
        assert!(literal.satisfied_by(3));
        assert!(literal.satisfied_by(4));
    }

    #[test]
    fn excluding_excludes_exactly_the_value() {
        let dmax = 3;
        for value in 0..=dmax {
            let literal = Literal::excluding(value, dmax);
            for candidate in 0..=dmax {
                assert_eq!(literal.satisfied_by(candidate), candidate != value);
            }
        }
    }

    #[test]
    fn implication_orders_bounds() {
        assert!(Literal::Leq(0).implies(&Literal::Leq(1)));
        assert!(!Literal::Leq(2).implies(&Literal::Leq(1)));
        assert!(Literal::Geq(2).implies(&Literal::Geq(1)));
        assert!(Literal::Leq(0).implies(&Literal::Both { leq: 1, geq: 3 }));
        assert!(!Literal::Both { leq: 1, geq: 3 }.implies(&Literal::Leq(1)));
    }

    #[test]
    fn disjunction_widens() {
        let merged = Literal::Leq(0).or(Literal::Geq(2));
        assert_eq!(merged, Literal::Both { leq: 0, geq: 2 });

        let widened = Literal::Leq(1).or(Literal::Leq(0));
        assert_eq!(widened, Literal::Leq(1));
    }
}

mod clauses {
    use super::*;

    #[test]
    fn order_prefers_fewer_literals() {
        let mut unit = Clause::fresh(3);
        unit.set_literal(2, Literal::Geq(1));

        let mut pair = Clause::fresh(3);
        pair.set_literal(0, Literal::Leq(0));
        pair.set_literal(1, Literal::Leq(0));

        assert!(unit < pair);
    }

    #[test]
    fn order_breaks_ties_by_first_index() {
        let mut early = Clause::fresh(3);
        early.set_literal(0, Literal::Geq(1));

        let mut late = Clause::fresh(3);
        late.set_literal(1, Literal::Geq(1));

        assert!(early < late);
    }

    #[test]
    fn the_empty_clause_is_never_satisfied() {
        let clause = Clause::fresh(2);
        assert!(clause.falsified_by(&Row::from(vec![0, 0])));
        assert!(clause.falsified_by(&Row::from(vec![1, 1])));
    }

    #[test]
    fn subsumption_requires_tighter_literals() {
        let mut tight = Clause::fresh(2);
        tight.set_literal(0, Literal::Geq(2));

        let mut loose = Clause::fresh(2);
        loose.set_literal(0, Literal::Geq(1));
        loose.set_literal(1, Literal::Leq(0));

        assert!(tight.subsumes(&loose));
        assert!(!loose.subsumes(&tight));
    }
}
