use otter_learn::{
    config::{Closure, Config, TaskMode},
    context::{tasks::round_robin, Context},
    db::headline::Headline,
    reports::{persist, TaskOutcome, TaskReport},
    structures::{clause::Clause, formula::Formula, literal::Literal, matrix::Matrix, row::Row},
};

fn two_group_context(config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    the_context.add_row("a", Row::from(vec![1, 1, 0])).unwrap();
    the_context.add_row("a", Row::from(vec![1, 0, 0])).unwrap();
    the_context.add_row("b", Row::from(vec![0, 1, 1])).unwrap();
    the_context.add_row("b", Row::from(vec![0, 0, 1])).unwrap();
    the_context
}

mod partitioning {
    use super::*;

    #[test]
    fn round_robin_covers_every_task_exactly_once() {
        let task_count = 13;

        for workers in 1..=6 {
            let mut seen: Vec<usize> = Vec::default();
            for worker in 0..workers {
                seen.extend(round_robin(task_count, workers, worker));
            }
            seen.sort_unstable();
            assert_eq!(seen, (0..task_count).collect::<Vec<usize>>());
        }
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let mut config = Config::default();
        config.mode = TaskMode::OneToOne;
        config.workers = 3;

        let the_context = two_group_context(config);

        let mut sequential = the_context.run().unwrap();
        let mut parallel = the_context.run_parallel().unwrap();

        sequential.sort_by_key(|report| report.index);
        parallel.sort_by_key(|report| report.index);

        assert_eq!(sequential, parallel);
    }
}

mod modes {
    use super::*;

    #[test]
    fn one_to_one_enumerates_ordered_pairs() {
        let mut config = Config::default();
        config.mode = TaskMode::OneToOne;

        let the_context = two_group_context(config);
        let tasks = the_context.tasks().unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].label, "a_vs_b");
        assert_eq!(tasks[1].label, "b_vs_a");
    }

    #[test]
    fn selected_mode_requires_known_names() {
        let mut config = Config::default();
        config.mode = TaskMode::SelectedToAll;
        config.selected = vec!["c".to_string()];

        let the_context = two_group_context(config);
        assert!(the_context.tasks().is_err());
    }

    #[test]
    fn every_task_learns_a_separating_formula() {
        let mut config = Config::default();
        config.mode = TaskMode::OneToAll;
        config.self_check = true;

        let the_context = two_group_context(config);
        let reports = the_context.run().unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            let formula = report.formula().unwrap();

            let positive = the_context
                .groups
                .index_of(&report.label)
                .map(|index| &the_context.groups.group(index).matrix)
                .unwrap();

            for row in positive.rows() {
                assert!(formula.satisfied_by(&row.restrict_to(&report.kept)));
            }
        }
    }

    #[test]
    fn dual_horn_runs_reflect_and_reflect_back() {
        let mut config = Config::default();
        config.closure = Closure::DualHorn;
        config.mode = TaskMode::OneToOne;

        let mut the_context = Context::from_config(config);
        the_context.add_row("up", Row::from(vec![1, 1])).unwrap();
        the_context.add_row("up", Row::from(vec![0, 1])).unwrap();
        the_context.add_row("up", Row::from(vec![1, 0])).unwrap();
        the_context.add_row("down", Row::from(vec![0, 0])).unwrap();

        let reports = the_context.run().unwrap();
        let report = &reports[0];
        let formula = report.formula().unwrap();

        let up = &the_context.groups.group(0).matrix;
        for row in up.rows() {
            assert!(formula.satisfied_by(&row.restrict_to(&report.kept)));
        }

        let down = Row::from(vec![0, 0]);
        assert!(formula.falsifies(&down.restrict_to(&report.kept)));
    }

    #[test]
    fn inseparable_pairs_are_reported_not_learned() {
        let mut config = Config::default();
        config.mode = TaskMode::OneToOne;

        let mut the_context = Context::from_config(config);
        the_context.add_row("a", Row::from(vec![1, 0])).unwrap();
        the_context.add_row("a", Row::from(vec![0, 1])).unwrap();
        the_context.add_row("b", Row::from(vec![0, 0])).unwrap();

        let reports = the_context.run().unwrap();

        // The meet of a's rows is b's row, so no Horn formula separates a from b.
        assert_eq!(reports[0].outcome, TaskOutcome::NotDisjoint);
        assert!(reports[0].kept.is_empty());

        // The reverse direction is separable.
        assert!(reports[1].formula().is_some());
    }

    #[test]
    fn impossible_bijunctive_tasks_report_no_formula() {
        let mut config = Config::default();
        config.closure = Closure::Bijunctive;
        config.mode = TaskMode::OneToOne;
        config.no_section = true;

        let mut the_context = Context::from_config(config);
        the_context.add_row("even", Row::from(vec![0, 0, 0])).unwrap();
        the_context.add_row("even", Row::from(vec![0, 1, 1])).unwrap();
        the_context.add_row("even", Row::from(vec![1, 0, 1])).unwrap();
        the_context.add_row("even", Row::from(vec![1, 1, 0])).unwrap();
        the_context.add_row("odd", Row::from(vec![1, 1, 1])).unwrap();

        let reports = the_context.run().unwrap();
        assert_eq!(reports[0].outcome, TaskOutcome::NoFormula);
    }
}

mod covering {
    use super::*;
    use otter_learn::procedures::set_cover::set_cover;

    #[test]
    fn cover_still_falsifies_the_universe() {
        let universe = Matrix::from_rows(
            2,
            vec![
                Row::from(vec![0, 0]),
                Row::from(vec![0, 1]),
                Row::from(vec![1, 0]),
            ],
        )
        .unwrap();

        // The two unit clauses falsify two rows each; the longer clause only the origin.
        let mut broad = Clause::fresh(2);
        broad.set_literal(0, Literal::Geq(1));
        broad.set_literal(1, Literal::Geq(1));

        let mut narrow_a = Clause::fresh(2);
        narrow_a.set_literal(0, Literal::Geq(1));

        let mut narrow_b = Clause::fresh(2);
        narrow_b.set_literal(1, Literal::Geq(1));

        let mut formula = Formula::new(2);
        formula.push(narrow_a);
        formula.push(narrow_b);
        formula.push(broad.clone());

        let cover = set_cover(&formula, &universe);

        assert!(cover.clause_count() <= formula.clause_count());
        assert_eq!(cover.clause_count(), 2);
        assert!(cover.clauses().all(|clause| clause != &broad));
        assert!(cover.falsifies_all(&universe));
    }

    #[test]
    fn cover_stops_when_no_candidate_helps() {
        let universe = Matrix::from_rows(1, vec![Row::from(vec![0]), Row::from(vec![1])]).unwrap();

        let mut only = Clause::fresh(1);
        only.set_literal(0, Literal::Geq(1));

        let mut formula = Formula::new(1);
        formula.push(only);

        // The single candidate falsifies the zero row alone; the cover takes it and stops.
        let cover = set_cover(&formula, &universe);
        assert_eq!(cover.clause_count(), 1);
    }
}

mod persistence {
    use super::*;

    fn example_report() -> (TaskReport, Headline) {
        let mut first = Clause::fresh(2);
        first.set_literal(0, Literal::Geq(1));
        first.set_literal(1, Literal::Leq(0));

        let mut second = Clause::fresh(2);
        second.set_literal(1, Literal::Both { leq: 0, geq: 2 });

        let mut formula = Formula::new(2);
        formula.push(first);
        formula.push(second);

        let report = TaskReport {
            index: 0,
            label: "a".to_string(),
            arity: 4,
            kept: vec![1, 3],
            outcome: TaskOutcome::Learned(formula),
        };

        let headline = Headline::infer(4, [Row::from(vec![1, 1, 1, 2])].iter());
        (report, headline)
    }

    #[test]
    fn formulas_round_trip_through_the_stored_form() {
        let (report, headline) = example_report();

        let mut stored: Vec<u8> = Vec::default();
        persist::write_formula(&mut stored, &report, &headline, 0).unwrap();

        let reloaded = persist::read_formula(stored.as_slice()).unwrap();

        assert_eq!(reloaded.label, "a");
        assert_eq!(reloaded.arity, 4);
        assert_eq!(reloaded.kept, vec![1, 3]);
        assert_eq!(Some(&reloaded.formula), report.formula());
    }

    #[test]
    fn offsets_shift_the_stored_indices() {
        let (report, headline) = example_report();

        let mut stored: Vec<u8> = Vec::default();
        persist::write_formula(&mut stored, &report, &headline, 5).unwrap();

        let text = String::from_utf8(stored.clone()).unwrap();
        assert!(text.lines().nth(1).unwrap().contains('7'));

        let reloaded = persist::read_formula(stored.as_slice()).unwrap();
        assert_eq!(reloaded.offset, 5);
        assert_eq!(reloaded.kept, vec![1, 3]);
        assert_eq!(Some(&reloaded.formula), report.formula());
    }

    #[test]
    fn variables_outside_the_kept_set_are_rejected() {
        let stored = "a 4 2 0\n2 4\n2 0\n3 0\n";

        let reloaded = persist::read_formula(stored.as_bytes()).unwrap();

        // The second clause names variable 3, which is not kept, and is rejected.
        assert_eq!(reloaded.kept, vec![1, 3]);
        assert_eq!(reloaded.formula.clause_count(), 1);
    }
}

mod reading {
    use super::*;

    #[test]
    fn malformed_lines_are_skipped() {
        let mut the_context = Context::from_config(Config::default());

        let input = "a 1 1 0\na 1 0\nb zero 1 1\nb 0 1 1\n";
        let read = the_context.read_matrix(input.as_bytes()).unwrap();

        assert_eq!(read, 2);
        assert_eq!(the_context.groups.group_count(), 2);
    }

    #[test]
    fn an_input_without_rows_is_an_error() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.read_matrix("\n\n".as_bytes()).is_err());
    }

    #[test]
    fn headlines_bound_the_domain() {
        let mut the_context = Context::from_config(Config::default());
        the_context.read_headline("x 1\ny 1\n".as_bytes()).unwrap();

        assert!(the_context.add_row("a", Row::from(vec![0, 1])).is_ok());
        assert!(the_context.add_row("a", Row::from(vec![0, 2])).is_err());
    }
}
