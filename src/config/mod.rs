/*!
Configuration of a run.

All configuration is fixed before any learning takes place, and the configuration structure is passed by reference into orchestration and the learners.
Nothing reads configuration through ambient state, and so the same configuration may drive any number of concurrent workers.

*/

mod closure;
pub use closure::Closure;

mod strategy;
pub use strategy::Strategy;

mod direction;
pub use direction::Direction;

mod cooking;
pub use cooking::Cooking;

mod mode;
pub use mode::TaskMode;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The logical fragment to learn formulas in.
    pub closure: Closure,

    /// The learning strategy.
    pub strategy: Strategy,

    /// The coordinate-visit order of relevance search.
    pub direction: Direction,

    /// How far to simplify learned formulas.
    pub cooking: Cooking,

    /// Minimize the clause set against the negative rows with a greedy cover.
    pub set_cover: bool,

    /// Which positive/negative pairings of groups to learn.
    pub mode: TaskMode,

    /// The group names learned as positive under [TaskMode::SelectedToAll].
    pub selected: Vec<String>,

    /// Skip relevance search, keeping every coordinate.
    pub no_section: bool,

    /// Verify each learned formula against the examples of its task, logging any violation.
    pub self_check: bool,

    /// The shift applied to coordinate indices in stored formulas.
    pub offset: usize,

    /// The number of worker threads a parallel run partitions tasks over.
    pub workers: usize,

    /// The seed for the random coordinate-visit order.
    pub seed: u64,

    /// Externally supplied per-coordinate precedence weights, consulted by [Direction::Precedence].
    pub precedence: Option<Vec<usize>>,
}

impl Default for Config {
    /// The default configuration is (roughly) arranged to provide deterministic, well-simplified, results on a library of tests.
    fn default() -> Self {
        Config {
            closure: Closure::Horn,
            strategy: Strategy::Large,
            direction: Direction::Ascending,
            cooking: Cooking::WellDone,
            set_cover: true,
            mode: TaskMode::OneToAll,
            selected: Vec::default(),
            no_section: false,
            self_check: false,
            offset: 0,
            workers: 1,
            seed: 0,
            precedence: None,
        }
    }
}
