/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [relevance search](crate::procedures::minsect)
    pub const MINSECT: &str = "minsect";

    /// Logs related to the [Horn learners](crate::procedures::horn)
    pub const HORN: &str = "horn";

    /// Logs related to the [bijunctive learner](crate::procedures::bijunctive)
    pub const BIJUNCTIVE: &str = "bijunctive";

    /// Logs related to the [CNF learners](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [cooking](crate::procedures::cooking)
    pub const COOKING: &str = "cooking";

    /// Logs related to the [set cover](crate::procedures::set_cover)
    pub const COVER: &str = "cover";

    /// Logs related to [task orchestration](crate::context)
    pub const TASKS: &str = "tasks";

    /// Logs related to parsing matrices and formulas
    pub const PARSE: &str = "parse";
}
