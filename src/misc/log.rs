/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, keyed by the targets
below.

Note, no log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [conflict analysis](crate::procedures::analysis).
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to learnt clause deletion.
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause).
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [backjumping](crate::procedures::backjump).
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to level-zero [simplification](crate::procedures::simplify).
    pub const SIMPLIFICATION: &str = "simplification";

    /// Logs related to a [solve](crate::procedures::solve).
    pub const SOLVE: &str = "solve";
}
