/*!
Databases for holding the dynamic parts of a context.

- The [atom database](crate::db::atom) holds per-atom state: value, level,
  reason, activity, and saved phase.
- The [clause database](crate::db::clause) holds materialized clauses of three
  or more literals.
- The [trail](crate::db::trail) holds the chronological record of assignments.
- The [watch database](crate::db::watches) holds watched-literal lists,
  including the tagged entries which are the sole representation of binary
  clauses.
*/

pub mod atom;
pub mod clause;
mod keys;
pub mod trail;
pub mod watches;

pub use keys::{ClauseKey, FormulaIndex, FormulaToken};

/// A decision level, indexed from zero.
pub type LevelIndex = u32;
