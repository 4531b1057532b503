/*!
Reports from a context, chiefly the outcome of a solve.
*/

use std::fmt::Display;

/// The outcome of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The formula is satisfiable under the given assumptions, and a model has
    /// been captured.
    Satisfiable,

    /// The formula is unsatisfiable, either outright or under the given
    /// assumptions.
    Unsatisfiable,

    /// No verdict was reached within the given limits.
    Unknown,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Satisfiable => write!(f, "satisfiable"),
            Report::Unsatisfiable => write!(f, "unsatisfiable"),
            Report::Unknown => write!(f, "unknown"),
        }
    }
}
