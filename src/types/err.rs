/*!
Errors, mostly contract violations surfaced to a caller.

Each database or procedure has its own error type, and [ErrorKind] wraps every
such type for APIs which cross subsystems.
*/

use crate::structures::atom::Atom;

/// An error from some subsystem of the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error from the atom database.
    AtomDB(AtomDBError),

    /// An error from the clause database.
    ClauseDB(ClauseDBError),

    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// The formula is unsatisfiable by unit propagation over level-zero facts.
    FundamentalConflict,

    /// An operation was requested in a state which does not support it.
    InvalidState,
}

/// An error relating to the atom database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomDBError {
    /// No further atoms can be created.
    AtomsExhausted,

    /// A clause or assumption mentioned an atom the context does not contain.
    OutOfRange(Atom),
}

/// An error relating to the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseDBError {
    /// A key with no corresponding clause.
    Missing,

    /// No further learnt clause slots can be created.
    StorageExhausted,

    /// A learnt slot has been reused too many times for keys to remain distinct.
    TokensExhausted,

    /// An attempt to store an empty clause.
    EmptyClause,
}

/// An error during conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// Analysis resolved to an empty clause.
    EmptyResolution,

    /// A literal on the trail at a decision level has no reason and is not a
    /// decision.
    MissingReason,
}

impl From<AtomDBError> for ErrorKind {
    fn from(error: AtomDBError) -> Self {
        ErrorKind::AtomDB(error)
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(error: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(error)
    }
}

impl From<AnalysisError> for ErrorKind {
    fn from(error: AnalysisError) -> Self {
        ErrorKind::Analysis(error)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::AtomDB(e) => write!(f, "atom database error: {e:?}"),
            ErrorKind::ClauseDB(e) => write!(f, "clause database error: {e:?}"),
            ErrorKind::Analysis(e) => write!(f, "analysis error: {e:?}"),
            ErrorKind::FundamentalConflict => write!(f, "the formula is unsatisfiable"),
            ErrorKind::InvalidState => write!(f, "operation invalid in the current state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
