/*!
A context, the unification of the databases and procedures of a solver with a
configuration.

A context is in some [state](ContextState) which records where in the life of
an instance it is: open for configuration, accumulating clauses, mid-solve, or
holding a verdict.
Most of the interesting transitions belong to the [solve
procedure](crate::procedures::solve), with two exceptions: clause submission
moves a configured context to input, and an empty clause or a contradiction
among units moves any context to (permanent) unsatisfiability.
*/

mod counters;
mod generic;
mod specific;

pub use counters::Counters;
pub use generic::AssignmentStatus;
pub use specific::Context;

use std::fmt::Display;

use rand::Rng;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    procedures::{analysis::AnalysisBuffer, solve::ActiveLimits},
    recorder::ClauseRecorder,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context is open for configuration, no clause has been added.
    Configuration,

    /// The context holds clauses and no verdict.
    Input,

    /// The most recent solve found a model.
    Satisfiable,

    /// The clauses of the context are unsatisfiable, permanently.
    Unsatisfiable,

    /// A solve is in progress.
    Solving,
}

impl Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextState::Configuration => write!(f, "configuration"),
            ContextState::Input => write!(f, "input"),
            ContextState::Satisfiable => write!(f, "satisfiable"),
            ContextState::Unsatisfiable => write!(f, "unsatisfiable"),
            ContextState::Solving => write!(f, "solving"),
        }
    }
}

/// A context generic over its random number generator.
pub struct GenericContext<R: Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters over the life of the context.
    pub counters: Counters,

    /// Per-atom state.
    pub atom_db: AtomDB,

    /// Materialized clauses.
    pub clause_db: ClauseDB,

    /// Watch lists, including every binary clause.
    pub watches: Watches,

    /// The trail of assignments.
    pub trail: Trail,

    /// The state of the context.
    pub state: ContextState,

    /// The random number generator of the context.
    pub rng: R,

    /// Scratch for conflict analysis and the conflict core of the most recent
    /// solve.
    pub(crate) analysis: AnalysisBuffer,

    /// Limits active for the current solve.
    pub(crate) limits: ActiveLimits,

    /// The installed recorder, if any.
    pub(crate) recorder: Option<Box<dyn ClauseRecorder>>,

    /// The model of the most recent satisfiable solve.
    pub(crate) model: Option<Vec<bool>>,
}

impl<R: Rng> GenericContext<R> {
    /// A context with the given configuration and random number generator.
    pub fn with_rng(config: Config, rng: R) -> Self {
        GenericContext {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            watches: Watches::default(),
            trail: Trail::default(),
            counters: Counters::default(),
            analysis: AnalysisBuffer::default(),
            limits: ActiveLimits::default(),
            state: ContextState::Configuration,
            recorder: None,
            model: None,
            rng,
            config,
        }
    }
}
