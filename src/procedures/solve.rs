/*!
The solve procedure.

A solve begins by propagating any facts queued at level zero, then pushes each
assumption as its own decision level with immediate propagation, explaining
any conflict as a [core of assumptions](crate::procedures::assumptions).
With assumptions in place the procedure is a loop of searches, each bounded by
a conflict allowance from the Luby sequence scaled by the configured unit, and
each search is the usual propagate / analyse / learn / backtrack cycle, with
decisions filling the gaps.

Between searches the learnt clause budget grows by a tenth, and the optional
limits of the call are consulted: a conflict ceiling, a propagation ceiling,
and a wall-clock deadline.
A tripped limit ends the solve without a verdict, keeping every learnt clause
and activity for a later call.

However a solve ends, the trail unwinds to level zero, so clauses and further
calls may follow.
A solve without assumptions which ends unsatisfiable fixes the context
permanently: nothing can be added to escape the verdict.
*/

use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    context::{AssignmentStatus, ContextState, GenericContext},
    db::{atom::Reason, watches::Watcher},
    misc::log::targets,
    procedures::decision::DecisionOk,
    reports::Report,
    structures::{clause::ClauseSource, literal::CLiteral},
    types::err::{AnalysisError, ErrorKind},
};

/// Optional limits on a single solve.
///
/// Budgets are counted from the start of the call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveLimits {
    /// The number of conflicts after which the solve pauses.
    pub conflicts: Option<u64>,

    /// The number of propagations after which the solve pauses.
    pub propagations: Option<u64>,

    /// Wall-clock time after which the solve pauses, checked once per restart.
    pub time: Option<Duration>,
}

/// Limits of the call in progress, as absolute ceilings.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ActiveLimits {
    pub conflict_ceiling: Option<u64>,
    pub propagation_ceiling: Option<u64>,
    pub deadline: Option<Instant>,
}

/// The outcome of a single bounded search.
enum SearchResult {
    /// A total valuation satisfying every clause was found.
    Satisfiable,

    /// A conflict arose at the root level.
    Unsatisfiable,

    /// The conflict allowance or a limit was exhausted.
    Paused,
}

impl<R: Rng> GenericContext<R> {
    /// Solves the clauses of the context, without assumptions or limits.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(&[], SolveLimits::default())
    }

    /// Solves the clauses of the context under `assumptions`, within `limits`.
    ///
    /// See [Report] for the possible outcomes.
    /// After a [satisfiable](Report::Satisfiable) call a model is available
    /// via [model](GenericContext::model), and after an
    /// [unsatisfiable](Report::Unsatisfiable) call under assumptions a
    /// conflicting subset of the assumptions is available via
    /// [conflict_core](GenericContext::conflict_core).
    pub fn solve_given(
        &mut self,
        assumptions: &[CLiteral],
        limits: SolveLimits,
    ) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => {
                if let Some(recorder) = &mut self.recorder {
                    recorder.conclude_unsatisfiable();
                }
                return Ok(Report::Unsatisfiable);
            }
            ContextState::Solving => return Err(ErrorKind::InvalidState),
            _ => {}
        }
        for assumption in assumptions {
            self.check_atom(assumption.atom())?;
        }

        self.counters.solve_calls += 1;
        self.model = None;
        self.analysis.conflict_core.clear();
        self.limits = ActiveLimits {
            conflict_ceiling: limits
                .conflicts
                .map(|budget| self.counters.total_conflicts + budget),
            propagation_ceiling: limits
                .propagations
                .map(|budget| self.counters.total_propagations + budget),
            deadline: limits
                .time
                .or(self.config.time_limit)
                .map(|duration| Instant::now() + duration),
        };
        self.state = ContextState::Solving;
        debug_assert_eq!(self.trail.level(), 0);
        self.trail.root_level = 0;

        // Facts queued at level zero come first, so assumption levels hold
        // only what the assumptions add.
        if self.propagate().is_err() {
            self.state = ContextState::Unsatisfiable;
            if let Some(recorder) = &mut self.recorder {
                recorder.conclude_unsatisfiable();
            }
            return Ok(Report::Unsatisfiable);
        }

        for &assumption in assumptions {
            self.trail.push_level();
            self.trail.root_level = self.trail.level();
            match self.try_assign(assumption, None) {
                AssignmentStatus::Fresh => {
                    if let Err(conflict) = self.propagate() {
                        self.explain_root_conflict(&conflict);
                        return Ok(self.close_unsatisfiable_under_assumptions());
                    }
                }
                AssignmentStatus::Repeat => {}
                AssignmentStatus::Conflict => {
                    self.explain_failed_assumption(assumption);
                    return Ok(self.close_unsatisfiable_under_assumptions());
                }
            }
        }

        log::info!(target: targets::SOLVE, "Solving with {} assumptions", assumptions.len());
        let mut learnt_budget = (self.clause_db.original_count() / 3) as i64;
        let verdict;

        loop {
            let allowance =
                (self.config.luby_u as u64) * (self.counters.luby.next().unwrap_or(1) as u64);
            match self.search(allowance, learnt_budget)? {
                SearchResult::Satisfiable => {
                    verdict = Report::Satisfiable;
                    break;
                }
                SearchResult::Unsatisfiable => {
                    verdict = Report::Unsatisfiable;
                    break;
                }
                SearchResult::Paused => {
                    learnt_budget = learnt_budget.saturating_mul(11) / 10;
                    if self.limit_exceeded() {
                        verdict = Report::Unknown;
                        break;
                    }
                }
            }
        }

        self.backjump(0);
        self.trail.root_level = 0;

        match verdict {
            Report::Satisfiable => self.state = ContextState::Satisfiable,
            Report::Unsatisfiable => {
                if assumptions.is_empty() {
                    self.state = ContextState::Unsatisfiable;
                    if let Some(recorder) = &mut self.recorder {
                        recorder.conclude_unsatisfiable();
                    }
                } else {
                    self.state = ContextState::Input;
                }
            }
            Report::Unknown => self.state = ContextState::Input,
        }
        log::info!(target: targets::SOLVE, "Verdict: {verdict}");
        Ok(verdict)
    }

    /// Unwinds assumption levels and leaves the context open for further
    /// calls, as unsatisfiability under assumptions binds only this call.
    fn close_unsatisfiable_under_assumptions(&mut self) -> Report {
        self.backjump(0);
        self.trail.root_level = 0;
        self.state = ContextState::Input;
        log::info!(target: targets::SOLVE, "Unsatisfiable under the given assumptions");
        Report::Unsatisfiable
    }

    /// Searches for a verdict within `allowance` conflicts.
    fn search(&mut self, allowance: u64, learnt_budget: i64) -> Result<SearchResult, ErrorKind> {
        self.counters.restarts += 1;
        let mut conflicts_here: u64 = 0;

        loop {
            match self.propagate() {
                Err(conflict) => {
                    self.counters.total_conflicts += 1;
                    conflicts_here += 1;

                    if self.trail.level() == self.trail.root_level {
                        self.explain_root_conflict(&conflict);
                        return Ok(SearchResult::Unsatisfiable);
                    }

                    let backjump_level = self.conflict_analysis(&conflict)?;
                    self.backjump(backjump_level);
                    self.record_learnt_clause()?;
                    self.atom_db.decay_activity();
                    self.clause_db.decay_activity();
                }

                Ok(()) => {
                    if conflicts_here >= allowance || self.budget_exceeded() {
                        self.backjump(self.trail.root_level);
                        return Ok(SearchResult::Paused);
                    }

                    if self.trail.level() == 0 && self.config.simplification {
                        self.simplify()?;
                    }

                    if learnt_budget >= 0
                        && self.clause_db.learnt_count() as i64
                            - self.trail.assignment_count() as i64
                            >= learnt_budget
                    {
                        self.reduce_learnt_db()?;
                    }

                    match self.make_decision() {
                        DecisionOk::Made => {}
                        DecisionOk::Exhausted => {
                            self.capture_model();
                            self.backjump(self.trail.root_level);
                            return Ok(SearchResult::Satisfiable);
                        }
                    }
                }
            }
        }
    }

    /// Stores the clause held in the analysis buffer and queues its asserting
    /// literal.
    ///
    /// Called with the trail at the backtrack level of the clause.
    fn record_learnt_clause(&mut self) -> Result<(), ErrorKind> {
        if let Some(recorder) = &mut self.recorder {
            recorder.clause(&self.analysis.learnt);
        }

        match self.analysis.learnt.len() {
            0 => Err(ErrorKind::Analysis(AnalysisError::EmptyResolution)),
            1 => {
                let literal = self.analysis.learnt[0];
                self.record_assignment(literal, None);
                // A learnt unit holds on any extension of level zero.
                self.atom_db.force_root_level(literal.atom());
                Ok(())
            }
            2 => {
                let asserted = self.analysis.learnt[0];
                let other = self.analysis.learnt[1];
                self.watches.watch(asserted, Watcher::Binary(other));
                self.watches.watch(other, Watcher::Binary(asserted));
                self.record_assignment(asserted, Some(Reason::Binary(other)));
                Ok(())
            }
            _ => {
                // Analysis rebuilds the buffer from empty, so it may move out.
                let clause = std::mem::take(&mut self.analysis.learnt);
                let asserted = clause[0];
                let key =
                    self.clause_db
                        .store(clause, ClauseSource::Resolution, &mut self.watches)?;
                self.clause_db.bump_activity(&key);
                self.record_assignment(asserted, Some(Reason::Clause(key)));
                Ok(())
            }
        }
    }

    /// Whether the conflict or propagation ceiling of the call has been
    /// reached.
    fn budget_exceeded(&self) -> bool {
        self.limits
            .conflict_ceiling
            .is_some_and(|ceiling| self.counters.total_conflicts >= ceiling)
            || self
                .limits
                .propagation_ceiling
                .is_some_and(|ceiling| self.counters.total_propagations >= ceiling)
    }

    /// Whether any limit of the call has been reached.
    fn limit_exceeded(&self) -> bool {
        self.budget_exceeded()
            || self
                .limits
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
