/*!
Clause submission.

Clauses are simplified on entry against the level-zero valuation:

- Literals are sorted and deduplicated.
- A clause containing an atom and its negation, or a literal true at level
  zero, is dropped as a no-op.
- Literals false at level zero are removed.

What remains is absorbed by size: the empty clause makes the context
permanently unsatisfiable, a unit goes to the trail at level zero, a binary
clause becomes a pair of watch entries, and anything larger is stored in the
clause database.

Submission is a level-zero operation: a mid-solve context does not accept
clauses, and between solves the trail has always been unwound to level zero.
*/

use rand::Rng;

use crate::{
    context::{AssignmentStatus, ContextState, GenericContext},
    db::watches::Watcher,
    misc::log::targets,
    structures::clause::{Clause, ClauseSource},
    types::err::ErrorKind,
};

/// The outcome of a successful clause submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause reduced to a unit, now forced at level zero.
    UnitForced,

    /// The clause is a tautology, or is already satisfied at level zero, and
    /// the context is unchanged.
    Tautology,
}

impl<R: Rng> GenericContext<R> {
    /// Adds `clause` to the context.
    ///
    /// An atom outside the context is an error which leaves the context
    /// unchanged, and a clause false at level zero makes the context
    /// permanently unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => return Err(ErrorKind::FundamentalConflict),
            ContextState::Solving => return Err(ErrorKind::InvalidState),
            _ => {}
        }
        debug_assert_eq!(self.trail.level(), 0);

        let mut literals = clause.canonical();
        for literal in &literals {
            self.check_atom(literal.atom())?;
        }

        literals.sort_unstable();
        literals.dedup();

        let mut keep = 0;
        for index in 0..literals.len() {
            let literal = literals[index];
            if index + 1 < literals.len() && literals[index + 1].atom() == literal.atom() {
                // The negation follows: a tautology.
                return Ok(ClauseOk::Tautology);
            }
            match self.atom_db.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Ok(ClauseOk::Tautology),
                Some(_) => continue,
                None => {
                    literals[keep] = literal;
                    keep += 1;
                }
            }
        }
        literals.truncate(keep);

        if literals.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "An empty clause was added");
            self.state = ContextState::Unsatisfiable;
            return Err(ErrorKind::FundamentalConflict);
        }

        if let Some(recorder) = &mut self.recorder {
            recorder.clause(&literals);
        }
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        match literals.len() {
            1 => match self.try_assign(literals[0], None) {
                AssignmentStatus::Fresh | AssignmentStatus::Repeat => Ok(ClauseOk::UnitForced),
                AssignmentStatus::Conflict => {
                    log::info!(target: targets::CLAUSE_DB, "Unit {} contradicts the trail", literals[0]);
                    self.state = ContextState::Unsatisfiable;
                    Err(ErrorKind::FundamentalConflict)
                }
            },
            2 => {
                self.watches.watch(literals[0], Watcher::Binary(literals[1]));
                self.watches.watch(literals[1], Watcher::Binary(literals[0]));
                Ok(ClauseOk::Added)
            }
            _ => {
                self.clause_db
                    .store(literals, ClauseSource::Original, &mut self.watches)?;
                Ok(ClauseOk::Added)
            }
        }
    }
}
