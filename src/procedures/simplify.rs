/*!
Level-zero simplification: removal of clauses satisfied by the facts of the
formula.

A literal true at level zero is true on every extension of the trail, so any
clause containing one contributes nothing and is deleted from its store.
Clauses acting as the reason for a level-zero assignment are kept, as reasons
must outlive their assignments.

A pass touches every clause, so passes are gated: nothing happens until a
fresh level-zero assignment has arrived and the propagations since the last
pass outweigh the stored literal count.
*/

use rand::Rng;

use crate::{
    context::{ContextState, GenericContext},
    db::atom::Reason,
    misc::log::targets,
    structures::clause::ClauseSource,
    types::err::ErrorKind,
};

impl<R: Rng> GenericContext<R> {
    /// Propagates any queued facts and sweeps satisfied clauses, when due.
    ///
    /// A conflict among the facts makes the context permanently
    /// unsatisfiable.
    pub fn simplify(&mut self) -> Result<(), ErrorKind> {
        debug_assert_eq!(self.trail.level(), 0);

        if self.propagate().is_err() {
            self.state = ContextState::Unsatisfiable;
            return Err(ErrorKind::FundamentalConflict);
        }

        if self.trail.q_head == self.counters.simplification_watermark
            || self.counters.simplification_countdown > 0
        {
            return Ok(());
        }

        let mut removed = 0;
        for source in [ClauseSource::Resolution, ClauseSource::Original] {
            for key in self.clause_db.keys_of(source) {
                let verdict = match self.clause_db.get(&key) {
                    None => None,
                    Some(clause) => {
                        let satisfied = clause.literals().any(|literal| {
                            self.atom_db.value_of(literal.atom()) == Some(literal.polarity())
                        });
                        let is_reason = self.atom_db.reason_of(clause.literal_at(0).atom())
                            == Some(Reason::Clause(key));
                        Some(satisfied && !is_reason)
                    }
                };
                if verdict == Some(true) {
                    self.clause_db.delete(key, &mut self.watches)?;
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            log::info!(target: targets::SIMPLIFICATION, "Removed {removed} satisfied clauses");
        }
        self.counters.simplification_watermark = self.trail.q_head;
        self.counters.simplification_countdown = self.clause_db.literal_count() as i64;

        Ok(())
    }
}
