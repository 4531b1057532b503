/*!
Reduction of the learnt clause store.

When the store outgrows its budget the least active half of the learnt clauses
is deleted, along with any clause of the remaining half whose activity falls
below `increment / learnt_count`, so clauses which have not recently taken part
in conflicts make way.

Two kinds of clause are never deleted:
- A clause currently the reason for an assignment on the trail.
- Binary clauses, which are not held in the store at all.
*/

use std::cmp::Ordering;

use rand::Rng;

use crate::{
    config::Activity,
    context::GenericContext,
    db::atom::Reason,
    misc::log::targets,
    types::err::ErrorKind,
};

impl<R: Rng> GenericContext<R> {
    /// Deletes inactive learnt clauses, keeping reasons.
    pub fn reduce_learnt_db(&mut self) -> Result<(), ErrorKind> {
        let mut ranked = self.clause_db.learnt_activities();
        if ranked.is_empty() {
            return Ok(());
        }
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let threshold = self.clause_db.activity_increment() / ranked.len() as Activity;
        let half = ranked.len() / 2;
        let mut removed = 0;

        for (position, (activity, key)) in ranked.iter().enumerate() {
            if position >= half && *activity >= threshold {
                continue;
            }
            let is_reason = match self.clause_db.get(key) {
                None => continue,
                Some(clause) => {
                    self.atom_db.reason_of(clause.literal_at(0).atom())
                        == Some(Reason::Clause(*key))
                }
            };
            if !is_reason {
                self.clause_db.delete(*key, &mut self.watches)?;
                removed += 1;
            }
        }

        log::info!(target: targets::REDUCTION, "Removed {removed} of {} learnt clauses", ranked.len());
        Ok(())
    }
}
