/*!
Conflict analysis: derivation of an asserting clause from a conflict.

Analysis resolves backwards from the conflict clause along the trail of the
current level, guided by tag marks on atoms:

- Literals of the clause under resolution at earlier levels join the learnt
  clause directly.
- Literals at the current level are counted, and the walk resolves each
  counted literal against its reason until one remains: the first unique
  implication point, whose negation becomes the asserting literal in slot
  zero.

The learnt clause is then minimized by self-subsumption: a literal whose
reasons bottom out in other literals of the clause is redundant.
The check prunes early via a 32-bucket mask of the levels present in the
clause, as a literal with a level outside the mask cannot be redundant.

Finally the highest-level literal among the remainder is swapped to slot one,
fixing the backtrack target.

Atom activity is bumped for every atom tagged during the walk, and the
activity of every learnt clause resolved with is bumped too.
*/

use rand::Rng;

use crate::{
    context::GenericContext,
    db::{atom::Reason, ClauseKey, LevelIndex},
    misc::log::targets,
    procedures::bcp::Conflict,
    structures::literal::CLiteral,
    types::err::{AnalysisError, ErrorKind},
};

/// Scratch space for analysis, reused across conflicts, and the conflict core
/// of the most recent solve under assumptions.
#[derive(Default)]
pub struct AnalysisBuffer {
    /// The clause being learnt.
    /// Slot zero holds the asserting literal once analysis completes.
    pub(crate) learnt: Vec<CLiteral>,

    /// A copy of the literals of the clause under resolution.
    pub(crate) resolvent: Vec<CLiteral>,

    /// The stack of atoms awaiting a redundancy verdict during minimization.
    pub(crate) minimize_stack: Vec<CLiteral>,

    /// The conflicting subset of assumptions, when a solve under assumptions
    /// concludes unsatisfiable.
    pub(crate) conflict_core: Vec<CLiteral>,
}

impl<R: Rng> GenericContext<R> {
    /// Derives an asserting clause from `conflict` into the analysis buffer
    /// and returns the level to backtrack to.
    ///
    /// Requires the current level to exceed the root level.
    pub fn conflict_analysis(&mut self, conflict: &Conflict) -> Result<LevelIndex, ErrorKind> {
        debug_assert!(self.trail.level() > self.trail.root_level);
        let current_level = self.trail.level();

        self.analysis.learnt.clear();
        // Slot zero is reserved for the asserting literal.
        self.analysis.learnt.push(CLiteral::new(0, false));

        let mut frontier: usize = 0;
        let mut position = self.trail.literals.len();
        let asserting: CLiteral;

        self.stage_conflict(conflict);

        loop {
            // Tag and sort the literals of the staged clause.
            for index in 0..self.analysis.resolvent.len() {
                let literal = self.analysis.resolvent[index];
                let atom = literal.atom();
                if !self.atom_db.tagged(atom) && self.atom_db.level_of(atom) > 0 {
                    self.atom_db.tag(atom);
                    self.atom_db.bump_activity(atom);
                    if self.atom_db.level_of(atom) == current_level {
                        frontier += 1;
                    } else {
                        self.analysis.learnt.push(literal);
                    }
                }
            }

            // The deepest tagged trail literal is the next resolvent, or the
            // point of assertion.
            loop {
                match position.checked_sub(1) {
                    Some(previous) => position = previous,
                    None => return Err(ErrorKind::Analysis(AnalysisError::EmptyResolution)),
                }
                if self.atom_db.tagged(self.trail.literals[position].atom()) {
                    break;
                }
            }
            let pivot = self.trail.literals[position];
            frontier -= 1;
            if frontier == 0 {
                asserting = pivot.negate();
                break;
            }

            match self.atom_db.reason_of(pivot.atom()) {
                Some(reason) => {
                    if let Reason::Clause(key @ ClauseKey::Learnt(_, _)) = reason {
                        self.clause_db.bump_activity(&key);
                    }
                    self.stage_reason(&reason);
                }
                None => return Err(ErrorKind::Analysis(AnalysisError::MissingReason)),
            }
        }

        self.analysis.learnt[0] = asserting;
        self.minimize_learnt_clause();

        // The second watched slot takes the highest level remaining, which is
        // the backtrack target.
        let backjump_level = if self.analysis.learnt.len() > 1 {
            let mut max_slot = 1;
            let mut max_level = self.atom_db.level_of(self.analysis.learnt[1].atom());
            for slot in 2..self.analysis.learnt.len() {
                let level = self.atom_db.level_of(self.analysis.learnt[slot].atom());
                if level > max_level {
                    max_level = level;
                    max_slot = slot;
                }
            }
            self.analysis.learnt.swap(1, max_slot);
            max_level
        } else {
            self.trail.root_level
        };

        self.atom_db.clear_tags();
        log::trace!(target: targets::ANALYSIS, "Learnt {:?}", self.analysis.learnt);

        Ok(backjump_level.max(self.trail.root_level))
    }

    /// Copies the literals of `conflict` to the resolvent buffer.
    fn stage_conflict(&mut self, conflict: &Conflict) {
        self.analysis.resolvent.clear();
        match conflict {
            Conflict::Binary(pair) => self.analysis.resolvent.extend_from_slice(pair),
            Conflict::Clause(key) => {
                if matches!(key, ClauseKey::Learnt(_, _)) {
                    self.clause_db.bump_activity(key);
                }
                if let Some(clause) = self.clause_db.get(key) {
                    self.analysis.resolvent.extend(clause.literals());
                }
            }
        }
    }

    /// Copies the literals of the clause behind `reason` to the resolvent
    /// buffer.
    ///
    /// A binary reason stages only the other literal of its clause, as the
    /// implied literal is the pivot, already tagged.
    ///
    /// Staging alone does not bump clause activity: minimization stages
    /// reasons speculatively, and only resolution counts as use.
    fn stage_reason(&mut self, reason: &Reason) {
        self.analysis.resolvent.clear();
        match reason {
            Reason::Binary(other) => self.analysis.resolvent.push(*other),
            Reason::Clause(key) => {
                if let Some(clause) = self.clause_db.get(key) {
                    self.analysis.resolvent.extend(clause.literals());
                }
            }
        }
    }

    /// Removes redundant literals from the learnt clause by self-subsumption.
    fn minimize_learnt_clause(&mut self) {
        let mut level_mask: u32 = 0;
        for slot in 1..self.analysis.learnt.len() {
            let level = self.atom_db.level_of(self.analysis.learnt[slot].atom());
            level_mask |= 1 << (level & 31);
        }

        let length = self.analysis.learnt.len();
        let mut keep = 1;
        for slot in 1..length {
            let literal = self.analysis.learnt[slot];
            let required = self.atom_db.reason_of(literal.atom()).is_none()
                || !self.literal_is_redundant(literal, level_mask);
            if required {
                self.analysis.learnt[keep] = literal;
                keep += 1;
            }
        }
        if keep < length {
            log::trace!(target: targets::ANALYSIS, "Minimization removed {} literals", length - keep);
        }
        self.analysis.learnt.truncate(keep);
    }

    /// Whether every reason chain below `literal` bottoms out in tagged atoms,
    /// making the literal redundant in the learnt clause.
    ///
    /// Tags made during a failed check are rolled back; tags made during a
    /// successful check stand, as they witness redundancy for later checks.
    fn literal_is_redundant(&mut self, literal: CLiteral, level_mask: u32) -> bool {
        let mark = self.atom_db.tagged_count();
        self.analysis.minimize_stack.clear();
        self.analysis.minimize_stack.push(literal);

        while let Some(checked) = self.analysis.minimize_stack.pop() {
            let Some(reason) = self.atom_db.reason_of(checked.atom()) else {
                self.atom_db.untag_from(mark);
                return false;
            };

            self.stage_reason(&reason);
            for index in 0..self.analysis.resolvent.len() {
                let antecedent = self.analysis.resolvent[index];
                let atom = antecedent.atom();
                if self.atom_db.tagged(atom) || self.atom_db.level_of(atom) == 0 {
                    continue;
                }
                let in_mask = (1_u32 << (self.atom_db.level_of(atom) & 31)) & level_mask != 0;
                if self.atom_db.reason_of(atom).is_some() && in_mask {
                    self.atom_db.tag(atom);
                    self.analysis.minimize_stack.push(antecedent);
                } else {
                    self.atom_db.untag_from(mark);
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context, structures::clause::ClauseSource};

    #[test]
    fn staging_a_reason_does_not_bump_clause_activity() {
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..3 {
            ctx.fresh_atom().unwrap();
        }
        let literals = vec![
            CLiteral::new(0, true),
            CLiteral::new(1, true),
            CLiteral::new(2, true),
        ];
        let key = ctx
            .clause_db
            .store(literals, ClauseSource::Resolution, &mut ctx.watches)
            .unwrap();
        let before = ctx.clause_db.get(&key).unwrap().activity();

        // Minimization stages reasons without resolving with them.
        ctx.stage_reason(&Reason::Clause(key));
        assert_eq!(ctx.clause_db.get(&key).unwrap().activity(), before);

        // Resolution with the conflict clause is use.
        ctx.stage_conflict(&Conflict::Clause(key));
        assert!(ctx.clause_db.get(&key).unwrap().activity() > before);
    }
}
