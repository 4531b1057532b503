/*!
Explanation of conflicts at the root level of a solve under assumptions.

When a conflict is final for a call, the assumptions responsible are recovered
by a backward walk over the trail: atoms of the conflict are tagged, tagged
atoms with a reason tag the atoms of that reason in turn, and tagged atoms
with no reason are assumptions, collected as the conflict core.

The core is a subset of the assumptions which is itself unsatisfiable with the
clauses of the context, so a client may drop any assumption outside the core
when reacting to failure.
*/

use rand::Rng;

use crate::{
    context::GenericContext,
    db::atom::Reason,
    misc::log::targets,
    procedures::bcp::Conflict,
    structures::literal::CLiteral,
};

impl<R: Rng> GenericContext<R> {
    /// Collects into the conflict core the assumptions under which `conflict`
    /// arose.
    ///
    /// A no-op when the solve carries no assumptions: the core of an outright
    /// unsatisfiable formula is empty.
    pub(crate) fn explain_root_conflict(&mut self, conflict: &Conflict) {
        self.analysis.conflict_core.clear();
        if self.trail.root_level == 0 {
            return;
        }

        // Tag the conflict clause.
        self.analysis.resolvent.clear();
        match conflict {
            Conflict::Binary(pair) => self.analysis.resolvent.extend_from_slice(pair),
            Conflict::Clause(key) => {
                if let Some(clause) = self.clause_db.get(key) {
                    self.analysis.resolvent.extend(clause.literals());
                }
            }
        }
        for index in 0..self.analysis.resolvent.len() {
            let atom = self.analysis.resolvent[index].atom();
            if self.atom_db.level_of(atom) > 0 {
                self.atom_db.tag(atom);
            }
        }

        // Walk the trail above level zero, replacing tagged consequences by
        // their antecedents until only assumptions stand.
        let Some(&bottom) = self.trail.level_starts.first() else {
            self.atom_db.clear_tags();
            return;
        };
        for position in (bottom..self.trail.literals.len()).rev() {
            let literal = self.trail.literals[position];
            let atom = literal.atom();
            if !self.atom_db.tagged(atom) {
                continue;
            }
            match self.atom_db.reason_of(atom) {
                None => self.analysis.conflict_core.push(literal),
                Some(Reason::Binary(other)) => {
                    if self.atom_db.level_of(other.atom()) > 0 {
                        self.atom_db.tag(other.atom());
                    }
                }
                Some(Reason::Clause(key)) => {
                    self.analysis.resolvent.clear();
                    if let Some(clause) = self.clause_db.get(&key) {
                        self.analysis.resolvent.extend(clause.literals());
                    }
                    for index in 0..self.analysis.resolvent.len() {
                        let antecedent = self.analysis.resolvent[index].atom();
                        if self.atom_db.level_of(antecedent) > 0 {
                            self.atom_db.tag(antecedent);
                        }
                    }
                }
            }
        }

        self.atom_db.clear_tags();
        log::info!(target: targets::SOLVE, "Conflict core: {:?}", self.analysis.conflict_core);
    }

    /// Collects the conflict core for `assumption`, which contradicts the
    /// current valuation.
    pub(crate) fn explain_failed_assumption(&mut self, assumption: CLiteral) {
        match self.atom_db.reason_of(assumption.atom()) {
            None => {
                // The opposing value is an earlier assumption, or, at level
                // zero, a fact of the formula.
                self.analysis.conflict_core.clear();
                self.analysis.conflict_core.push(assumption);
                if self.atom_db.level_of(assumption.atom()) > 0 {
                    self.analysis.conflict_core.push(assumption.negate());
                }
            }
            Some(reason) => {
                let conflict = match reason {
                    Reason::Binary(other) => Conflict::Binary([other, assumption.negate()]),
                    Reason::Clause(key) => Conflict::Clause(key),
                };
                self.explain_root_conflict(&conflict);
                self.analysis.conflict_core.push(assumption);
            }
        }
    }
}
