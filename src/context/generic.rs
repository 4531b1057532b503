/*!
General methods on a context: atoms, assignments, and retrieval of results.
*/

use rand::Rng;

use crate::{
    context::{ContextState, GenericContext},
    db::atom::Reason,
    recorder::ClauseRecorder,
    reports::Report,
    structures::{atom::Atom, literal::CLiteral},
    types::err::{AtomDBError, ErrorKind},
};

/// The outcome of attempting an assignment against the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentStatus {
    /// The atom was unassigned, and now holds the asserted value.
    Fresh,

    /// The atom already held the asserted value.
    Repeat,

    /// The atom holds the opposite value.
    Conflict,
}

impl<R: Rng> GenericContext<R> {
    /// Creates a fresh atom and returns it.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let atom = self.atom_db.fresh_atom()?;
        self.watches.ensure_atoms(self.atom_db.count());
        Ok(atom)
    }

    /// Ensures the context contains at least `count` atoms.
    pub fn ensure_atoms(&mut self, count: u32) -> Result<(), ErrorKind> {
        while (self.atom_db.count() as u32) < count {
            self.atom_db.fresh_atom()?;
        }
        self.watches.ensure_atoms(self.atom_db.count());
        Ok(())
    }

    /// The number of atoms in the context.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// The current value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The model of the most recent satisfiable solve, indexed by atom.
    pub fn model(&self) -> Option<&[bool]> {
        self.model.as_deref()
    }

    /// The conflicting subset of assumptions from the most recent solve which
    /// was unsatisfiable under assumptions.
    pub fn conflict_core(&self) -> &[CLiteral] {
        &self.analysis.conflict_core
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            _ => Report::Unknown,
        }
    }

    /// Installs `recorder` as the observer of every stored clause.
    ///
    /// Only a context which holds no clauses accepts a recorder, as recording
    /// must start from the first clause to be of use.
    pub fn set_recorder(&mut self, recorder: Box<dyn ClauseRecorder>) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration => {
                self.recorder = Some(recorder);
                Ok(())
            }
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// Removes and returns the installed recorder, if any.
    pub fn take_recorder(&mut self) -> Option<Box<dyn ClauseRecorder>> {
        self.recorder.take()
    }

    /// Checks `atom` belongs to the context.
    pub(crate) fn check_atom(&self, atom: Atom) -> Result<(), ErrorKind> {
        if (atom as usize) < self.atom_db.count() {
            Ok(())
        } else {
            log::error!("Atom {atom} is outside the context");
            Err(ErrorKind::AtomDB(AtomDBError::OutOfRange(atom)))
        }
    }

    /// Records the assignment of `literal` for `reason` at the current level,
    /// queueing the literal for propagation.
    ///
    /// The atom of the literal must be unassigned.
    pub(crate) fn record_assignment(&mut self, literal: CLiteral, reason: Option<Reason>) {
        let level = self.trail.level();
        self.atom_db.set_value(literal, level, reason);
        self.trail.literals.push(literal);
    }

    /// Attempts the assignment of `literal` for `reason`, against the current
    /// valuation.
    pub(crate) fn try_assign(
        &mut self,
        literal: CLiteral,
        reason: Option<Reason>,
    ) -> AssignmentStatus {
        match self.atom_db.value_of(literal.atom()) {
            None => {
                self.record_assignment(literal, reason);
                AssignmentStatus::Fresh
            }
            Some(value) if value == literal.polarity() => AssignmentStatus::Repeat,
            Some(_) => AssignmentStatus::Conflict,
        }
    }

    /// Captures the current (total) valuation as the model of the context.
    pub(crate) fn capture_model(&mut self) {
        debug_assert!(self
            .atom_db
            .valuation()
            .iter()
            .all(|value| value.is_some()));

        self.model = Some(
            self.atom_db
                .valuation()
                .iter()
                .map(|value| value.unwrap_or(false))
                .collect(),
        );
    }
}
