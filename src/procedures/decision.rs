/*!
Decisions: choice of an unassigned atom and a polarity for it.

With small probability a uniformly random atom is probed and used if
unassigned, which perturbs activity-driven search out of ruts.
Otherwise the most active unassigned atom is taken from the heap, skipping any
atom assigned since it was last activated.

Polarity comes from the saved phase of the atom, which defaults to the
configured polarity until the atom is first unassigned from a value.
*/

use rand::Rng;

use crate::{
    context::GenericContext,
    structures::{atom::Atom, literal::CLiteral},
};

/// The outcome of asking for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// A decision was made, and a fresh level opened.
    Made,

    /// Every atom has a value: the valuation is total, and as propagation is
    /// complete, a model.
    Exhausted,
}

impl<R: Rng> GenericContext<R> {
    /// Opens a fresh level on a decision, unless the valuation is total.
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_without_value() {
            Some(atom) => {
                self.counters.total_decisions += 1;
                let literal = CLiteral::new(atom, self.atom_db.phase_of(atom));
                self.trail.push_level();
                self.record_assignment(literal, None);
                DecisionOk::Made
            }
            None => DecisionOk::Exhausted,
        }
    }

    /// An unassigned atom, by random probe or activity, if one exists.
    fn atom_without_value(&mut self) -> Option<Atom> {
        if self
            .rng
            .random_bool(self.config.random_decision_frequency)
        {
            if let Some(candidate) = self.atom_db.random_atom(&mut self.rng) {
                if self.atom_db.value_of(candidate).is_none() {
                    return Some(candidate);
                }
            }
        }

        while let Some(atom) = self.atom_db.heap_pop_most_active() {
            if self.atom_db.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }
}
