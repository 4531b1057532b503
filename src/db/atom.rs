/*!
A database of per-atom state.

For each atom the database holds:
- The current value of the atom, if any.
- The decision level at which the atom was assigned.
  Levels are written on assignment and otherwise left in place, so the level of
  an unassigned atom is stale and must not be read.
- The reason for the assignment, if the assignment was a consequence of
  propagation.
- The activity of the atom, on a max-heap used for decisions.
- The phase of the most recent assignment, for phase saving.
- A tag mark, scratch for conflict analysis.

The one deliberate quirk: when a unit clause is learnt the level of its atom is
rewritten to zero even though the assignment was made at the root level, so
final-conflict explanation treats the atom as a root fact.
*/

use rand::Rng;

use crate::{
    config::{rescale, Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::CLiteral,
    },
    types::err::AtomDBError,
};

/// The reason an atom holds its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Propagation through a binary clause.
    ///
    /// The literal is the other literal of the clause, false at the time of
    /// propagation.
    Binary(CLiteral),

    /// Propagation through the keyed clause.
    Clause(ClauseKey),
}

/// A database of per-atom state.
pub struct AtomDB {
    /// The value of each atom, if any.
    valuation: Vec<Option<bool>>,

    /// The decision level of each atom, stale unless the atom is assigned.
    levels: Vec<LevelIndex>,

    /// The reason of each atom, cleared when the atom is unassigned.
    reasons: Vec<Option<Reason>>,

    /// The saved phase of each atom.
    phases: Vec<bool>,

    /// Tag marks, scratch for analysis, together with the list of marked atoms.
    tags: Vec<bool>,
    tagged: Vec<Atom>,

    /// Atom activities, on a max-heap for decisions.
    activity_heap: IndexHeap<Activity>,

    /// The current bump increment.
    activity_increment: Activity,

    /// The factor by which the increment grows each conflict.
    increment_growth: Activity,

    /// The polarity given to an atom never yet assigned.
    polarity_default: bool,
}

impl AtomDB {
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            phases: Vec::default(),
            tags: Vec::default(),
            tagged: Vec::default(),
            activity_heap: IndexHeap::default(),
            activity_increment: 1.0,
            increment_growth: 1.0 / config.variable_decay,
            polarity_default: config.polarity_default,
        }
    }

    /// The number of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// Creates a fresh atom and returns it.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = self.valuation.len();
        if atom > ATOM_MAX as usize {
            return Err(AtomDBError::AtomsExhausted);
        }
        let atom = atom as Atom;

        self.valuation.push(None);
        self.levels.push(0);
        self.reasons.push(None);
        self.phases.push(self.polarity_default);
        self.tags.push(false);
        self.activity_heap.expand_bounded(atom as usize);
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The full valuation, indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The saved phase of `atom`.
    pub fn phase_of(&self, atom: Atom) -> bool {
        self.phases[atom as usize]
    }

    /// The recorded level of `atom`, stale unless the atom is assigned.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize]
    }

    /// Rewrites the recorded level of `atom` to zero.
    ///
    /// For learnt units, which hold on any extension of the root level.
    pub fn force_root_level(&mut self, atom: Atom) {
        self.levels[atom as usize] = 0;
    }

    /// The reason `atom` holds its value, if propagation set it.
    pub fn reason_of(&self, atom: Atom) -> Option<Reason> {
        self.reasons[atom as usize]
    }

    /// Records the assignment of `literal` at `level` for `reason`.
    ///
    /// The atom must be unassigned.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<Reason>) {
        let atom = literal.atom() as usize;
        debug_assert!(self.valuation[atom].is_none());

        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = level;
        self.reasons[atom] = reason;
    }

    /// Clears the value and reason of `atom`, optionally saving the phase, and
    /// returns the atom to the activity heap.
    pub fn drop_value(&mut self, atom: Atom, save_phase: bool) {
        let index = atom as usize;
        if save_phase {
            if let Some(value) = self.valuation[index] {
                self.phases[index] = value;
            }
        }
        self.valuation[index] = None;
        self.reasons[index] = None;
        self.activity_heap.activate(index);
    }

    /// Tags `atom`, returning true if the tag is fresh.
    pub fn tag(&mut self, atom: Atom) -> bool {
        if self.tags[atom as usize] {
            return false;
        }
        self.tags[atom as usize] = true;
        self.tagged.push(atom);
        true
    }

    /// Whether `atom` is tagged.
    pub fn tagged(&self, atom: Atom) -> bool {
        self.tags[atom as usize]
    }

    /// The number of tagged atoms, a mark for [untag_from](AtomDB::untag_from).
    pub fn tagged_count(&self) -> usize {
        self.tagged.len()
    }

    /// Clears every tag made at or after `mark`.
    pub fn untag_from(&mut self, mark: usize) {
        for &atom in &self.tagged[mark..] {
            self.tags[atom as usize] = false;
        }
        self.tagged.truncate(mark);
    }

    /// Clears every tag.
    pub fn clear_tags(&mut self) {
        self.untag_from(0);
    }

    /// Bumps the activity of `atom`, rescaling all activities if the bump
    /// passes the representation bound.
    pub fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;
        let bumped = self.activity_heap.value_at(index) + self.activity_increment;
        self.activity_heap.revalue(index, bumped);
        self.activity_heap.heapify_if_active(index);

        if bumped > rescale::ATOM_ACTIVITY_MAX {
            self.activity_heap
                .apply_to_all(|activity| activity * rescale::ATOM_ACTIVITY_SCALE);
            self.activity_increment *= rescale::ATOM_ACTIVITY_SCALE;
        }
    }

    /// Grows the bump increment, so later bumps outweigh earlier bumps.
    pub fn decay_activity(&mut self) {
        self.activity_increment *= self.increment_growth;
    }

    /// Removes and returns the most active atom on the heap.
    ///
    /// The returned atom may be stale, that is, assigned since it was last
    /// activated, and a caller skips such atoms.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// A uniformly random atom of the database, unless the database is empty.
    pub fn random_atom(&self, rng: &mut impl Rng) -> Option<Atom> {
        if self.valuation.is_empty() {
            return None;
        }
        Some(rng.random_range(0..self.valuation.len()) as Atom)
    }
}
