/*!
Watched-literal lists.

Each literal has a list of watchers consulted when the literal becomes true,
that is, when the negation of a watched literal is pushed to the trail.
So, a watcher of a clause on literal *l* lives in the list indexed by ¬*l*.

A watcher is either:
- A tagged binary entry, holding the other literal of a two-literal clause.
  These entries are the clause: binary clauses have no other representation,
  never move, and are never deleted.
- A key to a clause of three or more literals.
  These entries follow the first two slots of the clause and move between lists
  as the watched slots are reassigned.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets,
    structures::literal::CLiteral,
};

/// A single entry in a watch list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watcher {
    /// The other literal of a binary clause.
    Binary(CLiteral),

    /// A key to a clause watching the relevant literal.
    Clause(ClauseKey),
}

/// Watch lists for every literal of a context.
#[derive(Default)]
pub struct Watches {
    /// Watch lists, indexed by the [index](CLiteral::index) of the literal
    /// whose truth triggers the list.
    lists: Vec<Vec<Watcher>>,
}

impl Watches {
    /// Ensures lists exist for every literal over `atom_count` atoms.
    pub fn ensure_atoms(&mut self, atom_count: usize) {
        let required = 2 * atom_count;
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
        }
    }

    /// Adds `watcher` as a watcher of `literal`, to be consulted when
    /// `literal` is falsified.
    pub fn watch(&mut self, literal: CLiteral, watcher: Watcher) {
        self.lists[literal.negate().index()].push(watcher);
    }

    /// Removes the watcher of `key` on `literal`.
    pub fn unwatch(&mut self, literal: CLiteral, key: ClauseKey) {
        let list = &mut self.lists[literal.negate().index()];
        match list
            .iter()
            .position(|watcher| matches!(watcher, Watcher::Clause(k) if *k == key))
        {
            Some(position) => {
                list.swap_remove(position);
            }
            None => {
                log::error!(target: targets::CLAUSE_DB, "Missing watcher of {key} on {literal}");
            }
        }
    }

    /// A raw pointer to the list consulted when the literal of `index` is true.
    ///
    /// Used during propagation, where the list is walked while fresh watchers
    /// are pushed to *other* lists.
    pub fn list_ptr(&mut self, index: usize) -> *mut Vec<Watcher> {
        &mut self.lists[index]
    }
}
