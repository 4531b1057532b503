/*!
A database of materialized clauses, those of three or more literals.

Original clauses are stored in one vector and learnt clauses in another.
Learnt clauses may be deleted during [reduction](crate::procedures::reduction),
so learnt slots are recycled through a free list and each slot carries a token
distinguishing its occupants over time.
A key whose token does not match the stored clause resolves to nothing.

The first two slots of every stored clause are the watched slots, and watchers
are registered here when a clause is stored and removed here when a clause is
deleted.
*/

use crate::{
    config::{rescale, Activity, Config},
    db::{
        watches::{Watcher, Watches},
        ClauseKey, FormulaIndex,
    },
    misc::log::targets,
    structures::{clause::CClause, clause::ClauseSource, literal::CLiteral},
    types::err::ClauseDBError,
};

/// A clause, as stored in the clause database.
pub struct DbClause {
    /// The key of the clause.
    key: ClauseKey,

    /// The literals of the clause.
    /// Slots zero and one are the watched slots.
    literals: CClause,

    /// The activity of the clause, meaningful only for learnt clauses.
    activity: Activity,
}

impl DbClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// The literal at `slot`.
    pub fn literal_at(&self, slot: usize) -> CLiteral {
        self.literals[slot]
    }

    /// An iterator over the literals of the clause.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literals.iter().copied()
    }

    /// Swaps the literals at `a` and `b`, used to maintain the watched slots.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.literals.swap(a, b);
    }

    /// The activity of the clause.
    pub fn activity(&self) -> Activity {
        self.activity
    }
}

/// A database of materialized clauses.
pub struct ClauseDB {
    /// Original clauses, tombstoned on deletion.
    originals: Vec<Option<DbClause>>,

    /// Learnt clauses, with slots recycled through `free_slots`.
    learnts: Vec<Option<DbClause>>,

    /// Keys of free learnt slots, tokens already advanced.
    free_slots: Vec<ClauseKey>,

    /// The number of live original clauses.
    original_count: usize,

    /// The number of live learnt clauses.
    learnt_count: usize,

    /// The total literal count over live clauses, both stores.
    literal_count: usize,

    /// The current bump increment for clause activity.
    activity_increment: Activity,

    /// The factor by which the increment grows each conflict.
    increment_growth: Activity,
}

impl ClauseDB {
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            originals: Vec::default(),
            learnts: Vec::default(),
            free_slots: Vec::default(),
            original_count: 0,
            learnt_count: 0,
            literal_count: 0,
            activity_increment: 1.0,
            increment_growth: 1.0 / config.clause_decay,
        }
    }

    /// The number of live original clauses.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// The number of live learnt clauses.
    pub fn learnt_count(&self) -> usize {
        self.learnt_count
    }

    /// The total literal count over live clauses.
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// The current clause activity increment.
    pub fn activity_increment(&self) -> Activity {
        self.activity_increment
    }

    /// Stores `clause`, registering watchers on its first two slots, and
    /// returns the key to the stored clause.
    ///
    /// Clauses of fewer than three literals are never stored here: units go to
    /// the trail and binary clauses to the watch lists.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        watches: &mut Watches,
    ) -> Result<ClauseKey, ClauseDBError> {
        if clause.is_empty() {
            return Err(ClauseDBError::EmptyClause);
        }
        debug_assert!(clause.len() >= 3);

        let key = match source {
            ClauseSource::Original => {
                if self.originals.len() > FormulaIndex::MAX as usize {
                    return Err(ClauseDBError::StorageExhausted);
                }
                ClauseKey::Original(self.originals.len() as FormulaIndex)
            }
            ClauseSource::Resolution => match self.free_slots.pop() {
                Some(key) => key,
                None => {
                    if self.learnts.len() > FormulaIndex::MAX as usize {
                        return Err(ClauseDBError::StorageExhausted);
                    }
                    ClauseKey::Learnt(self.learnts.len() as FormulaIndex, 0)
                }
            },
        };

        watches.watch(clause[0], Watcher::Clause(key));
        watches.watch(clause[1], Watcher::Clause(key));
        self.literal_count += clause.len();
        log::trace!(target: targets::CLAUSE_DB, "Stored {key}: {clause:?}");

        let stored = DbClause {
            key,
            literals: clause,
            activity: 0.0,
        };

        match key {
            ClauseKey::Original(_) => {
                self.originals.push(Some(stored));
                self.original_count += 1;
            }
            ClauseKey::Learnt(index, _) => {
                let index = index as usize;
                if index == self.learnts.len() {
                    self.learnts.push(Some(stored));
                } else {
                    self.learnts[index] = Some(stored);
                }
                self.learnt_count += 1;
            }
        }

        Ok(key)
    }

    /// The clause of `key`, if live.
    pub fn get(&self, key: &ClauseKey) -> Option<&DbClause> {
        let slot = match key {
            ClauseKey::Original(_) => self.originals.get(key.index()),
            ClauseKey::Learnt(_, _) => self.learnts.get(key.index()),
        };
        slot?.as_ref().filter(|clause| clause.key == *key)
    }

    /// A mutable borrow of the clause of `key`, if live.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Option<&mut DbClause> {
        let slot = match key {
            ClauseKey::Original(_) => self.originals.get_mut(key.index()),
            ClauseKey::Learnt(_, _) => self.learnts.get_mut(key.index()),
        };
        slot?.as_mut().filter(|clause| clause.key == *key)
    }

    /// Deletes the clause of `key`, removing its watchers.
    ///
    /// Learnt slots return to the free list with an advanced token.
    pub fn delete(&mut self, key: ClauseKey, watches: &mut Watches) -> Result<(), ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(_) => self.originals.get_mut(key.index()),
            ClauseKey::Learnt(_, _) => self.learnts.get_mut(key.index()),
        };
        let Some(slot) = slot else {
            return Err(ClauseDBError::Missing);
        };
        if slot.as_ref().is_none_or(|clause| clause.key != key) {
            return Err(ClauseDBError::Missing);
        }
        let Some(clause) = slot.take() else {
            return Err(ClauseDBError::Missing);
        };

        watches.unwatch(clause.literal_at(0), key);
        watches.unwatch(clause.literal_at(1), key);
        self.literal_count -= clause.size();
        log::trace!(target: targets::CLAUSE_DB, "Deleted {key}");

        match key {
            ClauseKey::Original(_) => self.original_count -= 1,
            ClauseKey::Learnt(_, _) => {
                self.learnt_count -= 1;
                // Token exhaustion retires the slot rather than risking a
                // stale key resolving to a fresh clause.
                if let Ok(next) = key.retoken() {
                    self.free_slots.push(next);
                }
            }
        }

        Ok(())
    }

    /// The keys of every live clause from `source`.
    pub fn keys_of(&self, source: ClauseSource) -> Vec<ClauseKey> {
        let store = match source {
            ClauseSource::Original => &self.originals,
            ClauseSource::Resolution => &self.learnts,
        };
        store
            .iter()
            .flatten()
            .map(|clause| clause.key)
            .collect()
    }

    /// The key and activity of every live learnt clause.
    pub fn learnt_activities(&self) -> Vec<(Activity, ClauseKey)> {
        self.learnts
            .iter()
            .flatten()
            .map(|clause| (clause.activity, clause.key))
            .collect()
    }

    /// Bumps the activity of the clause of `key`, rescaling all learnt
    /// activities if the bump passes the representation bound.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        let increment = self.activity_increment;
        let Some(clause) = self.get_mut(key) else {
            return;
        };
        clause.activity += increment;

        if clause.activity > rescale::CLAUSE_ACTIVITY_MAX {
            for clause in self.learnts.iter_mut().flatten() {
                clause.activity *= rescale::CLAUSE_ACTIVITY_SCALE;
            }
            self.activity_increment *= rescale::CLAUSE_ACTIVITY_SCALE;
        }
    }

    /// Grows the bump increment, so later bumps outweigh earlier bumps.
    pub fn decay_activity(&mut self) {
        self.activity_increment *= self.increment_growth;
    }
}
