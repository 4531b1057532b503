/*!
Boolean constraint propagation.

Propagation consumes the trail from the queue head.
For each literal made true, the watch list of that literal is walked:

- A binary entry holds the other literal of its clause, which is enqueued if
  unassigned and a conflict if false.
  Binary entries never move.
- A clause entry is checked against the watched slots of its clause.
  The falsified literal is swapped to slot one, and if slot zero does not
  satisfy the clause a replacement watch is sought among the remaining slots.
  On success the entry moves to the list of the replacement, otherwise slot
  zero is enqueued, or, if false, the clause is the conflict.

The walked list is compacted in place: entries which move away (or whose
clause has been deleted) are swapped to the tail and truncated off at the end
of the walk, including on conflict.
*/

use rand::Rng;

use crate::{
    context::{AssignmentStatus, GenericContext},
    db::{
        atom::Reason,
        watches::Watcher,
        ClauseKey,
    },
    misc::log::targets,
    structures::literal::CLiteral,
};

/// A conflict found during propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// A binary clause, synthesized from its watch entry.
    /// Both literals are false.
    Binary([CLiteral; 2]),

    /// The key of a clause whose literals are all false.
    Clause(ClauseKey),
}

/// What a clause entry asks of the propagation loop.
enum WatchStatus {
    /// The clause is satisfied by its remaining watch, keep the entry.
    Satisfied,

    /// The entry moved to another list, or the clause is gone.
    Remove,

    /// The clause asserts its remaining watch.
    Unit(CLiteral),
}

impl<R: Rng> GenericContext<R> {
    /// Propagates every queued literal, or returns the first conflict found.
    pub fn propagate(&mut self) -> Result<(), Conflict> {
        while self.trail.q_head < self.trail.literals.len() {
            let literal = self.trail.literals[self.trail.q_head];
            self.trail.q_head += 1;
            self.counters.total_propagations += 1;
            self.counters.simplification_countdown -= 1;
            self.propagate_literal(literal)?;
        }
        Ok(())
    }

    /// Walks the watch list of `literal`, just made true.
    fn propagate_literal(&mut self, literal: CLiteral) -> Result<(), Conflict> {
        log::trace!(target: targets::PROPAGATION, "Propagating {literal}");
        let false_literal = literal.negate();

        let list_ptr = self.watches.list_ptr(literal.index());
        // Safety: the walk pushes only to lists of other literals.
        // A replacement watch is unassigned or true, and every literal of this
        // list's clauses which keys this list is false, so no push below
        // touches the list behind this pointer.
        let list = unsafe { &mut *list_ptr };

        let mut index = 0;
        let mut length = list.len();

        while index < length {
            match list[index] {
                Watcher::Binary(other) => {
                    match self.try_assign(other, Some(Reason::Binary(false_literal))) {
                        AssignmentStatus::Fresh | AssignmentStatus::Repeat => index += 1,
                        AssignmentStatus::Conflict => {
                            list.truncate(length);
                            return Err(Conflict::Binary([other, false_literal]));
                        }
                    }
                }

                Watcher::Clause(key) => {
                    let status = match self.clause_db.get_mut(&key) {
                        None => WatchStatus::Remove,
                        Some(clause) => {
                            if clause.literal_at(0) == false_literal {
                                clause.swap(0, 1);
                            }
                            let watch = clause.literal_at(0);

                            if self.atom_db.value_of(watch.atom()) == Some(watch.polarity()) {
                                WatchStatus::Satisfied
                            } else {
                                let mut moved = false;
                                for slot in 2..clause.size() {
                                    let candidate = clause.literal_at(slot);
                                    let value = self.atom_db.value_of(candidate.atom());
                                    if value != Some(!candidate.polarity()) {
                                        clause.swap(1, slot);
                                        self.watches.watch(candidate, Watcher::Clause(key));
                                        moved = true;
                                        break;
                                    }
                                }
                                match moved {
                                    true => WatchStatus::Remove,
                                    false => WatchStatus::Unit(watch),
                                }
                            }
                        }
                    };

                    match status {
                        WatchStatus::Satisfied => index += 1,
                        WatchStatus::Remove => {
                            length -= 1;
                            list.swap(index, length);
                        }
                        WatchStatus::Unit(watch) => {
                            match self.try_assign(watch, Some(Reason::Clause(key))) {
                                AssignmentStatus::Fresh | AssignmentStatus::Repeat => index += 1,
                                AssignmentStatus::Conflict => {
                                    list.truncate(length);
                                    return Err(Conflict::Clause(key));
                                }
                            }
                        }
                    }
                }
            }
        }

        list.truncate(length);
        Ok(())
    }
}
