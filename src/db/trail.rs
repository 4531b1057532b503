/*!
The trail of assignments, in chronological order.

Decision levels are delimited by the index at which each level begins, so level
zero occupies the prefix of the trail before the first recorded start.
The queue of literals awaiting propagation is the suffix of the trail from
`q_head`, and propagation consumes the trail in order.

During a solve with assumptions the first levels hold one assumption each, and
`root_level` records how many, so conflicts at or below the root level are
final for the call.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The trail of assignments.
#[derive(Default)]
pub struct Trail {
    /// Assigned literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index into `literals` at which each level after zero begins.
    pub level_starts: Vec<usize>,

    /// The index of the next literal to propagate.
    pub q_head: usize,

    /// The level below which conflicts are final for the current solve.
    pub root_level: LevelIndex,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_starts.len() as LevelIndex
    }

    /// Opens a fresh decision level at the top of the trail.
    pub fn push_level(&mut self) {
        self.level_starts.push(self.literals.len());
    }

    /// The number of assignments on the trail.
    pub fn assignment_count(&self) -> usize {
        self.literals.len()
    }

    /// The index at which the topmost level begins, or the trail length when
    /// at level zero.
    pub fn top_start(&self) -> usize {
        match self.level_starts.last() {
            Some(&start) => start,
            None => self.literals.len(),
        }
    }
}
