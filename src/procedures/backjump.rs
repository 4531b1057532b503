/*!
Backjumping: unwinding the trail to some earlier level.

Every assignment above the target level is dropped and its atom returned to
the activity heap.
With phase saving enabled, polarities are recorded for assignments undone
below the topmost level, so a skipped stretch of mostly-forced assignments is
reconstructible by later decisions.

The propagation head rewinds to the new top of the trail, so assignments which
survive a jump to level zero are re-propagated by the next solve, picking up
any clauses added in between.
*/

use rand::Rng;

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets,
};

impl<R: Rng> GenericContext<R> {
    /// Unwinds the trail to `target`, a no-op if the current level does not
    /// exceed it.
    pub fn backjump(&mut self, target: LevelIndex) {
        if self.trail.level() <= target {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        let bound = self.trail.level_starts[target as usize];
        let top_start = self.trail.top_start();

        for position in (bound..self.trail.literals.len()).rev() {
            let literal = self.trail.literals[position];
            let save_phase = self.config.phase_saving && position < top_start;
            self.atom_db.drop_value(literal.atom(), save_phase);
        }

        self.trail.literals.truncate(bound);
        self.trail.level_starts.truncate(target as usize);
        self.trail.q_head = bound;
    }
}
