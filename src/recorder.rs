/*!
A pass-through observer of stored clauses.

A recorder, when installed, is shown every clause the context stores, root and
learnt alike, in the (simplified) form the context stores it.
If a solve without assumptions concludes the formula is unsatisfiable the
recorder is notified, so the recorded sequence closes with a terminal
refutation marker.

Recorders observe and never steer: the context behaves identically with or
without one.

A recorder is installed while a context is in its configuration state, before
any clause has been added.
*/

use crate::structures::literal::CLiteral;

/// An observer of every clause a context stores.
pub trait ClauseRecorder {
    /// Called with the literals of each stored clause, in storage order.
    ///
    /// Unit clauses appear as a single literal.
    fn clause(&mut self, literals: &[CLiteral]);

    /// Called when a solve concludes the recorded clauses are jointly
    /// unsatisfiable.
    fn conclude_unsatisfiable(&mut self);
}

/// A recorder which keeps every observed clause in memory.
///
/// Intended for inspection and tests; serious proof logging would write
/// through to a sink instead.
#[derive(Debug, Default)]
pub struct VecRecorder {
    /// Every recorded clause, in order of storage.
    pub clauses: Vec<Vec<CLiteral>>,

    /// Whether a terminal refutation was recorded.
    pub concluded: bool,
}

impl ClauseRecorder for VecRecorder {
    fn clause(&mut self, literals: &[CLiteral]) {
        self.clauses.push(literals.to_vec());
    }

    fn conclude_unsatisfiable(&mut self) {
        self.concluded = true;
    }
}
