/*!
The configuration of a context.

Defaults follow the constants of the MiniSat family, and most values are only
read when a fresh context is created or a solve begins.
*/

use std::time::Duration;

use crate::generic::luby::LubyRepresentation;

/// The representation of an activity, for atoms and clauses alike.
pub type Activity = f64;

/// The configuration of a context.
#[derive(Clone, Debug)]
pub struct Config {
    /// The constant multiplier of the Luby sequence when setting restart
    /// allowances, in conflicts.
    pub luby_u: LubyRepresentation,

    /// Atom activity is bumped by an increment which grows by `1 / variable_decay`
    /// after each conflict.
    pub variable_decay: Activity,

    /// Clause activity is bumped by an increment which grows by `1 / clause_decay`
    /// after each conflict.
    pub clause_decay: Activity,

    /// The frequency with which a decision is made by probing a uniformly
    /// random atom rather than consulting the activity heap.
    pub random_decision_frequency: f64,

    /// The polarity given to an atom which has never been assigned.
    pub polarity_default: bool,

    /// Whether the polarity of an atom is saved on backtrack and restored on
    /// the next decision over the atom.
    pub phase_saving: bool,

    /// Whether satisfied clauses are removed when the trail returns to level
    /// zero with fresh consequences.
    pub simplification: bool,

    /// An optional wall-clock limit applied to every solve, checked once per
    /// restart.
    pub time_limit: Option<Duration>,

    /// The seed of the random number generator.
    pub random_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            luby_u: 100,
            variable_decay: 0.95,
            clause_decay: 0.999,
            random_decision_frequency: 0.02,
            polarity_default: false,
            phase_saving: true,
            simplification: true,
            time_limit: None,
            random_seed: 0,
        }
    }
}

/// Activity rescaling bounds.
pub mod rescale {
    use super::Activity;

    /// Atom activities are rescaled when one passes this bound.
    pub const ATOM_ACTIVITY_MAX: Activity = 1e100;

    /// The factor applied to every atom activity on rescale.
    pub const ATOM_ACTIVITY_SCALE: Activity = 1e-100;

    /// Clause activities are rescaled when one passes this bound.
    pub const CLAUSE_ACTIVITY_MAX: Activity = 1e20;

    /// The factor applied to every clause activity on rescale.
    pub const CLAUSE_ACTIVITY_SCALE: Activity = 1e-20;
}
