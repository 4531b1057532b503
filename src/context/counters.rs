use crate::generic::luby::Luby;

/// Counters over the life of a context.
///
/// Totals are never reset, so limits on a solve are phrased as absolute
/// ceilings against these counters.
#[derive(Debug)]
pub struct Counters {
    /// The total number of conflicts.
    pub total_conflicts: u64,

    /// The total number of decisions, random probes included.
    pub total_decisions: u64,

    /// The total number of propagated literals.
    pub total_propagations: u64,

    /// The total number of restarts, counting the first run of each solve.
    pub restarts: u64,

    /// The number of calls made to solve.
    pub solve_calls: u64,

    /// The Luby generator behind restart allowances.
    pub luby: Luby,

    /// The propagation head at the most recent level-zero simplification.
    pub simplification_watermark: usize,

    /// Propagations outstanding before the next level-zero simplification,
    /// decremented per propagated literal.
    pub simplification_countdown: i64,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            total_decisions: 0,
            total_propagations: 0,
            restarts: 0,
            solve_calls: 0,
            luby: Luby::default(),
            simplification_watermark: 0,
            simplification_countdown: 0,
        }
    }
}
