use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// The total number of iterations through a solve.
    pub iterations: usize,

    /// A count of all decisions made, including flips of earlier decisions.
    pub decisions: usize,

    /// A count of all literals propagated, including those later undone.
    pub propagations: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            iterations: 0,
            decisions: 0,
            propagations: 0,
            conflicts: 0,

            time: Duration::from_secs(0),
        }
    }
}
