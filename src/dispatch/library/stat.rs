//! Statistics regarding a solve.
use std::time::Duration;

/// Dispatches containing statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    /// The count of iterations made.
    Iterations(usize),

    /// The count of decisions made, including flipped decisions.
    Decisions(usize),

    /// The count of literals propagated.
    Propagations(usize),

    /// The count of conflicts seen.
    Conflicts(usize),

    /// The time elapsed.
    Time(Duration),
}
