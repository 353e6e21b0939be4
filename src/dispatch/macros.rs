/*!
Macros for sending dispatches from a context.
*/

/// Sends a delta, if a dispatcher is present.
macro_rules! send_delta {
    ($self:ident, $delta:expr) => {
        if let Some(dispatcher) = &$self.dispatcher {
            dispatcher($crate::dispatch::Dispatch::Delta($delta));
        }
    };
}
pub(crate) use send_delta;

/// Sends the counters of a context as stats, if a dispatcher is present.
macro_rules! send_stats {
    ($self:ident) => {
        if let Some(dispatcher) = &$self.dispatcher {
            use $crate::dispatch::{library::stat::Stat, Dispatch};

            dispatcher(Dispatch::Stat(Stat::Iterations($self.counters.iterations)));
            dispatcher(Dispatch::Stat(Stat::Decisions($self.counters.decisions)));
            dispatcher(Dispatch::Stat(Stat::Propagations($self.counters.propagations)));
            dispatcher(Dispatch::Stat(Stat::Conflicts($self.counters.conflicts)));
            dispatcher(Dispatch::Stat(Stat::Time($self.counters.time)));
        }
    };
}
pub(crate) use send_stats;

/// Sends the report of a solve, followed by a finish, if a dispatcher is present.
macro_rules! send_finish {
    ($self:ident, $report:expr) => {
        if let Some(dispatcher) = &$self.dispatcher {
            use $crate::dispatch::{library::report::Report, Dispatch};

            dispatcher(Dispatch::Report(Report::Solve($report)));
            dispatcher(Dispatch::Report(Report::Finish));
        }
    };
}
pub(crate) use send_finish;
