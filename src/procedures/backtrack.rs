/*!
Chronological backtracking.

On a conflict, the most recent decision which has not been flipped is flipped, and any decision above is forgotten.

In detail, while some decision remains on the [trail](crate::db::trail):
- If the decision of the top frame has not been flipped, the propagations of the frame are undone and the decision is flipped.
  The flipped decision is valued, and the backtrack is complete.
- Otherwise, both values of the decision have been tried, so the decision and the propagations of the frame are undone and the frame is popped.

If no decision remains every valuation has been tried, and the CNF is unsatisfiable.

Propagations of the root frame are consequences of the CNF alone, and are never undone.
*/

use crate::{
    context::Context,
    dispatch::{library::delta::Delta, macros::{self}},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Possible 'Ok' results from a backtrack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BacktrackOk {
    /// The decision was flipped, and the flipped decision is valued.
    Flipped(CLiteral),

    /// No decision remains to be flipped.
    Exhausted,
}

impl Context {
    /// Backtracks to the most recent decision which has not been flipped, and flips the decision.
    pub fn backtrack(&mut self) -> Result<BacktrackOk, err::ErrorKind> {
        while self.trail.decision_count() > 0 {
            if !self.trail.top().is_flipped() {
                let undone = self.trail.top().propagations().copied().collect::<Vec<_>>();
                for literal in undone {
                    self.unassign(literal.atom());
                }

                let Some(flipped) = self.trail.top_mut().flip() else {
                    log::error!(target: targets::BACKTRACK, "Decision frame without a decision");
                    return Err(err::ErrorKind::InvalidState);
                };

                log::trace!(target: targets::BACKTRACK, "Flipped to {flipped}");
                self.assign(flipped);
                self.counters.decisions += 1;
                macros::send_delta!(self, Delta::Redecide(flipped));

                return Ok(BacktrackOk::Flipped(flipped));
            }

            macros::send_delta!(self, Delta::Backtrack(None));
            if let Some(frame) = self.trail.pop_decision() {
                log::trace!(target: targets::BACKTRACK, "Forgot {:?}", frame.decision());
                for literal in frame.propagations() {
                    self.unassign(literal.atom());
                }
                if let Some(decision) = frame.decision() {
                    self.unassign(decision.atom());
                }
            }
        }

        log::trace!(target: targets::BACKTRACK, "Decisions exhausted");
        Ok(BacktrackOk::Exhausted)
    }
}
