/*!
Details on some change to the valuation during a solve.
*/
use crate::structures::{cnf::ClauseIndex, literal::CLiteral};

/// Changes to the valuation of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta {
    /// The literal was decided.
    Decide(CLiteral),

    /// The literal was decided, as the flip of an earlier decision which led to a conflict.
    Redecide(CLiteral),

    /// The literal is about to be valued, as the clause at the index is unit.
    Propagate(CLiteral, ClauseIndex),

    /// A backtrack, due to the clause at the index being false, or otherwise from a decision whose flip led to a conflict.
    Backtrack(Option<ClauseIndex>),
}
