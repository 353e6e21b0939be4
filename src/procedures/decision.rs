/*!
Methods for choosing the value of an atom.

# Overview

The decision procedure is fixed, and so a solve is deterministic:
- Scan the clauses of the CNF, in order, for the first clause which is [undefined](crate::structures::clause::ClauseValue::Undefined).
- Decide the first undefined literal of the clause is true.

As decisions follow propagation to a fixpoint, no clause is unit when a decision is made.
So, if no clause is undefined then every clause is true, and the CNF is satisfied by the current valuation.
Still, the [solve](crate::procedures::solve) checks the value of the CNF before reporting satisfiable.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.
*/

use crate::{
    context::Context,
    dispatch::{library::delta::Delta, macros::{self}},
    misc::log::targets::{self},
    structures::{clause::{Clause, ClauseValue}, literal::CLiteral},
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// The literal was decided.
    Literal(CLiteral),

    /// No clause is undefined, so no decision is required.
    Exhausted,

    /// A decision is required, though the decision limit has been reached.
    Limit,
}

impl Context {
    /// Makes a decision, on the first undefined literal of the first undefined clause.
    pub fn make_decision(&mut self) -> DecisionOk {
        let Some(decision) = self.first_undefined() else {
            return DecisionOk::Exhausted;
        };

        if self.counters.decisions >= self.config.decision_limit.value {
            log::debug!(target: targets::DECISION, "Decision limit reached");
            return DecisionOk::Limit;
        }

        log::trace!(target: targets::DECISION, "Decided {decision}");
        self.trail.push_decision(decision);
        self.assign(decision);
        self.counters.decisions += 1;
        macros::send_delta!(self, Delta::Decide(decision));

        DecisionOk::Literal(decision)
    }

    fn first_undefined(&self) -> Option<CLiteral> {
        self.cnf
            .clauses()
            .iter()
            .find_map(|clause| match clause.value_on(&self.valuation) {
                ClauseValue::Undefined(literal) => Some(literal),
                _ => None,
            })
    }
}
