/*!
Unit propagation.

# Overview

Propagation repeatedly scans the clauses of the CNF, in order, for the first clause which is [unit](crate::structures::clause::ClauseValue::Unit) on the current valuation, and values the atom of the unit literal so the literal is true.
The CNF is checked for a false clause before the first propagation, as a decision may falsify a clause, and after each propagation.

- If some clause is false, every propagation made during the call is undone and the index of the false clause is returned as a conflict.
- Otherwise, when no clause is unit, every propagation made during the call is recorded in the top frame of the trail.

So, a call to propagate either extends the valuation to a fixpoint with no false clause, or leaves the valuation as it was.

Propagation is made by linear scans rather than by watched literals.
*/

use crate::{
    context::Context,
    dispatch::{library::delta::Delta, macros::{self}},
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseValue},
        cnf::{ClauseIndex, CnfValue},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl Context {
    /// Propagates unit clauses to a fixpoint, or until a conflict is found.
    pub fn propagate(&mut self) -> Result<(), err::PropagationError> {
        let mut propagated: Vec<CLiteral> = Vec::default();

        if let CnfValue::False(conflict) = self.cnf.value_on(&self.valuation) {
            log::trace!(target: targets::PROPAGATION, "Clause {conflict} is false before propagation");
            macros::send_delta!(self, Delta::Backtrack(Some(conflict)));
            return Err(err::PropagationError::Conflict(conflict));
        }

        while let Some((index, literal)) = self.first_unit() {
            log::trace!(target: targets::PROPAGATION, "Propagating {literal} from clause {index}");
            macros::send_delta!(self, Delta::Propagate(literal, index));

            self.assign(literal);
            self.counters.propagations += 1;
            propagated.push(literal);

            if let CnfValue::False(conflict) = self.cnf.value_on(&self.valuation) {
                log::trace!(target: targets::PROPAGATION, "Conflict at clause {conflict}");
                macros::send_delta!(self, Delta::Backtrack(Some(conflict)));

                for literal in propagated {
                    self.unassign(literal.atom());
                }
                return Err(err::PropagationError::Conflict(conflict));
            }
        }

        let top = self.trail.top_mut();
        for literal in propagated {
            top.note_propagation(literal);
        }
        Ok(())
    }

    /// The first unit clause on the current valuation, as its index and unit literal.
    fn first_unit(&self) -> Option<(ClauseIndex, CLiteral)> {
        self.cnf
            .clauses()
            .iter()
            .enumerate()
            .find_map(|(index, clause)| match clause.value_on(&self.valuation) {
                ClauseValue::Unit(literal) => Some((index, literal)),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, structures::cnf::Cnf};

    use super::*;

    fn literal(atom: u32, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn chain_is_recorded() {
        let mut cnf = Cnf::new(3);
        cnf.push(vec![literal(0, false), literal(1, true)]);
        cnf.push(vec![literal(1, false), literal(2, true)]);
        cnf.push(vec![literal(0, true)]);

        let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();
        assert_eq!(the_context.propagate(), Ok(()));

        assert_eq!(the_context.valuation, vec![Some(true), Some(true), Some(true)]);
        assert_eq!(the_context.trail.top().propagations().count(), 3);
        assert_eq!(the_context.counters.propagations, 3);
    }

    #[test]
    fn conflict_undoes_propagations() {
        let mut cnf = Cnf::new(2);
        cnf.push(vec![literal(0, true)]);
        cnf.push(vec![literal(0, false), literal(1, true)]);
        cnf.push(vec![literal(0, false), literal(1, false)]);

        let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();
        assert_eq!(
            the_context.propagate(),
            Err(err::PropagationError::Conflict(2))
        );

        assert_eq!(the_context.valuation, vec![None, None]);
        assert_eq!(the_context.trail.top().propagations().count(), 0);
    }

    #[test]
    fn false_clause_without_propagation() {
        let mut cnf = Cnf::new(2);
        cnf.push(vec![literal(0, true), literal(1, true)]);
        cnf.push(vec![literal(0, false), literal(0, false)]);

        let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();
        the_context.assign(literal(0, true));

        assert_eq!(
            the_context.propagate(),
            Err(err::PropagationError::Conflict(1))
        );
        assert_eq!(the_context.valuation, vec![Some(true), None]);
        assert_eq!(the_context.counters.propagations, 0);
    }

    #[test]
    fn repeated_literal_propagates() {
        let mut cnf = Cnf::new(1);
        cnf.push(vec![literal(0, true), literal(0, true)]);

        let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();
        assert_eq!(the_context.propagate(), Ok(()));
        assert_eq!(the_context.valuation, vec![Some(true)]);
    }
}
