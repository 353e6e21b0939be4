/*!
The context, within which a CNF is solved.

A context owns a CNF together with everything required to solve the CNF:
- A [valuation](crate::structures::valuation) over the atoms of the CNF.
- The [trail](crate::db::trail) of decisions made.
- [Counters] of decisions, propagations, etc.
- An optional dispatcher, to which [dispatches](crate::dispatch) are sent during a solve.

A context is made for a single solve.
After the solve, the result is available through [report](Context::report) and, if the CNF is satisfiable, a model is available through [model](Context::model).

# Example
```rust
# use formula_sat::config::Config;
# use formula_sat::context::Context;
# use formula_sat::dispatch::library::report;
# use formula_sat::structures::cnf::Cnf;
# use formula_sat::structures::literal::{CLiteral, Literal};
let mut cnf = Cnf::new(2);
cnf.push(vec![CLiteral::new(0, true), CLiteral::new(1, true)]);
cnf.push(vec![CLiteral::new(0, false)]);

let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();

assert_eq!(the_context.solve(), Ok(report::Solve::Satisfiable));
assert_eq!(the_context.report(), report::Solve::Satisfiable);
assert_eq!(the_context.model(), Ok(vec![false, true]));
```
*/

mod counters;
pub use counters::Counters;

use std::rc::Rc;

use crate::{
    config::Config,
    db::trail::Trail,
    dispatch::{library::report, Dispatch},
    structures::{
        atom::Atom,
        clause::Clause,
        cnf::Cnf,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context holds a CNF, and no solve has been made.
    Input,

    /// A solve is in progress, or ended without determining satisfiability.
    Solving,

    /// The CNF is satisfiable, on the valuation of the context.
    Satisfiable,

    /// The CNF is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The CNF to be solved.
    pub cnf: Cnf,

    /// The current valuation, indexed by atom.
    pub valuation: CValuation,

    /// The decisions made, and their consequences.
    pub trail: Trail,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// An optional function to send dispatches with.
    pub dispatcher: Option<Rc<dyn Fn(Dispatch)>>,
}

impl Context {
    /// Creates a context to solve the given CNF.
    ///
    /// Fails if some literal of the CNF has an atom not below the atom count of the CNF.
    pub fn from_cnf(config: Config, cnf: Cnf) -> Result<Self, err::ErrorKind> {
        let atom_count = cnf.atom_count();
        for (index, clause) in cnf.clauses().iter().enumerate() {
            if clause.atoms().any(|atom| atom as usize >= atom_count) {
                return Err(err::CnfError::AtomOutOfRange(index).into());
            }
        }

        Ok(Context {
            config,
            valuation: vec![None; atom_count],
            cnf,
            trail: Trail::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            dispatcher: None,
        })
    }

    /// Sets the dispatcher of the context, replacing any existing dispatcher.
    pub fn set_dispatcher(&mut self, dispatcher: Option<Rc<dyn Fn(Dispatch)>>) {
        self.dispatcher = dispatcher;
    }

    /// A report on the state of the context.
    pub fn report(&self) -> report::Solve {
        match self.state {
            ContextState::Input | ContextState::Solving => report::Solve::Unknown,
            ContextState::Satisfiable => report::Solve::Satisfiable,
            ContextState::Unsatisfiable => report::Solve::Unsatisfiable,
        }
    }

    /// A model of the CNF, as a value for each atom, if the CNF is known to be satisfiable.
    ///
    /// Any atom without a value after a solve is irrelevant to satisfiability, and is valued true.
    pub fn model(&self) -> Result<Vec<bool>, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable => {
                Ok(self.valuation.iter().map(|value| value.unwrap_or(true)).collect())
            }
            _ => Err(err::StateError::NotSatisfiable.into()),
        }
    }

    /// Values the atom of a literal so the literal is true.
    pub(crate) fn assign(&mut self, literal: CLiteral) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
    }

    /// Clears the value of an atom.
    pub(crate) fn unassign(&mut self, atom: Atom) {
        self.valuation[atom as usize] = None;
    }
}
