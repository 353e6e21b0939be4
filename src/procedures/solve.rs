//! Determines the satisfiability of the CNF in a context.
//!
//! # Overview
//!
//! The solve is a DPLL search, as a loop over three procedures:
//!
//! - [propagate](crate::procedures::propagate) extends the valuation by unit clauses, or reports a conflict.
//! - [make_decision](crate::procedures::decision) values some atom which appears in a clause not yet true.
//! - [backtrack](crate::procedures::backtrack) flips the most recent decision not yet flipped, after a conflict.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |-----> satisfiable, if every clause is true
//!   |       +---------------+
//!   |               ⌃
//!   |               | if no conflict
//!   ⌄               |
//! --+-->+-----------+
//!   ⌃   | propagate |
//!   |   +-----------+
//!   |               |
//!   |               | if conflict
//!   |               ⌄
//!   |       +-----------+
//!   +-------| backtrack |-----> unsatisfiable, if no decision remains
//!           +-----------+
//! ```
//!
//! A false clause is a conflict whenever it is found, whether after a propagation or after a decision.
//! So, satisfiable is only reported when the valuation makes every clause true.
//!
//! Each procedure scans the clauses in order, and takes the first clause of interest.
//! So, the solve of a CNF (and every dispatch sent during the solve) is fixed by the CNF.
//!
//! The loop is interrupted if the [time limit](crate::config::Config::time_limit) or [decision limit](crate::config::Config::decision_limit) is exceeded.
//!
//! # Example
//!
//! ```rust
//! # use formula_sat::builder::parser::parse;
//! # use formula_sat::compile::compile;
//! # use formula_sat::config::Config;
//! # use formula_sat::context::Context;
//! # use formula_sat::dispatch::library::report;
//! let config = Config::default();
//!
//! let (formula, mut atom_db) = parse("a & !a").result().unwrap();
//! let compilation = compile(&formula, &mut atom_db, &config).unwrap();
//!
//! let mut the_context = Context::from_cnf(config, compilation.cnf).unwrap();
//! assert_eq!(the_context.solve(), Ok(report::Solve::Unsatisfiable));
//! ```

use crate::{
    context::{Context, ContextState},
    dispatch::{library::report, macros::{self}},
    misc::log::targets::{self},
    procedures::{backtrack::BacktrackOk, decision::DecisionOk},
    structures::{clause::Clause, cnf::CnfValue},
    types::err::{self},
};

impl Context {
    /// Solves the CNF of the context.
    ///
    /// A context supports a single solve, and any further call returns an error.
    pub fn solve(&mut self) -> Result<report::Solve, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveMade.into());
        }
        self.state = ContextState::Solving;

        let total_time = std::time::Instant::now();

        let result = match self.cnf.clauses().iter().position(|clause| clause.size() == 0) {
            Some(index) => {
                log::debug!(target: targets::SOLVE, "Clause {index} is empty");
                report::Solve::Unsatisfiable
            }

            None => self.search(total_time)?,
        };

        match result {
            report::Solve::Satisfiable => self.state = ContextState::Satisfiable,
            report::Solve::Unsatisfiable => self.state = ContextState::Unsatisfiable,
            report::Solve::TimeUp | report::Solve::Unknown => {}
        }

        self.counters.time = total_time.elapsed();
        log::debug!(target: targets::SOLVE, "{result} after {} decisions and {} conflicts", self.counters.decisions, self.counters.conflicts);

        macros::send_stats!(self);
        macros::send_finish!(self, result);
        Ok(result)
    }

    fn search(&mut self, total_time: std::time::Instant) -> Result<report::Solve, err::ErrorKind> {
        'solve_loop: loop {
            self.counters.iterations += 1;
            log::trace!(target: targets::SOLVE, "Iteration {}", self.counters.iterations);

            self.counters.time = total_time.elapsed();
            if self.counters.time > self.config.time_limit.value {
                return Ok(report::Solve::TimeUp);
            }

            if let Err(err::PropagationError::Conflict(_)) = self.propagate() {
                self.counters.conflicts += 1;

                match self.backtrack()? {
                    BacktrackOk::Flipped(_) => continue 'solve_loop,
                    BacktrackOk::Exhausted => return Ok(report::Solve::Unsatisfiable),
                }
            }

            match self.make_decision() {
                DecisionOk::Literal(_) => continue 'solve_loop,
                DecisionOk::Limit => return Ok(report::Solve::Unknown),
                DecisionOk::Exhausted => match self.cnf.value_on(&self.valuation) {
                    CnfValue::True => return Ok(report::Solve::Satisfiable),
                    CnfValue::False(_) => continue 'solve_loop,
                    CnfValue::Undefined => {
                        log::error!(target: targets::SOLVE, "No decision is possible, though some clause is not true");
                        return Err(err::ErrorKind::InvalidState);
                    }
                },
            }
        }
    }
}
