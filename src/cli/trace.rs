//! An indented trace of a solve, written as dispatches are received.
//!
//! Each decision (or flip of a decision) indents the trace, and each backtrack dedents the trace.

use std::{cell::RefCell, rc::Rc};

use formula_sat::{
    dispatch::{library::delta::Delta, Dispatch},
    structures::{
        clause::Clause,
        cnf::Cnf,
        literal::{CLiteral, Literal},
    },
};

fn assignment(literal: CLiteral) -> String {
    format!("{} <- {}", literal.atom(), literal.polarity())
}

/// A dispatcher which writes a line for each delta of a solve of the given CNF.
pub fn trace_dispatcher(cnf: Cnf) -> Rc<dyn Fn(Dispatch)> {
    let prefix = RefCell::new(String::default());

    Rc::new(move |dispatch: Dispatch| {
        let Dispatch::Delta(delta) = dispatch else {
            return;
        };

        let mut prefix = prefix.borrow_mut();
        match delta {
            Delta::Decide(literal) => {
                println!("{prefix}Decide {}", assignment(literal));
                prefix.push_str("  ");
            }

            Delta::Redecide(literal) => {
                println!("{prefix}Re-decide {}", assignment(literal));
                prefix.push_str("  ");
            }

            Delta::Propagate(literal, index) => {
                let clause = cnf.get(index).map(|clause| clause.as_string());
                println!(
                    "{prefix}Propagate {} {}",
                    assignment(literal),
                    clause.unwrap_or_default()
                );
            }

            Delta::Backtrack(conflict) => {
                match conflict.and_then(|index| cnf.get(index)) {
                    Some(clause) => println!("{prefix}Backtrack {}", clause.as_string()),
                    None => println!("{prefix}Backtrack"),
                }
                let keep = prefix.len().saturating_sub(2);
                prefix.truncate(keep);
            }
        }
    })
}
