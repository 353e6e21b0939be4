//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! The same literal may appear in a clause more than once, and order is kept as given.
//!
//! ```rust
//! # use formula_sat::structures::literal::{CLiteral, Literal};
//! # use formula_sat::structures::clause::{Clause, ClauseValue};
//! let clause = vec![CLiteral::new(0, true),
//!                   CLiteral::new(1, false),
//!                   CLiteral::new(2, false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "(0|!1|!2)");
//!
//! let mut valuation = vec![Some(false), Some(true), None];
//! assert_eq!(clause.value_on(&valuation), ClauseValue::Unit(CLiteral::new(2, false)));
//!
//! valuation[2] = Some(false);
//! assert_eq!(clause.value_on(&valuation), ClauseValue::True);
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::{
    db::atom::AtomDB,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The value of a clause on some (partial) valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseValue {
    /// Some literal of the clause is satisfied.
    True,

    /// Every literal of the clause is falsified.
    False,

    /// Exactly one distinct literal of the clause has no value and every other literal is falsified.
    /// The literal is forced, however many times it appears.
    Unit(CLiteral),

    /// At least two distinct literals have no value and no literal is satisfied.
    /// The first literal without a value is kept, as a candidate for a decision.
    Undefined(CLiteral),
}

/// The clause trait.
pub trait Clause {
    /// A string of the clause with atoms written as their (internal) indicies, e.g. `(0|!1)`.
    fn as_string(&self) -> String;

    /// A string of the clause with atoms written using the external representations in the given atom database, e.g. `(p|!q)`.
    fn as_named_string(&self, atom_db: &AtomDB) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The value of the clause on the given valuation.
    ///
    /// Any satisfied literal makes the clause true, regardless of where it appears.
    fn value_on(&self, valuation: &impl Valuation) -> ClauseValue;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        let literals = self.iter().map(|literal| literal.to_string());
        format!("({})", literals.collect::<Vec<_>>().join("|"))
    }

    fn as_named_string(&self, atom_db: &AtomDB) -> String {
        let literals = self.iter().map(|literal| atom_db.literal_name(*literal));
        format!("({})", literals.collect::<Vec<_>>().join("|"))
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.iter() {
            the_string.push_str(&literal.as_dimacs());
            the_string.push(' ');
        }
        match zero {
            true => the_string += "0",
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn value_on(&self, valuation: &impl Valuation) -> ClauseValue {
        let mut first_undefined: Option<CLiteral> = None;
        let mut distinct = false;

        for literal in self.iter() {
            match valuation.literal_value(*literal) {
                Some(true) => return ClauseValue::True,
                Some(false) => {}
                None => match first_undefined {
                    None => first_undefined = Some(*literal),
                    Some(first) if first != *literal => distinct = true,
                    Some(_) => {}
                },
            }
        }

        match first_undefined {
            None => ClauseValue::False,
            Some(literal) if distinct => ClauseValue::Undefined(literal),
            Some(literal) => ClauseValue::Unit(literal),
        }
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }
}
