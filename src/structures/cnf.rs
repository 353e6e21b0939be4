/*!
Formulas in conjunctive normal form.

A [Cnf] is an ordered sequence of [clauses](crate::structures::clause), interpreted as the conjunction of those clauses, together with a count of the atoms the clauses are over.

The atom count is fixed when the CNF is built, and every literal of every clause has an atom below the count.
Though, as a CNF may be built by hand, this is checked when a CNF is [loaded into a context](crate::context::Context::from_cnf).

```rust
# use formula_sat::structures::cnf::{Cnf, CnfValue};
# use formula_sat::structures::literal::{CLiteral, Literal};
let mut cnf = Cnf::new(2);
cnf.push(vec![CLiteral::new(0, true), CLiteral::new(1, false)]);
cnf.push(vec![CLiteral::new(1, true)]);

assert_eq!(cnf.as_string(), "(0|!1)&(1)");
assert_eq!(cnf.value_on(&vec![None, Some(true)]), CnfValue::Undefined);
assert_eq!(cnf.value_on(&vec![Some(false), Some(true)]), CnfValue::False(0));
assert!(cnf.satisfied_by(&[true, true]));
```
*/

use crate::{
    db::atom::AtomDB,
    structures::{
        clause::{CClause, Clause, ClauseValue},
        valuation::Valuation,
    },
};

/// The index of a clause in a CNF.
pub type ClauseIndex = usize;

/// The value of a CNF on some (partial) valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CnfValue {
    /// Every clause is true.
    True,

    /// The clause at the index is false, and is a witness to the CNF being false.
    False(ClauseIndex),

    /// No clause is false, though some clause is not true.
    Undefined,
}

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    clauses: Vec<CClause>,

    atom_count: usize,
}

impl Cnf {
    /// An empty CNF over `atom_count` atoms.
    pub fn new(atom_count: usize) -> Self {
        Cnf {
            clauses: Vec::default(),
            atom_count,
        }
    }

    /// Appends a clause to the CNF.
    pub fn push(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    /// Sets the count of atoms the CNF is over.
    pub fn set_atom_count(&mut self, atom_count: usize) {
        self.atom_count = atom_count;
    }

    /// The count of atoms the CNF is over.
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// The clauses of the CNF, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The clause at the given index, if one exists.
    pub fn get(&self, index: ClauseIndex) -> Option<&CClause> {
        self.clauses.get(index)
    }

    /// The value of the CNF on the given valuation.
    ///
    /// The first false clause found is returned as a witness.
    pub fn value_on(&self, valuation: &impl Valuation) -> CnfValue {
        let mut all_true = true;
        for (index, clause) in self.clauses.iter().enumerate() {
            match clause.value_on(valuation) {
                ClauseValue::True => {}
                ClauseValue::False => return CnfValue::False(index),
                ClauseValue::Unit(_) | ClauseValue::Undefined(_) => all_true = false,
            }
        }
        match all_true {
            true => CnfValue::True,
            false => CnfValue::Undefined,
        }
    }

    /// Whether every clause is satisfied by the given total valuation.
    pub fn satisfied_by(&self, model: &[bool]) -> bool {
        let valuation = model.iter().map(|value| Some(*value)).collect::<Vec<_>>();
        self.value_on(&valuation) == CnfValue::True
    }

    /// A string of the CNF with atoms written as their indicies, e.g. `(0|!1)&(2)`.
    pub fn as_string(&self) -> String {
        let clauses = self.clauses.iter().map(|clause| clause.as_string());
        clauses.collect::<Vec<_>>().join("&")
    }

    /// A string of the CNF with atoms written using the external representations of the given atom database.
    pub fn as_named_string(&self, atom_db: &AtomDB) -> String {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.as_named_string(atom_db));
        clauses.collect::<Vec<_>>().join("&")
    }

    /// The CNF in DIMACS form, including the problem line.
    ///
    /// ```rust
    /// # use formula_sat::structures::cnf::Cnf;
    /// # use formula_sat::structures::literal::{CLiteral, Literal};
    /// let mut cnf = Cnf::new(2);
    /// cnf.push(vec![CLiteral::new(0, true), CLiteral::new(1, false)]);
    /// assert_eq!(cnf.as_dimacs(), "p cnf 2 1\n1 -2 0\n");
    /// ```
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.atom_count, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}

impl std::fmt::Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
