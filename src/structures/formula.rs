/*!
Formulas of propositional logic, as trees.

A formula is one of:
- A variable, identified by its [atom].
- The negation of some formula.
- Some binary connective applied to a pair of formulas.

Each node owns its children, and a formula is never mutated after construction.
Formulas are built by the [parser](crate::builder::parser) and read by the [compiler](crate::compile).

# Canonical strings

Every formula has a canonical string, in which every binary node is wrapped in parentheses and no whitespace appears:

| formula | canonical string |
|---|---|
| variable *p* | `p` |
| negation of *φ* | `!φ` |
| *φ* and *ψ* | `(φ&ψ)` |
| *φ* or *ψ* | `(φ\|ψ)` |
| *φ* implies *ψ* | `(φ->ψ)` |
| *φ* iff *ψ* | `(φ<->ψ)` |

Two formulas have the same canonical string exactly when they are the same tree (relative to some atom database), and the canonical string is used to name the auxiliary atom of a subformula during a [Tseitin transformation](crate::compile::tseitin).

```rust
# use formula_sat::builder::parser::parse;
let (formula, atom_db) = parse("!a & (b -> c) | a").result().unwrap();
assert_eq!(formula.as_string(&atom_db), "((!a&(b->c))|a)");
```

The canonical string of a formula parses to the same formula.
*/

use crate::{
    db::atom::AtomDB,
    structures::{atom::Atom, valuation::Valuation},
};

/// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Connective {
    And,
    Or,
    Imply,
    Equiv,
}

impl Connective {
    /// The symbol of the connective, as read by the parser.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Imply => "->",
            Self::Equiv => "<->",
        }
    }

    /// The name of the connective, as written in a parse tree.
    pub fn name(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Imply => "IMPLIES",
            Self::Equiv => "EQUIVALENT",
        }
    }

    /// The truth value of the connective applied to the given values.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Imply => !left || right,
            Self::Equiv => left == right,
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A formula, as a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// A variable.
    Variable(Atom),

    /// The negation of a formula.
    Negated(Box<Formula>),

    /// A binary connective applied to a pair of formulas.
    Binary {
        left: Box<Formula>,
        right: Box<Formula>,
        connective: Connective,
    },
}

impl Formula {
    pub fn variable(atom: Atom) -> Self {
        Formula::Variable(atom)
    }

    pub fn negated(formula: Formula) -> Self {
        Formula::Negated(Box::new(formula))
    }

    pub fn binary(left: Formula, right: Formula, connective: Connective) -> Self {
        Formula::Binary {
            left: Box::new(left),
            right: Box::new(right),
            connective,
        }
    }

    /// The canonical string of the formula, using the external representation of atoms from the given database.
    ///
    /// # Panics
    /// If some atom of the formula is not in the database.
    pub fn as_string(&self, atom_db: &AtomDB) -> String {
        let mut the_string = String::default();
        self.write_canonical(atom_db, &mut the_string);
        the_string
    }

    fn write_canonical(&self, atom_db: &AtomDB, buffer: &mut String) {
        match self {
            Formula::Variable(atom) => buffer.push_str(atom_db.name_of(*atom)),

            Formula::Negated(formula) => {
                buffer.push('!');
                formula.write_canonical(atom_db, buffer);
            }

            Formula::Binary {
                left,
                right,
                connective,
            } => {
                buffer.push('(');
                left.write_canonical(atom_db, buffer);
                buffer.push_str(connective.symbol());
                right.write_canonical(atom_db, buffer);
                buffer.push(')');
            }
        }
    }

    /// The parse tree of the formula, one node per line and indented by depth.
    ///
    /// A binary node is written between the subtrees of its operands, so the tree reads left to right when turned a quarter.
    ///
    /// ```rust
    /// # use formula_sat::builder::parser::parse;
    /// let (formula, atom_db) = parse("a & !b").result().unwrap();
    /// assert_eq!(formula.tree_string(&atom_db), "  a\nAND\n  NOT\n    b\n");
    /// ```
    pub fn tree_string(&self, atom_db: &AtomDB) -> String {
        let mut the_string = String::default();
        self.write_tree(atom_db, "", &mut the_string);
        the_string
    }

    fn write_tree(&self, atom_db: &AtomDB, prefix: &str, buffer: &mut String) {
        let deeper = format!("{prefix}  ");
        match self {
            Formula::Variable(atom) => {
                buffer.push_str(&format!("{prefix}{}\n", atom_db.name_of(*atom)));
            }

            Formula::Negated(formula) => {
                buffer.push_str(&format!("{prefix}NOT\n"));
                formula.write_tree(atom_db, &deeper, buffer);
            }

            Formula::Binary {
                left,
                right,
                connective,
            } => {
                left.write_tree(atom_db, &deeper, buffer);
                buffer.push_str(&format!("{prefix}{}\n", connective.name()));
                right.write_tree(atom_db, &deeper, buffer);
            }
        }
    }

    /// The truth value of the formula on some valuation, if every atom of the formula has a value.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Formula::Variable(atom) => valuation.value_of(*atom).flatten(),

            Formula::Negated(formula) => formula.evaluate(valuation).map(|value| !value),

            Formula::Binary {
                left,
                right,
                connective,
            } => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Some(connective.apply(left, right))
            }
        }
    }

    /// Moves the subformulas of the formula to the stack, leaving variables in their place.
    fn detach_subformulas(&mut self, stack: &mut Vec<Formula>) {
        match self {
            Formula::Variable(_) => {}

            Formula::Negated(formula) => {
                stack.push(std::mem::replace(&mut **formula, Formula::Variable(0)));
            }

            Formula::Binary { left, right, .. } => {
                stack.push(std::mem::replace(&mut **left, Formula::Variable(0)));
                stack.push(std::mem::replace(&mut **right, Formula::Variable(0)));
            }
        }
    }
}

/// Formulas are dropped with an explicit stack, as a parsed formula may be nested deeper than the call stack allows.
impl Drop for Formula {
    fn drop(&mut self) {
        let mut stack = Vec::default();
        self.detach_subformulas(&mut stack);
        while let Some(mut formula) = stack.pop() {
            formula.detach_subformulas(&mut stack);
        }
    }
}
