//! Direct recognition of formulas in conjunctive normal form.
//!
//! A formula is recognised if it is a conjunction of disjunctions of literals, where:
//! - A literal is a variable, or the negation of a variable.
//! - A disjunction is a literal, or an `|` of disjunctions.
//! - A conjunction is a disjunction, or an `&` of conjunctions.
//!
//! Any other formula is not recognised, e.g. any formula with `->`, `<->`, a double negation, or a conjunction inside a disjunction.
//! This is not an error, and a formula which is not recognised may be [transformed](crate::compile::tseitin) instead.
//!
//! Recognition adds no atoms, and clauses are read in the order they appear in the formula.
//!
//! ```rust
//! # use formula_sat::builder::parser::parse;
//! # use formula_sat::compile::direct::recognise;
//! let (formula, atom_db) = parse("(a | !b) & c").result().unwrap();
//! let cnf = recognise(&formula, &atom_db).unwrap();
//! assert_eq!(cnf.as_named_string(&atom_db), "(a|!b)&(c)");
//!
//! let (formula, atom_db) = parse("a | (b & c)").result().unwrap();
//! assert!(recognise(&formula, &atom_db).is_none());
//! ```

use crate::{
    db::atom::AtomDB,
    structures::{
        clause::CClause,
        cnf::Cnf,
        formula::{Connective, Formula},
        literal::CLiteral,
    },
};

/// The CNF read directly from a formula, if the formula is a conjunction of disjunctions of literals.
pub fn recognise(formula: &Formula, atom_db: &AtomDB) -> Option<Cnf> {
    let mut cnf = Cnf::new(atom_db.count());
    read_conjunction(formula, atom_db, &mut cnf)?;
    Some(cnf)
}

fn read_conjunction(formula: &Formula, atom_db: &AtomDB, cnf: &mut Cnf) -> Option<()> {
    match formula {
        Formula::Binary {
            left,
            right,
            connective: Connective::And,
        } => {
            read_conjunction(left, atom_db, cnf)?;
            read_conjunction(right, atom_db, cnf)
        }

        _ => {
            let mut clause = CClause::default();
            read_disjunction(formula, atom_db, &mut clause)?;
            cnf.push(clause);
            Some(())
        }
    }
}

fn read_disjunction(formula: &Formula, atom_db: &AtomDB, clause: &mut CClause) -> Option<()> {
    match formula {
        Formula::Binary {
            left,
            right,
            connective: Connective::Or,
        } => {
            read_disjunction(left, atom_db, clause)?;
            read_disjunction(right, atom_db, clause)
        }

        _ => {
            clause.push(read_literal(formula, atom_db)?);
            Some(())
        }
    }
}

fn read_literal(formula: &Formula, atom_db: &AtomDB) -> Option<CLiteral> {
    match formula {
        Formula::Variable(atom) => Some(atom_db.literals(*atom).positive),

        Formula::Negated(inner) => match **inner {
            Formula::Variable(atom) => Some(atom_db.literals(atom).negative),
            _ => None,
        },

        Formula::Binary { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parser::parse;

    fn recognised(text: &str) -> Option<String> {
        let (formula, atom_db) = parse(text).result().unwrap();
        recognise(&formula, &atom_db).map(|cnf| cnf.as_named_string(&atom_db))
    }

    #[test]
    fn shapes() {
        assert_eq!(recognised("a"), Some("(a)".to_string()));
        assert_eq!(recognised("!a"), Some("(!a)".to_string()));
        assert_eq!(recognised("a & b"), Some("(a)&(b)".to_string()));
        assert_eq!(recognised("a | b | !c"), Some("(a|b|!c)".to_string()));
        assert_eq!(recognised("(a | b) & (!a | c) & d"), Some("(a|b)&(!a|c)&(d)".to_string()));
    }

    #[test]
    fn left_associative_reading() {
        // Read as ((a | b) & c).
        assert_eq!(recognised("a | b & c"), Some("(a|b)&(c)".to_string()));
        assert_eq!(recognised("a & b | c"), None);
    }

    #[test]
    fn refusals() {
        assert_eq!(recognised("!!a"), None);
        assert_eq!(recognised("a -> b"), None);
        assert_eq!(recognised("a <-> b"), None);
        assert_eq!(recognised("a | (b & c)"), None);
        assert_eq!(recognised("(a & b) | c"), None);
        assert_eq!(recognised("!(a | b)"), None);
        assert_eq!(recognised("a & (b -> c)"), None);
    }
}
