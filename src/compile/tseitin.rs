/*!
Lowering of an arbitrary formula to an equisatisfiable CNF.

# Overview

Each distinct compound subformula *φ* is represented by an auxiliary atom, named by the [canonical string](crate::structures::formula::Formula::as_string) of *φ*.
A variable is represented by its own atom.

For each compound subformula a [TseitinUnit] ties the representative of the subformula to the representatives of its immediate subformulas, with *A* and *B* the representatives of the operands and *C* the representative of the subformula.
Each unit expands to a handful of clauses, which together state *C* ⇔ *A* ∘ *B* (or *C* ⇔ ¬*A*).
The CNF is the expansion of each unit, followed by the unit clause of the representative of the whole formula.

Structurally identical subformulas share a name, and so share an atom and a unit.
So, in `(a&b)->(a&b)` the subformula `(a&b)` is represented once, and the units are:
- `(a&b)` from `a` and `b`.
- `((a&b)->(a&b))` from `(a&b)` and `(a&b)`.

# Order

Units are keyed by the atoms of their literals and a tag for the connective, and expanded in lexicographic order of the key.
As atoms are minted in a deterministic (post-order) walk of the formula, the CNF of a formula is fixed by the formula.

# Templates

Clause templates are written once for a conjunction and read [up to negation](LiteralPair::flip) for other connectives:
- *C* ⇔ (*A* ∨ *B*) is the conjunction template on ¬*A*, ¬*B*, ¬*C*.
- *C* ⇔ (*A* → *B*) is the disjunction template on ¬*A*, *B*, *C*.

The template for an equivalence is set by an [EquivTemplate].
*/

use std::collections::BTreeMap;

use crate::{
    config::EquivTemplate,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        cnf::Cnf,
        formula::{Connective, Formula},
        literal::LiteralPair,
    },
    types::err::{self},
};

/// An elementary equivalence between the representative of a compound subformula and the representatives of its immediate subformulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TseitinUnit {
    /// *C* ⇔ ¬*A*.
    Negation { a: LiteralPair, c: LiteralPair },

    /// *C* ⇔ *A* ∘ *B*, for ∘ the connective.
    Binary {
        a: LiteralPair,
        b: LiteralPair,
        c: LiteralPair,
        connective: Connective,
    },
}

impl TseitinUnit {
    /// The key of the unit, of the form `A;B;C;op` with each literal the positive literal of its pair.
    ///
    /// A negation has no second operand, and repeats *C* in its place.
    pub fn key(&self) -> String {
        match self {
            Self::Negation { a, c } => {
                format!("{};{};{};!", a.positive, c.positive, c.positive)
            }

            Self::Binary {
                a,
                b,
                c,
                connective,
            } => {
                let tag = match connective {
                    Connective::And => 0,
                    Connective::Or => 1,
                    Connective::Imply => 2,
                    Connective::Equiv => 3,
                };
                format!("{};{};{};{tag}", a.positive, b.positive, c.positive)
            }
        }
    }

    /// The clauses of the unit.
    pub fn clauses(&self, equiv_template: EquivTemplate) -> Vec<CClause> {
        match *self {
            Self::Negation { a, c } => vec![
                vec![a.negative, c.negative],
                vec![a.positive, c.positive],
            ],

            Self::Binary {
                a,
                b,
                c,
                connective,
            } => match connective {
                Connective::And => conjunction_template(a, b, c),

                Connective::Or => conjunction_template(a.flipped(), b.flipped(), c.flipped()),

                Connective::Imply => {
                    conjunction_template(a, b.flipped(), c.flipped())
                }

                Connective::Equiv => match equiv_template {
                    EquivTemplate::Direct => vec![
                        vec![a.negative, b.negative, c.positive],
                        vec![a.positive, b.positive, c.positive],
                        vec![a.positive, b.negative, c.negative],
                        vec![a.negative, b.positive, c.negative],
                    ],

                    EquivTemplate::Chained => vec![
                        vec![a.negative, b.positive],
                        vec![a.positive, b.negative],
                        vec![b.negative, c.positive],
                        vec![b.positive, c.negative],
                    ],
                },
            },
        }
    }
}

/// *C* ⇔ (*A* ∧ *B*).
fn conjunction_template(a: LiteralPair, b: LiteralPair, c: LiteralPair) -> Vec<CClause> {
    vec![
        vec![a.negative, b.negative, c.positive],
        vec![a.positive, c.negative],
        vec![b.positive, c.negative],
    ]
}

/// The units of a formula, keyed for expansion.
struct Transformer<'db> {
    atom_db: &'db mut AtomDB,

    units: BTreeMap<String, TseitinUnit>,
}

impl Transformer<'_> {
    /// The representative of a formula, together with the canonical string of the formula.
    ///
    /// Subformulas are represented before the formula, so the atom of any subformula is less than the atom of the formula.
    fn represent(&mut self, formula: &Formula) -> Result<(LiteralPair, String), err::AtomDBError> {
        match formula {
            Formula::Variable(atom) => Ok((
                self.atom_db.literals(*atom),
                self.atom_db.name_of(*atom).to_owned(),
            )),

            Formula::Negated(inner) => {
                let (a, inner_string) = self.represent(inner)?;
                let name = format!("!{inner_string}");
                let c = self.auxiliary(&name)?;

                self.note(TseitinUnit::Negation { a, c });
                Ok((c, name))
            }

            Formula::Binary {
                left,
                right,
                connective,
            } => {
                let (a, left_string) = self.represent(left)?;
                let (b, right_string) = self.represent(right)?;
                let name = format!("({left_string}{}{right_string})", connective.symbol());
                let c = self.auxiliary(&name)?;

                self.note(TseitinUnit::Binary {
                    a,
                    b,
                    c,
                    connective: *connective,
                });
                Ok((c, name))
            }
        }
    }

    fn auxiliary(&mut self, name: &str) -> Result<LiteralPair, err::AtomDBError> {
        let atom = self.atom_db.atom_or_fresh(name)?;
        Ok(self.atom_db.literals(atom))
    }

    fn note(&mut self, unit: TseitinUnit) {
        let key = unit.key();
        if !self.units.contains_key(&key) {
            log::trace!(target: targets::COMPILE, "Unit {key}");
            self.units.insert(key, unit);
        }
    }
}

/// The Tseitin transformation of a formula, with an auxiliary atom added to the atom database for each distinct compound subformula.
///
/// ```rust
/// # use formula_sat::builder::parser::parse;
/// # use formula_sat::compile::tseitin::transform;
/// # use formula_sat::config::EquivTemplate;
/// let (formula, mut atom_db) = parse("!a").result().unwrap();
/// let cnf = transform(&formula, &mut atom_db, EquivTemplate::Direct).unwrap();
///
/// assert_eq!(atom_db.mapping_string(), "0: a\n1: !a\n");
/// assert_eq!(cnf.as_string(), "(!0|!1)&(0|1)&(1)");
/// ```
pub fn transform(
    formula: &Formula,
    atom_db: &mut AtomDB,
    equiv_template: EquivTemplate,
) -> Result<Cnf, err::AtomDBError> {
    let mut transformer = Transformer {
        atom_db,
        units: BTreeMap::default(),
    };

    let (root, _) = transformer.represent(formula)?;

    let mut cnf = Cnf::default();
    for unit in transformer.units.values() {
        for clause in unit.clauses(equiv_template) {
            cnf.push(clause);
        }
    }
    cnf.push(vec![root.positive]);
    cnf.set_atom_count(transformer.atom_db.count());

    Ok(cnf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::parser::parse,
        structures::{
            atom::Atom,
            literal::{CLiteral, Literal},
        },
    };

    fn transformed(text: &str, equiv_template: EquivTemplate) -> (Cnf, AtomDB) {
        let (formula, mut atom_db) = parse(text).result().unwrap();
        let cnf = transform(&formula, &mut atom_db, equiv_template).unwrap();
        (cnf, atom_db)
    }

    #[test]
    fn variable_root() {
        let (cnf, atom_db) = transformed("p", EquivTemplate::Direct);
        assert_eq!(atom_db.count(), 1);
        assert_eq!(cnf.as_string(), "(0)");
    }

    #[test]
    fn conjunction() {
        let (cnf, atom_db) = transformed("a & b", EquivTemplate::Direct);
        assert_eq!(atom_db.atom_of("(a&b)"), Some(2));
        assert_eq!(cnf.as_string(), "(!0|!1|2)&(0|!2)&(1|!2)&(2)");
    }

    #[test]
    fn disjunction_and_implication() {
        let (cnf, _) = transformed("a | b", EquivTemplate::Direct);
        assert_eq!(cnf.as_string(), "(0|1|!2)&(!0|2)&(!1|2)&(2)");

        let (cnf, _) = transformed("a -> b", EquivTemplate::Direct);
        assert_eq!(cnf.as_string(), "(!0|1|!2)&(0|2)&(!1|2)&(2)");
    }

    #[test]
    fn shared_subformula() {
        let (cnf, atom_db) = transformed("(a & b) -> (a & b)", EquivTemplate::Direct);

        assert_eq!(atom_db.count(), 4);
        assert_eq!(atom_db.atom_of("(a&b)"), Some(2));
        assert_eq!(atom_db.atom_of("((a&b)->(a&b))"), Some(3));
        // One unit for the conjunction, one for the implication, and the root.
        assert_eq!(cnf.clauses().len(), 3 + 3 + 1);
        assert_eq!(cnf.clauses().last(), Some(&vec![CLiteral::new(3, true)]));
    }

    #[test]
    fn auxiliary_atoms_follow_subformulas() {
        let (_, atom_db) = transformed("!(a & b) | c", EquivTemplate::Direct);
        assert_eq!(
            atom_db.mapping_string(),
            "0: a\n1: b\n2: c\n3: (a&b)\n4: !(a&b)\n5: (!(a&b)|c)\n"
        );
    }

    #[test]
    fn keys_order_units() {
        // Atoms: a 0, b 1, !b 2, (a&!b) 3
        // Keys: "0;2;3;0" precedes "1;2;2;!"
        let (cnf, _) = transformed("a & !b", EquivTemplate::Direct);
        assert_eq!(cnf.as_string(), "(!0|!2|3)&(0|!3)&(2|!3)&(!1|!2)&(1|2)&(3)");
    }

    #[test]
    fn equivalence_templates() {
        let (direct, _) = transformed("a <-> b", EquivTemplate::Direct);
        assert_eq!(direct.as_string(), "(!0|!1|2)&(0|1|2)&(0|!1|!2)&(!0|1|!2)&(2)");

        let (chained, _) = transformed("a <-> b", EquivTemplate::Chained);
        assert_eq!(chained.as_string(), "(!0|1)&(0|!1)&(!1|2)&(1|!2)&(2)");
    }

    #[test]
    fn chained_equivalence_forces_agreement() {
        // !(a<->b) & a is satisfied by a true and b false.
        // The chained template forces a and b to agree regardless of the negation.
        let (formula, mut atom_db) = parse("!(a <-> b) & a").result().unwrap();
        let a: Atom = atom_db.atom_of("a").unwrap();
        let b: Atom = atom_db.atom_of("b").unwrap();
        let chained = transform(&formula, &mut atom_db, EquivTemplate::Chained).unwrap();

        let a_implies_b = vec![CLiteral::new(a, false), CLiteral::new(b, true)];
        assert!(chained.clauses().contains(&a_implies_b));

        let unsatisfiable = (0..1_usize << chained.atom_count()).all(|bits| {
            let model = (0..chained.atom_count())
                .map(|atom| bits & (1 << atom) != 0)
                .collect::<Vec<_>>();
            !chained.satisfied_by(&model)
        });
        assert!(unsatisfiable);

        let (formula, mut atom_db) = parse("!(a <-> b) & a").result().unwrap();
        let direct = transform(&formula, &mut atom_db, EquivTemplate::Direct).unwrap();
        // a b (a<->b) !(a<->b) (!(a<->b)&a)
        assert!(direct.satisfied_by(&[true, false, false, true, true]));
    }
}
