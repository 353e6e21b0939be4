/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A map from external names to (internal) atoms, and the inverse map.
- The pair of literals on each atom.

Atoms are added in order, starting from 0, and are never removed.
So, the atoms in the database are always [0..*m*) where *m* is the [count](AtomDB::count) of atoms, and any atom has exactly one name.

The database is created empty by the [parser](crate::builder::parser), which adds an atom for each distinct variable.
The database is then passed to the [compiler](crate::compile), which may add an auxiliary atom for each distinct compound subformula.
After, only the count of atoms is needed for a solve.

```rust
# use formula_sat::db::atom::AtomDB;
let mut atom_db = AtomDB::default();
let p = atom_db.atom_or_fresh("p").unwrap();
let q = atom_db.atom_or_fresh("q").unwrap();

assert_eq!(atom_db.atom_or_fresh("p"), Ok(p));
assert_eq!(atom_db.name_of(q), "q");
assert_eq!(atom_db.count(), 2);
assert_eq!(atom_db.mapping_string(), "0: p\n1: q\n");
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal, LiteralPair},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// A map from the external representation of an atom to the atom.
    atom_map: HashMap<String, Atom>,

    /// The external representation of each atom, indexed by atom.
    names: Vec<String>,

    /// The literals on each atom, indexed by atom.
    literals: Vec<LiteralPair>,
}

impl AtomDB {
    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The atom with the given external representation, if one exists.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atom_map.get(name).copied()
    }

    /// The atom with the given external representation, with a fresh atom added if none exists.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        match self.atom_map.get(name) {
            Some(atom) => Ok(*atom),
            None => self.fresh_atom(name),
        }
    }

    /// A fresh atom with the given external representation.
    ///
    /// If the name is already in use the name is rebound to the fresh atom, though the previous atom keeps the name as its external representation.
    /// Use [atom_or_fresh](AtomDB::atom_or_fresh) to avoid this.
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::ATOM_DB, "Atoms exhausted at {name}");
                return Err(err::AtomDBError::AtomsExhausted);
            }
        };

        log::trace!(target: targets::ATOM_DB, "Atom {atom} is {name}");
        self.atom_map.insert(name.to_owned(), atom);
        self.names.push(name.to_owned());
        self.literals.push(LiteralPair::from_atom(atom));

        Ok(atom)
    }

    /// The external representation of an atom.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn name_of(&self, atom: Atom) -> &str {
        &self.names[atom as usize]
    }

    /// The external representation of a literal, e.g. `p` or `!p`.
    ///
    /// # Panics
    /// If the atom of the literal is not part of the database.
    pub fn literal_name(&self, literal: CLiteral) -> String {
        match literal.polarity() {
            true => self.name_of(literal.atom()).to_owned(),
            false => format!("!{}", self.name_of(literal.atom())),
        }
    }

    /// The pair of literals on an atom.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn literals(&self, atom: Atom) -> LiteralPair {
        self.literals[atom as usize]
    }

    /// Whether the atom was added to stand for some compound subformula.
    ///
    /// External names are alphanumeric, while the canonical string of a compound formula begins with `(` or `!`.
    pub fn is_auxiliary(&self, atom: Atom) -> bool {
        self.name_of(atom)
            .chars()
            .next()
            .is_some_and(|character| !character.is_ascii_alphanumeric())
    }

    /// An iterator through (Atom, name) pairs, in atom order.
    pub fn atom_name_pairs(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(atom, name)| (atom as Atom, name.as_str()))
    }

    /// The map from atoms to names, one atom per line, e.g. `0: p`.
    pub fn mapping_string(&self) -> String {
        let mut the_string = String::default();
        for (atom, name) in self.atom_name_pairs() {
            the_string.push_str(&format!("{atom}: {name}\n"));
        }
        the_string
    }
}
