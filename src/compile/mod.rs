/*!
Compilation of a formula to a CNF.

Compilation is made in one of two ways:
- [Direct recognition](direct), if the formula is already a conjunction of disjunctions of literals.
  Here, the clauses are read off the formula and no atom is added.
- [Tseitin transformation](tseitin), otherwise.
  Here, an auxiliary atom is added for each distinct compound subformula, and the CNF is satisfiable exactly when the formula is.

Direct recognition may be disabled through [Config::direct_recognition], in which case every formula is transformed.

```rust
# use formula_sat::builder::parser::parse;
# use formula_sat::compile::{compile, Method};
# use formula_sat::config::Config;
let (formula, mut atom_db) = parse("a & (b | !c)").result().unwrap();
let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

assert_eq!(compilation.method, Method::Direct);
assert_eq!(compilation.cnf.as_named_string(&atom_db), "(a)&(b|!c)");

let (formula, mut atom_db) = parse("a -> b").result().unwrap();
let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

assert_eq!(compilation.method, Method::Tseitin);
assert_eq!(compilation.cnf.atom_count(), 3);
```
*/

pub mod direct;
pub mod tseitin;

use crate::{
    config::Config,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{cnf::Cnf, formula::Formula},
    types::err::{self},
};

/// The way in which a formula was compiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Direct,
    Tseitin,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct recognition"),
            Self::Tseitin => write!(f, "Tseitin transformation"),
        }
    }
}

/// A CNF compiled from some formula, noting how the CNF was compiled.
#[derive(Clone, Debug)]
pub struct Compilation {
    pub cnf: Cnf,
    pub method: Method,
}

/// Compiles a formula to a CNF, adding any auxiliary atoms to the given atom database.
///
/// The atom count of the CNF is the count of atoms in the database after compilation.
pub fn compile(
    formula: &Formula,
    atom_db: &mut AtomDB,
    config: &Config,
) -> Result<Compilation, err::ErrorKind> {
    let source_atoms = atom_db.count();

    if config.direct_recognition.value {
        if let Some(cnf) = direct::recognise(formula, atom_db) {
            log::debug!(target: targets::COMPILE, "Recognised {} clauses", cnf.clauses().len());
            return Ok(Compilation {
                cnf,
                method: Method::Direct,
            });
        }
    }

    let cnf = tseitin::transform(formula, atom_db, config.equiv_template.value)?;
    log::debug!(target: targets::COMPILE, "Transformed to {} clauses with {} auxiliary atoms", cnf.clauses().len(), atom_db.count() - source_atoms);

    Ok(Compilation {
        cnf,
        method: Method::Tseitin,
    })
}
