//! A library for determining the satisfiability of propositional formulas.
//!
//! formula_sat reads a formula written with variables, negation, and the binary connectives `&`, `|`, `->`, and `<->`, compiles the formula to conjunctive normal form, and decides satisfiability of the result by a DPLL search.
//!
//! # Orientation
//!
//! A formula passes through three stages:
//!
//! 1. The [parser](crate::builder::parser) reads some text to a [formula](crate::structures::formula) tree, together with an [atom database](crate::db::atom) naming each variable.
//!    Or, reports the position of the first syntax error.
//! 2. The formula is [compiled](crate::compile) to a [CNF](crate::structures::cnf).
//!    Either the formula is already a conjunction of clauses and is read directly, or a Tseitin transformation adds an auxiliary atom for each distinct compound subformula.
//! 3. The CNF is loaded into a [context], and the context is [solved](crate::procedures::solve).
//!
//! Every stage is deterministic, and the same text always leads to the same CNF, the same search, and the same model.
//!
//! Useful starting points, then, may be:
//! - The [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [Tseitin transformation](crate::compile::tseitin) to inspect the shape of a compiled CNF.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Parse, compile, and solve a formula, and check the model against the formula.
//!
//! ```rust
//! # use formula_sat::builder::parser::parse;
//! # use formula_sat::compile::compile;
//! # use formula_sat::config::Config;
//! # use formula_sat::context::Context;
//! # use formula_sat::dispatch::library::report::{self};
//! let config = Config::default();
//!
//! let (formula, mut atom_db) = parse("(p -> q) & p").result().unwrap();
//! let source_atoms = atom_db.count();
//!
//! let compilation = compile(&formula, &mut atom_db, &config).unwrap();
//! let mut the_context = Context::from_cnf(config, compilation.cnf).unwrap();
//!
//! assert_eq!(the_context.solve(), Ok(report::Solve::Satisfiable));
//!
//! let model = the_context.model().unwrap();
//! let source_valuation = model[..source_atoms].iter().map(|v| Some(*v)).collect::<Vec<_>>();
//! assert_eq!(formula.evaluate(&source_valuation), Some(true));
//! ```
//!
//! + Report a syntax error.
//!
//! ```rust
//! # use formula_sat::builder::parser::{parse, ParseOutcome};
//! # use formula_sat::types::err::Expected;
//! match parse("a & (b | c") {
//!     ParseOutcome::SyntaxError(error) => {
//!         assert_eq!(error.position, 10);
//!         assert_eq!(error.expected, Expected::Character(')'));
//!     }
//!     ParseOutcome::Parsed(..) => panic!("unbalanced parentheses"),
//! }
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macros are made throughout the library, with targets listed in [misc::log::targets].
//! No logger is installed by the library.

pub mod builder;
pub mod compile;
pub mod config;
pub mod context;
pub mod db;
pub mod dispatch;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
