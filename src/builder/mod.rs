//! Tools for building formulas.
//!
//! - [parser] reads a formula from some text.
//! - [random] writes some random formula, as text, for the parser to read.
//!
//! ```rust
//! # use formula_sat::builder::parser::{parse, ParseOutcome};
//! match parse("p -> q") {
//!     ParseOutcome::Parsed(formula, atom_db) => assert_eq!(atom_db.count(), 2),
//!     ParseOutcome::SyntaxError(error) => panic!("{error}"),
//! }
//! ```

pub mod parser;
pub mod random;
