//! Key structures, such as literals, clauses, and formulas.
//!
//! Some structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Formulas, two ways
//!
//! A [formula](formula) is a tree over atoms built from negation and binary connectives, as read from some text.
//!
//! A [CNF](cnf) is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals).
//! Any formula may be lowered to a CNF which is satisfiable exactly when the formula is, see [compile](crate::compile).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things.
//! Typically the first of the pair is identified as [true] and the second as [false].
//! During a solve an atom may also lack a value, and so values are often optional, see [valuation].

pub mod atom;
pub mod clause;
pub mod cnf;
pub mod formula;
pub mod literal;
pub mod valuation;
