//! Databases for holding information shared between the stages of a solve.
//!
//!   - [The atom database](crate::db::atom)
//!     + The names of atoms and the literals on each atom.
//!       Built while parsing, extended while compiling, and read (only) while solving.
//!   - [The trail](crate::db::trail)
//!     + The stack of decisions made during a solve, with the consequences of each decision.

pub mod atom;
pub mod trail;
