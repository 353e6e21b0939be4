//! Procedures for solving the CNF of a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod backtrack;
pub mod decision;
pub mod propagate;
pub mod solve;
