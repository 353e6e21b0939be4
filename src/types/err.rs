//! Error types used in the library.
//!
//! - Some of these are external, e.g. a [SyntaxError] in some formula given to the parser.
//! - Some of these are internally expected, e.g. a [PropagationError] is used to control the flow of a solve.
//! - Some of these are very unlikely to occur during use, e.g. atoms being exhausted.
//!
//! Unsatisfiability is not an error, and is instead [reported](crate::dispatch::library::report::Solve).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::cnf::ClauseIndex;

/// The union of all errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Cnf(CnfError),
    Parse(ParseError),
    Propagation(PropagationError),
    State(StateError),

    /// Some invariant was found to fail.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::Cnf(e) => write!(f, "CNF error: {e:?}"),
            Self::Parse(ParseError::Syntax(e)) => write!(f, "{e}"),
            Self::Propagation(e) => write!(f, "Propagation error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when loading a CNF into a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CnfError {
    /// The clause at the index contains a literal whose atom is not below the atom count of the CNF.
    AtomOutOfRange(ClauseIndex),
}

impl From<CnfError> for ErrorKind {
    fn from(e: CnfError) -> Self {
        ErrorKind::Cnf(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some formula is malformed.
    Syntax(SyntaxError),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Parse(ParseError::Syntax(e))
    }
}

/// What the parser expected to find, in place of what was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expected {
    /// A variable, a negation, or an opening parenthesis.
    Expression,

    /// A binary connective, or a closing parenthesis.
    BinaryOperator,

    /// The given character.
    Character(char),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression => write!(f, "an expression"),
            Self::BinaryOperator => write!(f, "a binary operator"),
            Self::Character(c) => write!(f, "'{c}'"),
        }
    }
}

/// A malformed formula, noted by the (byte) position at which the parse failed and what was expected at that position.
///
/// The position may be the length of the formula, if the formula ended early.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// The byte offset at which the parse failed.
    pub position: usize,

    /// What was expected at the position.
    pub expected: Expected,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Syntax error at position {}, expected {}",
            self.position, self.expected
        )
    }
}

/// Noted errors during unit propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// A conflict was found, with the clause at the index false.
    /// This is expected from time to time, and leads to a backtrack.
    Conflict(ClauseIndex),
}

impl From<PropagationError> for ErrorKind {
    fn from(e: PropagationError) -> Self {
        ErrorKind::Propagation(e)
    }
}

/// Errors from some request not supported by the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A solve has been made, and another may not be made on the same context.
    SolveMade,

    /// A model was requested, though the formula is not known to be satisfiable.
    NotSatisfiable,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
