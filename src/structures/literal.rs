//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! ```rust
//! # use formula_sat::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert!(literal.atom().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&CLiteral::new(79, !false)).is_eq());
//! ```
//!
//! # Literal pairs
//!
//! For every atom, the two literals on that atom are allocated once, as a [LiteralPair], and held by the [atom database](crate::db::atom).
//! Anywhere a literal on some atom is required, the literal is taken from the pair.
//! As a literal is a small copy type, clauses hold copies of the literals in the pair, and any two copies are equal.
//!
//! A pair may be [flipped](LiteralPair::flip), swapping the roles of the positive and negative literal.
//! This is used to read some template over literals [up to negation](crate::compile::tseitin).

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in DIMACS form, with atoms shifted up by one as DIMACS atoms begin at 1.
    fn as_dimacs(&self) -> String;
}

/// The canonical representation of a literal, as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn as_dimacs(&self) -> String {
        let dimacs_atom = self.atom as isize + 1;
        match self.polarity {
            true => format!("{dimacs_atom}"),
            false => format!("-{dimacs_atom}"),
        }
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "!{}", self.atom),
        }
    }
}

/// Both literals on some atom.
///
/// ```rust
/// # use formula_sat::structures::literal::{CLiteral, Literal, LiteralPair};
/// let mut pair = LiteralPair::from_atom(3);
/// assert_eq!(pair.positive, CLiteral::new(3, true));
///
/// pair.flip();
/// assert_eq!(pair.positive, CLiteral::new(3, false));
/// assert_eq!(pair.negative, CLiteral::new(3, true));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralPair {
    /// The literal read as asserting the atom.
    pub positive: CLiteral,

    /// The literal read as denying the atom.
    pub negative: CLiteral,
}

impl LiteralPair {
    /// The pair of literals on `atom`.
    pub fn from_atom(atom: Atom) -> Self {
        LiteralPair {
            positive: CLiteral::new(atom, true),
            negative: CLiteral::new(atom, false),
        }
    }

    /// Swaps the positive and negative literal of the pair.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.positive, &mut self.negative);
    }

    /// The pair, flipped.
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// The atom shared by both literals.
    pub fn atom(&self) -> Atom {
        self.positive.atom()
    }
}
