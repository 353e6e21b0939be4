/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are things with a name to which assigning a (boolean) value is of interest.
- 'External' atoms are the names read from a formula, a maximal run of ASCII letters and digits such as `p`, `x1`, or `96`.
- 'Auxiliary' atoms are minted during a [Tseitin transformation](crate::compile::tseitin) to stand for some compound subformula, and are named by the canonical print of that subformula, e.g. `(p&!q)`.

Each (internal) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for some *m*, and atoms may be used as the indicies of a structure without taking too much space.

```rust
# use formula_sat::structures::atom::Atom;
let m = 8;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&7));
```

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
