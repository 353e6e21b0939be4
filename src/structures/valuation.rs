/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'total', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, indexed by atom, where:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(𝐚) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(𝐚) = false.
-  *v*\[a\] = None *if any only if* 𝐯(𝐚) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use formula_sat::structures::valuation::Valuation;
# use formula_sat::structures::literal::{CLiteral, Literal};
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(9), None);

assert_eq!(valuation.literal_value(CLiteral::new(2, false)), Some(true));
assert_eq!(valuation.literal_value(CLiteral::new(3, false)), None);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// The value of a literal under the valuation: whether the literal is satisfied, falsified, or (None) neither.
    ///
    /// # Panics
    /// If the atom of the literal is not part of the valuation.
    fn literal_value(&self, literal: CLiteral) -> Option<bool>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self[literal.atom() as usize].map(|value| value == literal.polarity())
    }
}
