/*!
Random formulas, written as text.

Two shapes of formula are supported:
- [cnf_formula] writes a conjunction of disjunctions of literals, with variables named by number, e.g. `(!3|0)&(7)`.
- [formula] writes an arbitrary fully parenthesised formula over some given count of variables, using every connective.

Both are generic over a source of [rng](rand::Rng), and so are repeatable given a seeded source.

```rust
# use formula_sat::builder::random::{cnf_formula, RandomBounds};
# use formula_sat::builder::parser::parse;
# use rand::{rngs::SmallRng, SeedableRng};
let mut rng = SmallRng::seed_from_u64(7);
let text = cnf_formula(&mut rng, &RandomBounds::default());
assert!(parse(&text).is_parsed());
```
*/

use rand::Rng;

/// Bounds on the size of a random CNF formula.
#[derive(Clone, Copy, Debug)]
pub struct RandomBounds {
    /// One more than the greatest count of variables.
    pub max_atoms: usize,

    /// The greatest count of clauses.
    pub max_clauses: usize,

    /// The greatest count of literals in a clause.
    pub max_literals: usize,
}

impl Default for RandomBounds {
    fn default() -> Self {
        RandomBounds {
            max_atoms: 20,
            max_clauses: 5,
            max_literals: 5,
        }
    }
}

/// A random formula in conjunctive normal form, as text.
///
/// Between two and `max_atoms - 1` variables are used, named by number from `0`.
///
/// # Panics
/// If `max_atoms` is less than three, or if either of `max_clauses` or `max_literals` is zero.
pub fn cnf_formula(rng: &mut impl Rng, bounds: &RandomBounds) -> String {
    let atom_count = rng.random_range(2..bounds.max_atoms);
    let clause_count = rng.random_range(1..=bounds.max_clauses);

    let mut clauses = Vec::with_capacity(clause_count);
    for _ in 0..clause_count {
        let literal_count = rng.random_range(1..=bounds.max_literals);
        let mut literals = Vec::with_capacity(literal_count);
        for _ in 0..literal_count {
            let atom = rng.random_range(0..atom_count);
            match rng.random_bool(0.5) {
                true => literals.push(format!("!{atom}")),
                false => literals.push(format!("{atom}")),
            }
        }
        clauses.push(format!("({})", literals.join("|")));
    }

    clauses.join("&")
}

/// A random, fully parenthesised, formula over variables `x0` to `x{atom_count - 1}` with at most `depth` nested connectives.
///
/// # Panics
/// If `atom_count` is zero.
pub fn formula(rng: &mut impl Rng, atom_count: usize, depth: usize) -> String {
    if depth == 0 || rng.random_bool(0.2) {
        return format!("x{}", rng.random_range(0..atom_count));
    }

    match rng.random_range(0..5) {
        0 => format!("!{}", formula(rng, atom_count, depth - 1)),
        connective => {
            let symbol = match connective {
                1 => "&",
                2 => "|",
                3 => "->",
                _ => "<->",
            };
            let left = formula(rng, atom_count, depth - 1);
            let right = formula(rng, atom_count, depth - 1);
            format!("({left}{symbol}{right})")
        }
    }
}
