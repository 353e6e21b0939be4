/*!
Dispatches for external observers.

Dispatches have two uses:
- Communication after some procedure, e.g. a solve.
- Optional observation of the dynamics of a context during some procedure, e.g. to print a trace of a solve.

Each dispatch is a small message of some pre-determined type, and is sent through a callback held by the [context](crate::context::Context).
If no callback is set, no dispatch is built, and the overhead of a dispatch is a check on an optional.

Dispatches come in a few types:
- [Deltas](crate::dispatch::library::delta), on some change to the valuation during a solve.
  - For example, a decision, or a propagation from some clause.
- [Reports](crate::dispatch::library::report), on the result of a solve.
- [Stats](crate::dispatch::library::stat), on the counts kept during a solve.

# Example

Collecting the deltas of a solve.

```rust
# use std::{cell::RefCell, rc::Rc};
# use formula_sat::config::Config;
# use formula_sat::context::Context;
# use formula_sat::dispatch::{Dispatch, library::delta::Delta};
# use formula_sat::structures::cnf::Cnf;
# use formula_sat::structures::literal::{CLiteral, Literal};
let mut cnf = Cnf::new(2);
cnf.push(vec![CLiteral::new(0, true), CLiteral::new(1, true)]);
cnf.push(vec![CLiteral::new(0, false)]);

let mut the_context = Context::from_cnf(Config::default(), cnf).unwrap();

let deltas = Rc::new(RefCell::new(Vec::default()));
let sink = deltas.clone();
the_context.set_dispatcher(Some(Rc::new(move |dispatch: Dispatch| {
    if let Dispatch::Delta(delta) = dispatch {
        sink.borrow_mut().push(delta);
    }
})));

assert!(the_context.solve().is_ok());
assert_eq!(
    deltas.borrow().as_slice(),
    &[
        Delta::Propagate(CLiteral::new(0, false), 1),
        Delta::Propagate(CLiteral::new(1, true), 0),
    ]
);
```
*/

pub mod library;
pub(crate) mod macros;

use library::{delta::Delta, report::Report, stat::Stat};

/// Dispatch types.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// A change to the valuation, e.g. a decision.
    Delta(Delta),

    /// A report, e.g. that a formula is unsatisfiable.
    Report(Report),

    /// A statistic, e.g. the count of decisions made.
    Stat(Stat),
}
