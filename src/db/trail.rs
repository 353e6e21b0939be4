/*!
The trail of decisions made during a solve.

The trail is a stack of [DecisionFrame]s.
The bottom of the stack is a root frame, which has no decision and records the consequences of the formula alone.
Each other frame records a decision, whether the decision has been flipped, and the propagations which follow from the decision (on the valuation of the frames below).

```rust
# use formula_sat::db::trail::Trail;
# use formula_sat::structures::literal::{CLiteral, Literal};
let mut trail = Trail::default();
assert_eq!(trail.decision_count(), 0);

trail.push_decision(CLiteral::new(2, true));
trail.top_mut().note_propagation(CLiteral::new(0, false));

assert_eq!(trail.decision_count(), 1);
assert_eq!(trail.top().propagations().count(), 1);
```

Undoing a frame requires clearing the value of the decision and of each propagation, which is left to the [backtrack](crate::procedures::backtrack) procedure.
*/

use std::collections::BTreeSet;

use crate::structures::literal::{CLiteral, Literal};

/// A decision, and the consequences of the decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionFrame {
    /// The decision, as a literal, or None for the root frame.
    decision: Option<CLiteral>,

    /// Whether the polarity of the decision has been flipped.
    flipped: bool,

    /// The literals propagated from the decision, ordered by atom.
    propagations: BTreeSet<CLiteral>,
}

impl DecisionFrame {
    fn root() -> Self {
        DecisionFrame {
            decision: None,
            flipped: false,
            propagations: BTreeSet::default(),
        }
    }

    fn from_decision(decision: CLiteral) -> Self {
        DecisionFrame {
            decision: Some(decision),
            flipped: false,
            propagations: BTreeSet::default(),
        }
    }

    /// The decision of the frame, or None for the root frame.
    pub fn decision(&self) -> Option<CLiteral> {
        self.decision
    }

    /// Whether the decision of the frame has been flipped.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Records a propagation as a consequence of the decision.
    pub fn note_propagation(&mut self, literal: CLiteral) {
        self.propagations.insert(literal);
    }

    /// The propagations of the frame.
    pub fn propagations(&self) -> impl Iterator<Item = &CLiteral> {
        self.propagations.iter()
    }

    /// Negates the decision of the frame, notes the flip, and clears all propagations.
    ///
    /// Returns the flipped decision, if the frame is not the root.
    pub fn flip(&mut self) -> Option<CLiteral> {
        self.flipped = true;
        self.propagations.clear();
        self.decision = self.decision.map(|decision| decision.negate());
        self.decision
    }
}

/// The stack of decision frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trail {
    frames: Vec<DecisionFrame>,
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            frames: vec![DecisionFrame::root()],
        }
    }
}

impl Trail {
    /// A count of decisions on the trail, i.e. the count of frames excluding the root.
    pub fn decision_count(&self) -> usize {
        self.frames.len() - 1
    }

    /// Pushes a frame for a fresh decision.
    pub fn push_decision(&mut self, decision: CLiteral) {
        self.frames.push(DecisionFrame::from_decision(decision));
    }

    /// The top frame of the trail, which is the root frame if no decision has been made.
    pub fn top(&self) -> &DecisionFrame {
        // The root frame is never popped.
        &self.frames[self.frames.len() - 1]
    }

    /// The top frame of the trail, mutably.
    pub fn top_mut(&mut self) -> &mut DecisionFrame {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    /// Pops the top frame of the trail, unless the top frame is the root frame.
    pub fn pop_decision(&mut self) -> Option<DecisionFrame> {
        match self.frames.len() {
            1 => None,
            _ => self.frames.pop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_kept() {
        let mut trail = Trail::default();
        assert!(trail.pop_decision().is_none());
        assert_eq!(trail.decision_count(), 0);
        assert_eq!(trail.top().decision(), None);
    }

    #[test]
    fn flip_clears_propagations() {
        let mut trail = Trail::default();
        trail.push_decision(CLiteral::new(1, true));
        trail.top_mut().note_propagation(CLiteral::new(3, true));

        let flipped = trail.top_mut().flip();
        assert_eq!(flipped, Some(CLiteral::new(1, false)));
        assert!(trail.top().is_flipped());
        assert_eq!(trail.top().propagations().count(), 0);
    }
}
