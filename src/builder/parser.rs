/*!
A parser from text to [formulas](crate::structures::formula).

# Grammar

- A variable is a maximal run of ASCII letters and digits, e.g. `p`, `x1`, `42`.
- The binary connectives are `&` (and), `|` (or), `->` (implies), and `<->` (iff).
- Negation is `!`, and parentheses are `(` and `)`.
- Whitespace may appear between any tokens.

A formula is some (possibly empty) chain of negations applied to a variable or a parenthesised formula, optionally followed by a binary connective and a formula.

Negation binds tighter than any binary connective.
Though, binary connectives have no precedence among themselves and associate to the left.
So, `a & b | c` is read as `(a & b) | c` and `a -> b -> c` as `(a -> b) -> c`.

```rust
# use formula_sat::builder::parser::parse;
let (formula, atom_db) = parse("a & b | !!c").result().unwrap();
assert_eq!(formula.as_string(&atom_db), "((a&b)|!!c)");

let (formula, atom_db) = parse("a -> (b <-> c)").result().unwrap();
assert_eq!(formula.as_string(&atom_db), "(a->(b<->c))");
```

# Method

The parse is a single pass over the text with no recursion, and so deep nesting does not grow the call stack.

Nodes are written to an arena as they are read, and a stack of *records* notes where the next node read should be written.
Each record is a *slot* (the root, the operand of a negation, or the right operand of a binary node) paired with the depth of parentheses at which the record was made, and a flag for whether the record is *quick*.

- A negation writes a fresh negation node to the top slot, and pushes a quick record for the operand of the negation.
- A variable writes a variable node to the top slot, and then *closes*: quick records made at or above the current depth are popped, followed by at most one other record made at or above the current depth.
- An opening parenthesis increases the depth, and a closing parenthesis decreases the depth and then closes.
- A binary connective wraps the node in the top slot as the left operand of a fresh binary node, writes the binary node back to the same slot, and pushes a record for the right operand.

The parse begins with two records for the root.
And, as the record for the root is never popped after a variable, any connective at depth zero wraps the whole formula read so far --- this is what makes binary connectives associate to the left.

# Errors

The parse stops at the first error found, returning the position of the error and what was [expected](Expected) instead.

| situation | position | expected |
|---|---|---|
| something other than a variable, `!`, or `(` where an expression is required | the character | an expression |
| the text ends where an expression is required | the length of the text | an expression |
| something other than `)`, `&`, `\|`, `-`, or `<` after an operand | the character | a binary operator |
| `<` not followed by `-` | the character after `<` | `-` |
| `<-` not followed by `>` | the character after `-` | `>` |
| `-` not followed by `>` | the character after `-` | `>` |
| `)` without a matching `(` | the character before `)` | `(` |
| the text ends with some `(` unmatched | the length of the text | `)` |

```rust
# use formula_sat::builder::parser::{parse, ParseOutcome};
# use formula_sat::types::err::{Expected, SyntaxError};
let outcome = parse("(a");
assert_eq!(outcome, ParseOutcome::SyntaxError(SyntaxError { position: 2, expected: Expected::Character(')') }));
```
*/

use crate::{
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        formula::{Connective, Formula},
    },
    types::err::{self, Expected, SyntaxError},
};

/// The result of a parse: either a formula and the atoms of the formula, or a syntax error.
#[derive(Clone, Debug)]
pub enum ParseOutcome {
    /// The formula read, together with an atom database containing exactly the variables of the formula.
    Parsed(Formula, AtomDB),

    /// The formula was malformed.
    SyntaxError(SyntaxError),
}

impl ParseOutcome {
    /// The outcome as a result.
    pub fn result(self) -> Result<(Formula, AtomDB), SyntaxError> {
        match self {
            Self::Parsed(formula, atom_db) => Ok((formula, atom_db)),
            Self::SyntaxError(error) => Err(error),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(..))
    }
}

/// Outcomes are equal when the formulas are equal, regardless of the atom databases.
impl PartialEq for ParseOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Parsed(a, _), Self::Parsed(b, _)) => a == b,
            (Self::SyntaxError(a), Self::SyntaxError(b)) => a == b,
            _ => false,
        }
    }
}

/// Parses a formula from some text.
///
/// A fresh atom database is created, to which an atom is added for each distinct variable in the order the variables are first read.
pub fn parse(text: &str) -> ParseOutcome {
    let mut parser = Parser::new(text);
    match parser.read() {
        Ok(()) => {
            log::debug!(target: targets::PARSER, "Parsed {} nodes over {} atoms", parser.nodes.len(), parser.atom_db.count());
            let formula = parser.formula();
            ParseOutcome::Parsed(formula, parser.atom_db)
        }
        Err(error) => {
            log::debug!(target: targets::PARSER, "{error}");
            ParseOutcome::SyntaxError(error)
        }
    }
}

type NodeIndex = usize;

/// A node in the arena, with operands noted once read.
enum Node {
    Variable(Atom),
    Negated(Option<NodeIndex>),
    Binary {
        left: Option<NodeIndex>,
        right: Option<NodeIndex>,
        connective: Connective,
    },
}

/// A place to which a node may be written.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    NegatedOperand(NodeIndex),
    RightOperand(NodeIndex),
}

#[derive(Clone, Copy, Debug)]
struct Record {
    slot: Slot,
    depth: usize,
    quick: bool,
}

struct Parser<'t> {
    text: &'t str,
    nodes: Vec<Node>,
    root: Option<NodeIndex>,
    records: Vec<Record>,
    depth: usize,
    atom_db: AtomDB,
}

impl<'t> Parser<'t> {
    fn new(text: &'t str) -> Self {
        let kick_start = Record {
            slot: Slot::Root,
            depth: 0,
            quick: false,
        };
        Parser {
            text,
            nodes: Vec::default(),
            root: None,
            records: vec![kick_start, kick_start],
            depth: 0,
            atom_db: AtomDB::default(),
        }
    }

    fn top(&self) -> Record {
        match self.records.last() {
            Some(record) => *record,
            None => panic!("! Parse record stack exhausted"),
        }
    }

    fn fresh_node(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn read_slot(&self, slot: Slot) -> Option<NodeIndex> {
        match slot {
            Slot::Root => self.root,
            Slot::NegatedOperand(index) => match self.nodes[index] {
                Node::Negated(operand) => operand,
                _ => panic!("! Negation slot on a non-negation"),
            },
            Slot::RightOperand(index) => match self.nodes[index] {
                Node::Binary { right, .. } => right,
                _ => panic!("! Right operand slot on a non-binary"),
            },
        }
    }

    fn write_slot(&mut self, slot: Slot, node: NodeIndex) {
        match slot {
            Slot::Root => self.root = Some(node),
            Slot::NegatedOperand(index) => match &mut self.nodes[index] {
                Node::Negated(operand) => *operand = Some(node),
                _ => panic!("! Negation slot on a non-negation"),
            },
            Slot::RightOperand(index) => match &mut self.nodes[index] {
                Node::Binary { right, .. } => *right = Some(node),
                _ => panic!("! Right operand slot on a non-binary"),
            },
        }
    }

    /// Pops quick records made at or above the current depth, and then at most one other record made at or above the current depth.
    fn close(&mut self) {
        let mut record = self.top();
        while self.depth <= record.depth && record.quick {
            self.records.pop();
            record = self.top();
        }
        if self.depth <= record.depth {
            self.records.pop();
        }
    }

    fn read(&mut self) -> Result<(), SyntaxError> {
        let text = self.text;
        let bytes = text.as_bytes();
        let error = |position, expected| Err(SyntaxError { position, expected });

        let mut expect_expression = true;
        let mut index = 0;

        while index < bytes.len() {
            let byte = bytes[index];

            if byte.is_ascii_whitespace() {
                index += 1;
                continue;
            }

            if expect_expression {
                match byte {
                    b'!' => {
                        let slot = self.top().slot;
                        let negation = self.fresh_node(Node::Negated(None));
                        self.write_slot(slot, negation);
                        self.records.push(Record {
                            slot: Slot::NegatedOperand(negation),
                            depth: self.depth,
                            quick: true,
                        });
                    }

                    b'(' => self.depth += 1,

                    _ if byte.is_ascii_alphanumeric() => {
                        let end = bytes[index..]
                            .iter()
                            .position(|b| !b.is_ascii_alphanumeric())
                            .map_or(bytes.len(), |offset| index + offset);

                        let atom = match self.atom_db.atom_or_fresh(&text[index..end]) {
                            Ok(atom) => atom,
                            Err(err::AtomDBError::AtomsExhausted) => {
                                panic!("! Atoms exhausted while parsing")
                            }
                        };

                        let slot = self.top().slot;
                        let variable = self.fresh_node(Node::Variable(atom));
                        self.write_slot(slot, variable);
                        self.close();

                        expect_expression = false;
                        index = end;
                        continue;
                    }

                    _ => return error(index, Expected::Expression),
                }
            } else {
                let connective = match byte {
                    b')' => {
                        if self.depth == 0 {
                            return error(index.saturating_sub(1), Expected::Character('('));
                        }
                        self.depth -= 1;
                        self.close();

                        index += 1;
                        continue;
                    }

                    b'&' => Connective::And,

                    b'|' => Connective::Or,

                    b'<' => {
                        if bytes.get(index + 1) != Some(&b'-') {
                            return error(index + 1, Expected::Character('-'));
                        }
                        if bytes.get(index + 2) != Some(&b'>') {
                            return error(index + 2, Expected::Character('>'));
                        }
                        index += 2;
                        Connective::Equiv
                    }

                    b'-' => {
                        if bytes.get(index + 1) != Some(&b'>') {
                            return error(index + 1, Expected::Character('>'));
                        }
                        index += 1;
                        Connective::Imply
                    }

                    _ => return error(index, Expected::BinaryOperator),
                };

                let slot = self.top().slot;
                let left = self.read_slot(slot);
                let binary = self.fresh_node(Node::Binary {
                    left,
                    right: None,
                    connective,
                });
                self.write_slot(slot, binary);
                self.records.push(Record {
                    slot: Slot::RightOperand(binary),
                    depth: self.depth,
                    quick: false,
                });

                expect_expression = true;
            }

            index += 1;
        }

        if self.depth != 0 {
            return error(bytes.len(), Expected::Character(')'));
        }

        if expect_expression {
            return error(bytes.len(), Expected::Expression);
        }

        Ok(())
    }

    /// The formula read, built from the arena without recursion.
    ///
    /// # Panics
    /// If the read did not complete, as some node would be missing an operand.
    fn formula(&self) -> Formula {
        enum Visit {
            Enter(NodeIndex),
            Exit(NodeIndex),
        }

        let operand = |index: Option<NodeIndex>| match index {
            Some(index) => index,
            None => panic!("! Missing operand after a complete parse"),
        };

        let mut visits = vec![Visit::Enter(operand(self.root))];
        let mut built: Vec<Formula> = Vec::default();

        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(index) => match self.nodes[index] {
                    Node::Variable(atom) => built.push(Formula::Variable(atom)),

                    Node::Negated(inner) => {
                        visits.push(Visit::Exit(index));
                        visits.push(Visit::Enter(operand(inner)));
                    }

                    Node::Binary { left, right, .. } => {
                        visits.push(Visit::Exit(index));
                        visits.push(Visit::Enter(operand(right)));
                        visits.push(Visit::Enter(operand(left)));
                    }
                },

                Visit::Exit(index) => match self.nodes[index] {
                    Node::Variable(_) => {}

                    Node::Negated(_) => {
                        let Some(inner) = built.pop() else {
                            panic!("! Missing operand after a complete parse")
                        };
                        built.push(Formula::negated(inner));
                    }

                    Node::Binary { connective, .. } => {
                        let (Some(right), Some(left)) = (built.pop(), built.pop()) else {
                            panic!("! Missing operand after a complete parse")
                        };
                        built.push(Formula::binary(left, right, connective));
                    }
                },
            }
        }

        match built.pop() {
            Some(formula) => formula,
            None => panic!("! Empty formula after a complete parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_error(text: &str) -> SyntaxError {
        match parse(text) {
            ParseOutcome::SyntaxError(error) => error,
            ParseOutcome::Parsed(..) => panic!("{text} parsed"),
        }
    }

    #[test]
    fn kick_start_wraps_root() {
        let mut parser = Parser::new("a & b");
        assert!(parser.read().is_ok());
        assert_eq!(parser.records.len(), 1);
        assert_eq!(parser.nodes.len(), 3);
    }

    #[test]
    fn quick_records_close_chains() {
        let (formula, _) = parse("!!!x").result().unwrap();
        let expected = Formula::negated(Formula::negated(Formula::negated(Formula::variable(0))));
        assert_eq!(formula, expected);
    }

    #[test]
    fn deep_parentheses() {
        let depth = 100_000;
        let text = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        let (formula, _) = parse(&text).result().unwrap();
        assert_eq!(formula, Formula::variable(0));
    }

    #[test]
    fn deep_negation_reads() {
        let depth = 10_000;
        let text = format!("{}a", "!".repeat(depth));
        let mut parser = Parser::new(&text);
        assert!(parser.read().is_ok());
        assert_eq!(parser.nodes.len(), depth + 1);
    }

    #[test]
    fn deep_negation_parses_and_drops() {
        let text = format!("{}a", "!".repeat(200_000));
        let outcome = parse(&text);
        assert!(outcome.is_parsed());
        drop(outcome);
    }

    #[test]
    fn errors() {
        let expected = |position, expected| SyntaxError { position, expected };

        assert_eq!(syntax_error("a & &"), expected(4, Expected::Expression));
        assert_eq!(syntax_error("a b"), expected(2, Expected::BinaryOperator));
        assert_eq!(syntax_error("a <> b"), expected(3, Expected::Character('-')));
        assert_eq!(syntax_error("a<-b"), expected(3, Expected::Character('>')));
        assert_eq!(syntax_error("a - b"), expected(3, Expected::Character('>')));
        assert_eq!(syntax_error("a)"), expected(0, Expected::Character('(')));
        assert_eq!(syntax_error("((a)"), expected(4, Expected::Character(')')));
        assert_eq!(syntax_error(""), expected(0, Expected::Expression));
        assert_eq!(syntax_error("a |"), expected(3, Expected::Expression));
        assert_eq!(syntax_error("a<"), expected(2, Expected::Character('-')));
    }

    #[test]
    fn atoms_in_order_read() {
        let (_, atom_db) = parse("q & p | q").result().unwrap();
        assert_eq!(atom_db.count(), 2);
        assert_eq!(atom_db.name_of(0), "q");
        assert_eq!(atom_db.name_of(1), "p");
    }
}
