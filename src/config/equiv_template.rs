use std::str::FromStr;

/// Variant clause templates for the [Tseitin unit](crate::compile::tseitin::TseitinUnit) of an equivalence.
///
/// For an equivalence *A* ⇔ *B* represented by *C*:
/// - [Direct](EquivTemplate::Direct) encodes *C* ⇔ (*A* ⇔ *B*), and preserves satisfiability in any context.
/// - [Chained](EquivTemplate::Chained) encodes *A* ⇔ *B* and *B* ⇔ *C*.
///   This forces the operands of the equivalence to agree wherever the equivalence appears, and so may turn a satisfiable formula with an equivalence under some negation into an unsatisfiable CNF.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EquivTemplate {
    Direct = 0,
    Chained,
}

impl EquivTemplate {
    /// The minimum EquivTemplate.
    pub const MIN: EquivTemplate = EquivTemplate::Direct;

    /// The maximum EquivTemplate.
    pub const MAX: EquivTemplate = EquivTemplate::Chained;
}

impl std::fmt::Display for EquivTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "Direct"),
            Self::Chained => write!(f, "Chained"),
        }
    }
}

impl FromStr for EquivTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Direct" => Ok(Self::Direct),

            "Chained" => Ok(Self::Chained),

            _unknown_string => Err(()),
        }
    }
}
