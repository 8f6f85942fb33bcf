//! Formula data model and translation errors.

use std::fmt;

use cpc_core::mapping::{Proposition, PropositionMapping};
use cpc_core::variable::Variable;
use serde::{Serialize, Serializer};

/// Sentence shapes the parser understands, quoted in error messages.
pub const SUPPORTED_SHAPES: &str = "'Se X então Y', 'X e Y', 'X ou Y', 'não X' or 'X ↔ Y'";

/// How negation must be written; a lone `não` has no clause to negate.
pub const NEGATION_USAGE: &str = "'não' must be followed by a clause, as in 'não X'";

/// A propositional connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    pub const ALL: [Connective; 5] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Implies,
        Connective::Iff,
    ];

    /// The Unicode glyph used in formulas.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "→",
            Self::Iff => "↔",
        }
    }

    /// ASCII spellings accepted in formula input.
    pub fn ascii_aliases(self) -> &'static [&'static str] {
        match self {
            Self::Not => &["~", "!"],
            Self::And => &["&"],
            Self::Or => &["|"],
            Self::Implies => &["->", "=>"],
            Self::Iff => &["<->", "<=>"],
        }
    }

    /// The Portuguese word (or phrase) the connective reads as.
    pub fn word(self) -> &'static str {
        match self {
            Self::Not => "não",
            Self::And => "e",
            Self::Or => "ou",
            Self::Implies => "então",
            Self::Iff => "se e somente se",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Not => "negation",
            Self::And => "conjunction",
            Self::Or => "disjunction",
            Self::Implies => "implication",
            Self::Iff => "biconditional",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A propositional formula over [`Variable`]s.
///
/// `And`/`Or` hold two or more operands when built through
/// [`Formula::conjunction`] and [`Formula::disjunction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Atom(Variable),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(variable: Variable) -> Self {
        Self::Atom(variable)
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Joins `parts` with `∧`; a single part is returned unchanged.
    pub fn conjunction(mut parts: Vec<Formula>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Self::And(parts)
        }
    }

    /// Joins `parts` with `∨`; a single part is returned unchanged.
    pub fn disjunction(mut parts: Vec<Formula>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Self::Or(parts)
        }
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Self::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Self::Iff(Box::new(left), Box::new(right))
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Formula], glyph: &str) -> fmt::Result {
    let grouped = parts.len() >= 2;
    if grouped {
        f.write_str("(")?;
    }
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", glyph)?;
        }
        write!(f, "{}", part)?;
    }
    if grouped {
        f.write_str(")")?;
    }
    Ok(())
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(v) => write!(f, "{}", v),
            Self::Not(inner) => write!(f, "¬{}", inner),
            Self::And(parts) => write_joined(f, parts, Connective::And.glyph()),
            Self::Or(parts) => write_joined(f, parts, Connective::Or.glyph()),
            Self::Implies(l, r) => write!(f, "{} → {}", l, r),
            Self::Iff(l, r) => write!(f, "{} ↔ {}", l, r),
        }
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of a forward translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub formula: Formula,
    pub mapping: PropositionMapping,
}

/// Result of a reverse translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub sentence: String,
    /// Meanings used for the substitution, in order of first appearance.
    pub meanings: Vec<Proposition>,
}

/// Errors produced by either translation direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("input is empty")]
    EmptyInput,

    #[error("no propositions found in formula")]
    NoPropositionsFound,

    #[error("no meaning given for {0}")]
    MissingMeaning(Variable),

    #[error(
        "could not parse the conditional sentence; use sentences like {shapes}",
        shapes = SUPPORTED_SHAPES
    )]
    UnparsableImplication,

    #[error(
        "clause is empty after removing negation and punctuation: '{0}'; {usage}",
        usage = NEGATION_USAGE
    )]
    EmptyClause(String),
}
