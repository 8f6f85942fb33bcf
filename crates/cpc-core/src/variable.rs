//! Propositional variables and the allocator that names them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter alphabet in allocation order: starts at `P`, wraps through `A..O`.
const ALPHABET: &[u8; 26] = b"PQRSTUVWXYZABCDEFGHIJKLMNO";

/// Errors produced when reading a variable name from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariableError {
    #[error("invalid propositional variable '{0}': expected an uppercase letter with an optional numeric suffix")]
    Invalid(String),
}

/// A propositional variable such as `P`, `Q` or `P1`.
///
/// Always one ASCII uppercase letter followed by zero or more ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Variable(String);

impl Variable {
    /// Validates `name` and wraps it.
    pub fn parse(name: &str) -> Result<Self, VariableError> {
        if Self::is_valid_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(VariableError::Invalid(name.to_string()))
        }
    }

    /// Returns `true` if `name` has the shape `[A-Z][0-9]*`.
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Variable {
    type Err = VariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Variable {
    type Error = VariableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid_name(&value) {
            Ok(Self(value))
        } else {
            Err(VariableError::Invalid(value))
        }
    }
}

impl From<Variable> for String {
    fn from(value: Variable) -> Self {
        value.0
    }
}

/// Hands out fresh variables in a fixed order: `P, Q, …, Z, A, …, O`, then
/// `P1, Q1, …`, then `P2, …`.
///
/// One allocator lives for exactly one parse; there is no reset.
#[derive(Debug, Default)]
pub struct LetterAllocator {
    counter: usize,
}

impl LetterAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next fresh variable.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Variable {
        let letter = ALPHABET[self.counter % ALPHABET.len()] as char;
        let round = self.counter / ALPHABET.len();
        self.counter += 1;

        let name = if round == 0 {
            letter.to_string()
        } else {
            format!("{}{}", letter, round)
        };
        Variable(name)
    }

    /// How many variables have been handed out so far.
    pub fn allocated(&self) -> usize {
        self.counter
    }
}
