//! Reverse translation: formula → Portuguese sentence.
//!
//! Rendering runs in two halves. First the distinct variables of the formula
//! are collected and a [`MeaningProvider`] is asked once for each; then
//! [`FormulaRenderer::render_with_meanings`] performs the substitution on the
//! formula's symbols. Callers with an asynchronous source of meanings can
//! gather them with [`variables_in`] and call the second half directly.

use std::collections::{BTreeMap, HashMap};

use cpc_core::mapping::{Proposition, PropositionMapping};
use cpc_core::variable::Variable;
use tracing::{debug, trace};

use crate::symbols::{Symbol, tokenize_formula, variables_in};
use crate::types::{Connective, Rendering, TranslateError};
use crate::verbs::{PortugueseVerbs, VerbDetector, negate_clause};

/// Supplies the clause text a variable stands for.
///
/// `None` (or blank text) means the caller gave no meaning.
pub trait MeaningProvider {
    fn meaning(&mut self, variable: &Variable) -> Option<String>;
}

impl MeaningProvider for PropositionMapping {
    fn meaning(&mut self, variable: &Variable) -> Option<String> {
        self.get(variable).map(str::to_string)
    }
}

impl MeaningProvider for HashMap<Variable, String> {
    fn meaning(&mut self, variable: &Variable) -> Option<String> {
        self.get(variable).cloned()
    }
}

impl MeaningProvider for BTreeMap<Variable, String> {
    fn meaning(&mut self, variable: &Variable) -> Option<String> {
        self.get(variable).cloned()
    }
}

/// Adapter turning a closure into a [`MeaningProvider`].
pub struct FromFn<F>(pub F);

impl<F> MeaningProvider for FromFn<F>
where
    F: FnMut(&Variable) -> Option<String>,
{
    fn meaning(&mut self, variable: &Variable) -> Option<String> {
        (self.0)(variable)
    }
}

/// Wraps a closure as a [`MeaningProvider`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&Variable) -> Option<String>,
{
    FromFn(f)
}

/// Renders with the default Portuguese verb heuristic.
pub fn render_formula<P>(formula: &str, provider: &mut P) -> Result<Rendering, TranslateError>
where
    P: MeaningProvider + ?Sized,
{
    FormulaRenderer::default().render(formula, provider)
}

/// Formula → sentence renderer with a pluggable verb heuristic.
pub struct FormulaRenderer {
    verbs: Box<dyn VerbDetector>,
}

impl Default for FormulaRenderer {
    fn default() -> Self {
        Self::new(PortugueseVerbs::default())
    }
}

impl FormulaRenderer {
    pub fn new(verbs: impl VerbDetector + 'static) -> Self {
        Self {
            verbs: Box::new(verbs),
        }
    }

    /// Queries `provider` once per distinct variable, then renders.
    pub fn render<P>(&self, formula: &str, provider: &mut P) -> Result<Rendering, TranslateError>
    where
        P: MeaningProvider + ?Sized,
    {
        if formula.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let variables = variables_in(formula);
        if variables.is_empty() {
            return Err(TranslateError::NoPropositionsFound);
        }
        debug!(count = variables.len(), "collected variables");

        let mut meanings = Vec::with_capacity(variables.len());
        for variable in variables {
            let clause = provider
                .meaning(&variable)
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .ok_or_else(|| TranslateError::MissingMeaning(variable.clone()))?;
            trace!(%variable, clause = %clause, "meaning");
            meanings.push(Proposition { variable, clause });
        }

        let sentence = self.render_with_meanings(formula, &meanings)?;
        Ok(Rendering { sentence, meanings })
    }

    /// Substitutes `meanings` into `formula` and spells out the connectives.
    ///
    /// Parentheses are dropped, so grouping is not reflected in the sentence.
    /// Only the first implication is rewritten as `Se …, então …`.
    pub fn render_with_meanings(
        &self,
        formula: &str,
        meanings: &[Proposition],
    ) -> Result<String, TranslateError> {
        if formula.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let symbols: Vec<Symbol<'_>> = tokenize_formula(formula)
            .into_iter()
            .filter(|s| !matches!(s, Symbol::Open | Symbol::Close))
            .collect();

        let mut pieces: Vec<String> = Vec::with_capacity(symbols.len());
        let mut first_implication: Option<usize> = None;
        let mut iter = symbols.iter().peekable();
        while let Some(symbol) = iter.next() {
            let piece = match symbol {
                Symbol::Connective(Connective::Not) => {
                    match iter.next_if(|s| matches!(s, Symbol::Variable(_))) {
                        Some(Symbol::Variable(v)) => {
                            negate_clause(lookup(meanings, v)?, self.verbs.as_ref())
                        }
                        _ => Connective::Not.glyph().to_string(),
                    }
                }
                Symbol::Connective(Connective::Implies) => {
                    if first_implication.is_none() {
                        first_implication = Some(pieces.len());
                    }
                    format!(" {} ", Connective::Implies.word())
                }
                Symbol::Connective(conn) => format!(" {} ", conn.word()),
                Symbol::Variable(v) => lookup(meanings, v)?.to_string(),
                Symbol::Space(s) | Symbol::Text(s) => s.to_string(),
                Symbol::Open | Symbol::Close => continue,
            };
            pieces.push(piece);
        }

        let text = match first_implication {
            Some(at) => format!(
                "Se {}, {} {}",
                pieces[..at].concat().trim(),
                Connective::Implies.word(),
                pieces[at + 1..].concat()
            ),
            None => pieces.concat(),
        };

        Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

fn lookup<'m>(meanings: &'m [Proposition], variable: &Variable) -> Result<&'m str, TranslateError> {
    meanings
        .iter()
        .find(|p| p.variable == *variable)
        .map(|p| p.clause.as_str())
        .ok_or_else(|| TranslateError::MissingMeaning(variable.clone()))
}
