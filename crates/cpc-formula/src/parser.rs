//! Recursive-descent parser: Portuguese sentence → propositional formula.
//!
//! Grammar, loosest tier first:
//!
//! ```text
//! sentence    := disjunction "se e somente se" disjunction
//!              | … "se" disjunction ("então" | "entao") disjunction
//!              | disjunction
//! disjunction := conjunction ("ou" conjunction)*
//! conjunction := atom (("e" | "mas" | ",") atom)*
//! atom        := ["¬" | "não"] clause
//! ```
//!
//! Each tier recognizes exactly one family of connective words, so only flat
//! sentences are supported. Negation belongs to the atom and never spans a
//! conjunction or disjunction.

use cpc_core::context::ParseContext;
use tracing::{debug, trace};

use crate::lexer::{Token, TokenKind, join_tokens, source_text, tokenize};
use crate::types::{Formula, TranslateError, Translation};

const BICONDITIONAL: [&str; 4] = ["se", "e", "somente", "se"];
const IF: &str = "se";
const THEN: &[&str] = &["então", "entao"];
const OR: &str = "ou";
const AND: &[&str] = &["e", "mas"];
const NEGATION: &[&str] = &["não", "nao"];

/// Translates `text` into a formula and the mapping of the variables it
/// introduced.
///
/// Every call starts from a fresh [`ParseContext`], so the first clause of
/// every sentence is always `P`.
pub fn parse_sentence(text: &str) -> Result<Translation, TranslateError> {
    let source = text.trim();
    if source.is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let tokens = tokenize(source);
    let mut parser = SentenceParser {
        source,
        ctx: ParseContext::new(),
    };
    let formula = parser.sentence(&tokens)?;
    debug!(%formula, propositions = parser.ctx.mapping().len(), "parsed sentence");

    Ok(Translation {
        formula,
        mapping: parser.ctx.into_mapping(),
    })
}

struct SentenceParser<'s> {
    source: &'s str,
    ctx: ParseContext,
}

impl SentenceParser<'_> {
    fn sentence(&mut self, tokens: &[Token<'_>]) -> Result<Formula, TranslateError> {
        if let Some(at) = find_biconditional(tokens) {
            debug!("biconditional sentence");
            let left = self.disjunction(&tokens[..at])?;
            let right = self.disjunction(&tokens[at + BICONDITIONAL.len()..])?;
            return Ok(Formula::iff(left, right));
        }

        let has_if = tokens.iter().any(|t| t.is_word(IF));
        let has_then = tokens.iter().any(|t| t.is_any_word(THEN));
        if has_if && has_then {
            let (antecedent, consequent) =
                split_implication(tokens).ok_or(TranslateError::UnparsableImplication)?;
            debug!("conditional sentence");
            let antecedent = self.disjunction(antecedent)?;
            let consequent = self.disjunction(consequent)?;
            return Ok(Formula::implies(antecedent, consequent));
        }

        self.disjunction(tokens)
    }

    fn disjunction(&mut self, tokens: &[Token<'_>]) -> Result<Formula, TranslateError> {
        let parts = split_inner(tokens, |t| t.is_word(OR));
        if parts.len() == 1 {
            return self.conjunction(tokens);
        }
        let parts = self.non_empty(parts, tokens)?;
        trace!(parts = parts.len(), "disjunction");
        let subs = parts
            .into_iter()
            .map(|part| self.conjunction(part))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Formula::disjunction(subs))
    }

    fn conjunction(&mut self, tokens: &[Token<'_>]) -> Result<Formula, TranslateError> {
        let parts: Vec<_> = tokens
            .split(|t| t.kind == TokenKind::Comma || t.is_any_word(AND))
            .collect();
        if parts.len() == 1 {
            return self.atom(tokens);
        }
        let parts = self.non_empty(parts, tokens)?;
        trace!(parts = parts.len(), "conjunction");
        let subs = parts
            .into_iter()
            .map(|part| self.atom(part))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Formula::conjunction(subs))
    }

    fn atom(&mut self, tokens: &[Token<'_>]) -> Result<Formula, TranslateError> {
        let segment = source_text(self.source, tokens);
        let mut toks = tokens;

        while let [first, rest @ ..] = toks {
            if !first.is_clause_punct() {
                break;
            }
            toks = rest;
        }
        while let [rest @ .., last] = toks {
            if !last.is_clause_punct() {
                break;
            }
            toks = rest;
        }

        let mut negated = false;
        if let [first, rest @ ..] = toks {
            let leading = first.kind == TokenKind::Not || first.is_any_word(NEGATION);
            if leading && !rest.is_empty() {
                negated = true;
                toks = rest;
            }
        }

        // Negation words anywhere else in the clause; never toggles back.
        let kept: Vec<Token<'_>> = toks
            .iter()
            .filter(|t| !t.is_any_word(NEGATION))
            .copied()
            .collect();
        if kept.len() != toks.len() {
            negated = true;
        }

        let clause = join_tokens(&kept);
        if clause.is_empty() {
            return Err(TranslateError::EmptyClause(segment.to_string()));
        }

        let variable = self.ctx.resolve(&clause);
        trace!(%variable, clause = %clause, negated, "atom");

        let atom = Formula::atom(variable);
        Ok(if negated { atom.negate() } else { atom })
    }

    /// Drops empty runs left by leading, trailing or doubled separators.
    fn non_empty<'t, 'a>(
        &self,
        parts: Vec<&'t [Token<'a>]>,
        whole: &[Token<'_>],
    ) -> Result<Vec<&'t [Token<'a>]>, TranslateError> {
        let parts: Vec<_> = parts.into_iter().filter(|p| !p.is_empty()).collect();
        if parts.is_empty() {
            return Err(TranslateError::EmptyClause(
                source_text(self.source, whole).to_string(),
            ));
        }
        Ok(parts)
    }
}

/// Splits on separators that have a token on both sides; a leading or
/// trailing separator stays part of its clause.
fn split_inner<'t, 'a>(
    tokens: &'t [Token<'a>],
    is_separator: impl Fn(&Token<'a>) -> bool,
) -> Vec<&'t [Token<'a>]> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 && i + 1 < tokens.len() && is_separator(tok) {
            parts.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Index of the first `se e somente se`.
fn find_biconditional(tokens: &[Token<'_>]) -> Option<usize> {
    tokens.windows(BICONDITIONAL.len()).position(|window| {
        window
            .iter()
            .zip(BICONDITIONAL)
            .all(|(tok, word)| tok.is_word(word))
    })
}

/// Splits `… se A então C` into `(A, C)`.
///
/// Takes the first `se` followed by a non-empty antecedent, an `então` and a
/// non-empty consequent; the antecedent ends at the earliest such `então`.
fn split_implication<'t, 'a>(
    tokens: &'t [Token<'a>],
) -> Option<(&'t [Token<'a>], &'t [Token<'a>])> {
    for (i, tok) in tokens.iter().enumerate() {
        if !tok.is_word(IF) {
            continue;
        }
        for j in (i + 2)..tokens.len().saturating_sub(1) {
            if tokens[j].is_any_word(THEN) {
                return Some((&tokens[i + 1..j], &tokens[j + 1..]));
            }
        }
    }
    None
}
