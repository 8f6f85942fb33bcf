//! Formula tokenizer.
//!
//! Only enough structure to drive rendering: variables, connectives,
//! parentheses and whitespace are recognized, anything else passes through
//! as text. Ill-formed formulas are not rejected.

use cpc_core::variable::Variable;

use crate::types::Connective;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol<'a> {
    Variable(Variable),
    Connective(Connective),
    Open,
    Close,
    Space(&'a str),
    Text(&'a str),
}

/// Longest connective glyph or ASCII alias at the start of `rest`.
fn match_connective(rest: &str) -> Option<(Connective, usize)> {
    let mut best: Option<(Connective, usize)> = None;
    for conn in Connective::ALL {
        let spellings = std::iter::once(conn.glyph()).chain(conn.ascii_aliases().iter().copied());
        for spelling in spellings {
            if rest.starts_with(spelling) && best.is_none_or(|(_, len)| spelling.len() > len) {
                best = Some((conn, spelling.len()));
            }
        }
    }
    best
}

/// Splits a formula into symbols, keeping every input byte.
pub fn tokenize_formula(formula: &str) -> Vec<Symbol<'_>> {
    let mut symbols = Vec::new();
    let mut pos = 0;
    while let Some(c) = formula[pos..].chars().next() {
        let rest = &formula[pos..];
        let start = pos;

        if c.is_whitespace() {
            let len = rest
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(rest.len());
            symbols.push(Symbol::Space(&rest[..len]));
            pos += len;
            continue;
        }

        if let Some((conn, len)) = match_connective(rest) {
            symbols.push(Symbol::Connective(conn));
            pos += len;
            continue;
        }

        match c {
            '(' => {
                symbols.push(Symbol::Open);
                pos += 1;
            }
            ')' => {
                symbols.push(Symbol::Close);
                pos += 1;
            }
            c if c.is_ascii_uppercase() => {
                let digits = rest[1..]
                    .find(|ch: char| !ch.is_ascii_digit())
                    .unwrap_or(rest.len() - 1);
                let name = &rest[..1 + digits];
                // Shape is guaranteed by the scan above.
                if let Ok(var) = Variable::parse(name) {
                    symbols.push(Symbol::Variable(var));
                }
                pos += name.len();
            }
            _ => {
                pos += c.len_utf8();
                symbols.push(Symbol::Text(&formula[start..pos]));
            }
        }
    }
    symbols
}

/// Distinct variables of `formula`, in order of first appearance.
pub fn variables_in(formula: &str) -> Vec<Variable> {
    let mut out: Vec<Variable> = Vec::new();
    for symbol in tokenize_formula(formula) {
        if let Symbol::Variable(v) = symbol {
            if !out.contains(&v) {
                out.push(v);
            }
        }
    }
    out
}
