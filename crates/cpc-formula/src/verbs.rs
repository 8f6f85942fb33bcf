//! Verb detection used to place "não" when rendering a negated clause.
//!
//! This is a best-effort heuristic over a fixed word list: when no token of
//! a clause is recognized, the renderer falls back to appending "não".

/// Decides whether a clause token is the verb "não" should precede.
pub trait VerbDetector {
    fn is_verb(&self, token: &str) -> bool;
}

impl<F> VerbDetector for F
where
    F: Fn(&str) -> bool,
{
    fn is_verb(&self, token: &str) -> bool {
        self(token)
    }
}

const DEFAULT_SUFFIXES: &[&str] = &["ar", "er", "ir", "rá"];

const DEFAULT_FORMS: &[&str] = &[
    "está", "esta", "é", "foi", "vai", "fica", "ficará", "molhada", "chove", "chover", "fazer",
    "fará", "trabalha", "estuda", "corre", "salta", "colhe", "será", "terá", "serão", "terão",
];

/// Portuguese infinitive endings plus a list of common conjugated forms.
///
/// Endings are anchored at the end of the token. Forms match anywhere inside
/// it, so `estudam` and `ocorre` count through `estuda` and `corre`.
#[derive(Debug, Clone)]
pub struct PortugueseVerbs {
    suffixes: Vec<String>,
    forms: Vec<String>,
}

impl Default for PortugueseVerbs {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            forms: DEFAULT_FORMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PortugueseVerbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds extra endings and forms (matched case-insensitively).
    pub fn extend<S, F>(mut self, suffixes: S, forms: F) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        self.suffixes.extend(
            suffixes
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self.forms.extend(
            forms
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self
    }
}

impl VerbDetector for PortugueseVerbs {
    fn is_verb(&self, token: &str) -> bool {
        let word = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.suffixes.iter().any(|s| word.ends_with(s.as_str()))
            || self.forms.iter().any(|f| word.contains(f.as_str()))
    }
}

/// Inserts "não" before the first verb of `clause`, or appends it when no
/// verb is recognized. Tokens are rejoined with single spaces.
pub fn negate_clause(clause: &str, verbs: &dyn VerbDetector) -> String {
    let mut words: Vec<&str> = clause.split_whitespace().collect();
    match words.iter().position(|w| verbs.is_verb(w)) {
        Some(at) => words.insert(at, "não"),
        None => words.push("não"),
    }
    words.join(" ")
}
