//! Sentence tokenizer.
//!
//! Splits a Portuguese sentence into words, commas, negation symbols and
//! other punctuation. Every token borrows its text from the input and keeps
//! its byte span, so clause text can be rebuilt with the original spelling.

/// Kind of a sentence token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters and digits, with inner `-` or `'` (e.g. `guarda-chuva`).
    Word,
    /// `,`
    Comma,
    /// `¬`
    Not,
    /// Any other non-space character.
    Punct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    /// Case-insensitive comparison against a lowercase keyword.
    pub fn is_word(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && self.text.to_lowercase() == keyword
    }

    /// `true` if this is any of the given lowercase keywords.
    pub fn is_any_word(&self, keywords: &[&str]) -> bool {
        self.kind == TokenKind::Word && {
            let lower = self.text.to_lowercase();
            keywords.iter().any(|k| *k == lower)
        }
    }

    /// `true` for one of the characters that may trail or lead a clause.
    pub fn is_clause_punct(&self) -> bool {
        matches!(self.kind, TokenKind::Comma | TokenKind::Punct)
            && matches!(self.text, "." | "," | "!" | "?")
    }
}

/// Characters allowed inside a word when surrounded by letters or digits.
fn is_joiner(c: char) -> bool {
    matches!(c, '-' | '\'' | '’')
}

/// Byte offset one past the word starting at `start`.
fn scan_word(input: &str, start: usize) -> usize {
    let mut end = start;
    let mut chars = input[start..].char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        let joins = is_joiner(c) && chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric());
        if c.is_alphanumeric() || joins {
            end = start + offset + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

/// Tokenizes `input`. Whitespace is dropped; it survives only as gaps
/// between token spans.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(c) = input[pos..].chars().next() {
        let start = pos;
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }
        let (kind, end) = if c.is_alphanumeric() {
            (TokenKind::Word, scan_word(input, start))
        } else if c == ',' {
            (TokenKind::Comma, start + 1)
        } else if c == '¬' {
            (TokenKind::Not, start + c.len_utf8())
        } else {
            (TokenKind::Punct, start + c.len_utf8())
        };
        tokens.push(Token {
            kind,
            text: &input[start..end],
            start,
            end,
        });
        pos = end;
    }
    tokens
}

/// Rebuilds text from tokens, writing one space wherever the source had a
/// gap between consecutive tokens.
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut prev_end: Option<usize> = None;
    for tok in tokens {
        if let Some(end) = prev_end {
            if tok.start > end {
                out.push(' ');
            }
        }
        out.push_str(tok.text);
        prev_end = Some(tok.end);
    }
    out
}

/// The untouched source text covered by `tokens`.
pub fn source_text<'a>(input: &'a str, tokens: &[Token<'_>]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => &input[first.start..last.end],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds_and_texts(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize(input).iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn words_keep_diacritics() {
        assert_eq!(
            kinds_and_texts("João não está"),
            vec![
                (TokenKind::Word, "João"),
                (TokenKind::Word, "não"),
                (TokenKind::Word, "está"),
            ]
        );
    }

    #[test]
    fn commas_negation_and_punctuation() {
        assert_eq!(
            kinds_and_texts("¬chove, neva!"),
            vec![
                (TokenKind::Not, "¬"),
                (TokenKind::Word, "chove"),
                (TokenKind::Comma, ","),
                (TokenKind::Word, "neva"),
                (TokenKind::Punct, "!"),
            ]
        );
    }

    #[test]
    fn inner_hyphen_and_apostrophe_stay_in_word() {
        assert_eq!(
            kinds_and_texts("guarda-chuva d'água -"),
            vec![
                (TokenKind::Word, "guarda-chuva"),
                (TokenKind::Word, "d'água"),
                (TokenKind::Punct, "-"),
            ]
        );
    }

    #[test]
    fn spans_point_into_source() {
        let input = "  a  grama ";
        let toks = tokenize(input);
        assert_eq!(toks[0].start, 2);
        assert_eq!(&input[toks[1].start..toks[1].end], "grama");
        assert_eq!(source_text(input, &toks), "a  grama");
    }

    #[test]
    fn join_collapses_gaps_to_one_space() {
        let input = "a   grama  fica molhada!";
        let toks = tokenize(input);
        assert_eq!(join_tokens(&toks), "a grama fica molhada!");
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let toks = tokenize("NÃO Ou se");
        assert!(toks[0].is_word("não"));
        assert!(toks[1].is_word("ou"));
        assert!(toks[2].is_any_word(&["se", "então"]));
        assert!(!toks[2].is_word("ou"));
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }
}
