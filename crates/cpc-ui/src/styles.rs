//! Ayu color theme and styling functions for cpc output.
//!
//! Uses the Ayu Dark palette. Variables are the accent, connectives are
//! warm, clause text stays plain.
//! Color source: <https://github.com/ayu-theme/ayu-colors>

use cpc_core::variable::Variable;
use cpc_formula::symbols::{Symbol, tokenize_formula};
use cpc_formula::types::Connective;
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

/// Light horizontal rule used under table headers.
pub const SEPARATOR_CHAR: char = '\u{2500}'; // ─

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// A muted rule `width` columns wide.
pub fn render_separator(width: usize) -> String {
    render_muted(&SEPARATOR_CHAR.to_string().repeat(width))
}

/// `Error:` in red followed by the message.
pub fn render_error(message: &str) -> String {
    format!("{} {message}", color_bold_str("Error:", FAIL))
}

// ---------------------------------------------------------------------------
// Formula styling
// ---------------------------------------------------------------------------

pub fn render_variable(variable: &Variable) -> String {
    color_bold_str(variable.as_str(), ACCENT)
}

pub fn render_connective(connective: Connective) -> String {
    color_str(connective.glyph(), WARN)
}

/// Colors the variables and connectives of a formula.
///
/// ASCII aliases are shown as their glyphs; everything else is kept as
/// written.
pub fn style_formula(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len());
    for symbol in tokenize_formula(formula) {
        match symbol {
            Symbol::Variable(v) => out.push_str(&render_variable(&v)),
            Symbol::Connective(c) => out.push_str(&render_connective(c)),
            Symbol::Open => out.push('('),
            Symbol::Close => out.push(')'),
            Symbol::Space(s) | Symbol::Text(s) => out.push_str(s),
        }
    }
    out
}
