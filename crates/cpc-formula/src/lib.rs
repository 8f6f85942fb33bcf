//! Translation engine between Portuguese sentences and propositional formulas.
//!
//! Forward direction: [`parser::parse_sentence`] tokenizes a flat sentence and
//! descends through the fixed connective tiers (biconditional/implication,
//! disjunction, conjunction, atom), allocating one variable per distinct
//! clause. Reverse direction: [`render::render_formula`] substitutes clause
//! texts for the variables of a formula and spells the connectives out.

pub mod lexer;
pub mod parser;
pub mod render;
pub mod symbols;
pub mod types;
pub mod verbs;
