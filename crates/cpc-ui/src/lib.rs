//! Terminal styling for the cpc translator.
//!
//! Provides Ayu-themed coloring of formulas and tables, and terminal
//! detection that honors `NO_COLOR`, `CLICOLOR` and the `--no-color` flag.

pub mod styles;
pub mod terminal;
