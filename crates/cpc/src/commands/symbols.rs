//! `cpc symbols` -- list the connectives and the sentence shapes understood.

use anyhow::Result;
use cpc_formula::types::{Connective, NEGATION_USAGE, SUPPORTED_SHAPES};
use serde::Serialize;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

#[derive(Serialize)]
struct SymbolView {
    name: &'static str,
    glyph: &'static str,
    ascii: Vec<&'static str>,
    word: &'static str,
}

fn symbol_views() -> Vec<SymbolView> {
    Connective::ALL
        .iter()
        .map(|c| SymbolView {
            name: c.name(),
            glyph: c.glyph(),
            ascii: c.ascii_aliases().to_vec(),
            word: c.word(),
        })
        .collect()
}

fn symbol_rows(views: &[SymbolView]) -> Vec<Vec<String>> {
    views
        .iter()
        .map(|v| {
            vec![
                v.name.to_string(),
                v.glyph.to_string(),
                v.ascii.join(" "),
                v.word.to_string(),
            ]
        })
        .collect()
}

/// Execute the `cpc symbols` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let views = symbol_views();

    if ctx.json {
        output_json(&views);
        return Ok(());
    }

    output_table(&["Connective", "Glyph", "ASCII", "Word"], &symbol_rows(&views));

    if !ctx.quiet {
        println!();
        println!("Sentences: {SUPPORTED_SHAPES}");
        println!("Negation: {NEGATION_USAGE}");
    }

    Ok(())
}
