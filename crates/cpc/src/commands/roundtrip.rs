//! `cpc roundtrip` -- parse a sentence, then render the formula back with
//! the mapping the parse produced.

use anyhow::Result;
use cpc_core::mapping::PropositionMapping;
use cpc_formula::parser::parse_sentence;
use cpc_formula::types::Formula;
use serde::Serialize;

use crate::cli::RoundtripArgs;
use crate::commands::parse::print_translation;
use crate::context::RuntimeContext;
use crate::output::output_json;

#[derive(Serialize)]
struct RoundtripView<'a> {
    input: &'a str,
    formula: &'a Formula,
    mapping: &'a PropositionMapping,
    sentence: &'a str,
}

/// Execute the `cpc roundtrip` command.
pub fn run(ctx: &RuntimeContext, args: &RoundtripArgs) -> Result<()> {
    let input = args.sentence.join(" ");
    let translation = parse_sentence(&input)?;

    let mut meanings = translation.mapping.clone();
    let rendering = ctx
        .renderer()
        .render(&translation.formula.to_string(), &mut meanings)?;

    if ctx.json {
        output_json(&RoundtripView {
            input: input.trim(),
            formula: &translation.formula,
            mapping: &translation.mapping,
            sentence: &rendering.sentence,
        });
    } else {
        print_translation(ctx, &translation);
        if !ctx.quiet {
            println!();
        }
        println!("{}", rendering.sentence);
    }

    Ok(())
}
