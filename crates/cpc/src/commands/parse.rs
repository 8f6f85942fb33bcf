//! `cpc parse` -- translate a Portuguese sentence into a formula.

use anyhow::Result;
use cpc_formula::parser::parse_sentence;
use cpc_formula::types::Translation;
use cpc_ui::styles::style_formula;

use crate::cli::ParseArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_propositions};

/// Execute the `cpc parse` command.
pub fn run(ctx: &RuntimeContext, args: &ParseArgs) -> Result<()> {
    let sentence = args.sentence.join(" ");
    let translation = parse_sentence(&sentence)?;

    if ctx.json {
        output_json(&translation);
    } else {
        print_translation(ctx, &translation);
    }

    Ok(())
}

/// Formula line, then the proposition table unless quiet.
pub fn print_translation(ctx: &RuntimeContext, translation: &Translation) {
    println!("{}", style_formula(&translation.formula.to_string()));
    if !ctx.quiet {
        println!();
        output_propositions(&translation.mapping);
    }
}
