//! `cpc render` -- render a formula as a Portuguese sentence.
//!
//! Meanings are looked up, highest priority first, in the `--meaning`
//! flags, the `--meanings` file and the config `meanings` table. Whatever
//! is still missing is asked for on stdin unless `--no-prompt` is given.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use cpc_core::variable::Variable;
use cpc_formula::render::from_fn;
use cpc_formula::types::Rendering;
use serde::Serialize;
use tracing::debug;

use crate::cli::RenderArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

#[derive(Serialize)]
struct RenderView<'a> {
    formula: &'a str,
    #[serde(flatten)]
    rendering: &'a Rendering,
}

/// Execute the `cpc render` command.
pub fn run(ctx: &RuntimeContext, args: &RenderArgs) -> Result<()> {
    let formula = args.formula.join(" ");
    let known = known_meanings(ctx, args)?;
    debug!(known = known.len(), "meanings before prompting");

    let mut prompt_error: Option<io::Error> = None;
    let mut provider = from_fn(|variable: &Variable| {
        if let Some(meaning) = known.get(variable) {
            return Some(meaning.clone());
        }
        if args.no_prompt {
            return None;
        }
        match prompt_meaning(variable) {
            Ok(answer) => answer,
            Err(e) => {
                prompt_error = Some(e);
                None
            }
        }
    });
    let result = ctx.renderer().render(&formula, &mut provider);

    if let Some(e) = prompt_error {
        return Err(e).context("failed to read meaning from stdin");
    }
    let rendering = result?;

    if ctx.json {
        output_json(&RenderView {
            formula: &formula,
            rendering: &rendering,
        });
    } else {
        println!("{}", rendering.sentence);
    }

    Ok(())
}

/// Config table, then the meanings file, then `--meaning` flags.
fn known_meanings(ctx: &RuntimeContext, args: &RenderArgs) -> Result<BTreeMap<Variable, String>> {
    let mut known = ctx.config.meaning_table()?;
    if let Some(path) = &args.meanings_file {
        known.extend(load_meanings_file(path)?);
    }
    known.extend(args.meanings.iter().cloned());
    Ok(known)
}

/// Reads a `{variable: clause}` map from YAML, JSON or TOML, picked by
/// extension (YAML when there is none).
pub fn load_meanings_file(path: &Path) -> Result<BTreeMap<Variable, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read meanings file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let raw: BTreeMap<String, String> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?,
    };

    let mut meanings = BTreeMap::new();
    for (name, clause) in raw {
        let variable = Variable::parse(name.trim())
            .with_context(|| format!("bad variable '{name}' in {}", path.display()))?;
        let clause = clause.trim();
        if clause.is_empty() {
            bail!("empty meaning for {variable} in {}", path.display());
        }
        meanings.insert(variable, clause.to_string());
    }
    Ok(meanings)
}

/// Asks for one meaning on stderr and reads a line from stdin.
///
/// End of input yields `None`.
fn prompt_meaning(variable: &Variable) -> io::Result<Option<String>> {
    let mut stderr = io::stderr();
    write!(stderr, "Digite o significado de {variable}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
