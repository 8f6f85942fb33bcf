//! Clap CLI definitions for the `cpc` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cpc_core::variable::Variable;

/// cpc -- Portuguese sentences to propositional calculus and back.
#[derive(Parser, Debug)]
#[command(
    name = "cpc",
    about = "Translate Portuguese sentences to propositional formulas and back",
    long_about = "Translates flat Portuguese sentences (\"Se chove então a grama fica molhada\") into propositional formulas (P → Q) with the mapping of each variable to its clause, and renders formulas back into sentences.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a Portuguese sentence into a formula.
    #[command(alias = "nl")]
    Parse(ParseArgs),

    /// Render a formula as a Portuguese sentence.
    #[command(alias = "cpc")]
    Render(RenderArgs),

    /// Translate a sentence and render the formula back.
    Roundtrip(RoundtripArgs),

    /// List connectives, their ASCII spellings and Portuguese words.
    Symbols,

    /// Show or initialize the configuration.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Arguments for `cpc parse`.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Sentence to translate (multiple words are joined with spaces).
    #[arg(required = true, value_name = "SENTENCE")]
    pub sentence: Vec<String>,
}

/// Arguments for `cpc render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Formula to render, e.g. "P → Q" or "P -> Q".
    #[arg(required = true, value_name = "FORMULA")]
    pub formula: Vec<String>,

    /// Meaning of a variable (repeatable).
    #[arg(short = 'm', long = "meaning", value_name = "VAR=TEXT", value_parser = parse_meaning)]
    pub meanings: Vec<(Variable, String)>,

    /// YAML, JSON or TOML file mapping variables to meanings.
    #[arg(long = "meanings", value_name = "FILE")]
    pub meanings_file: Option<PathBuf>,

    /// Fail instead of asking for missing meanings on stdin.
    #[arg(long)]
    pub no_prompt: bool,
}

/// Arguments for `cpc roundtrip`.
#[derive(Args, Debug)]
pub struct RoundtripArgs {
    /// Sentence to translate and render back.
    #[arg(required = true, value_name = "SENTENCE")]
    pub sentence: Vec<String>,
}

fn parse_meaning(s: &str) -> Result<(Variable, String), String> {
    let (name, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected VAR=TEXT, got '{s}'"))?;
    let variable = Variable::parse(name.trim()).map_err(|e| e.to_string())?;
    let text = text.trim();
    if text.is_empty() {
        return Err(format!("empty meaning for {variable}"));
    }
    Ok((variable, text.to_string()))
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Arguments for `cpc config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Write a default `.cpc/config.yaml` in the current directory.
    Init(ConfigInitArgs),
}

/// Arguments for `cpc config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `cpc completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
