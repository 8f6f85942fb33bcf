//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: the
//! global flags, the discovered `.cpc/` directory and the loaded
//! configuration.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cpc_config::config::{ColorMode, CpcConfig, load_config_or_default};
use cpc_config::cpc_dir::find_cpc_dir;
use cpc_formula::render::FormulaRenderer;
use cpc_formula::verbs::PortugueseVerbs;
use cpc_ui::terminal::set_color_override;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Whether to produce JSON output (flag or config).
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,

    /// The `.cpc/` directory, if one was found.
    pub cpc_dir: Option<PathBuf>,

    /// Effective configuration (defaults when no `.cpc/` exists).
    pub config: CpcConfig,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Discovers `.cpc/` from the current directory, loads its config and
    /// applies the color decision for the rest of the process.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to read the current directory")?;
        let cpc_dir = find_cpc_dir(&cwd);
        debug!(?cpc_dir, "config directory");

        let config = load_config_or_default(cpc_dir.as_deref()).with_context(|| match &cpc_dir {
            Some(dir) => format!("failed to load configuration from {}", dir.display()),
            None => "failed to load configuration".to_string(),
        })?;

        set_color_override(color_override(global.no_color, config.color));

        Ok(Self {
            json: global.json || config.json,
            quiet: global.quiet,
            cpc_dir,
            config,
        })
    }

    /// The verb heuristic, extended with the configured suffixes and forms.
    pub fn verbs(&self) -> PortugueseVerbs {
        PortugueseVerbs::new().extend(
            &self.config.negation.extra_suffixes,
            &self.config.negation.extra_forms,
        )
    }

    pub fn renderer(&self) -> FormulaRenderer {
        FormulaRenderer::new(self.verbs())
    }
}

/// `--no-color` beats the config; `auto` defers to terminal detection.
fn color_override(no_color: bool, mode: ColorMode) -> Option<bool> {
    if no_color {
        return Some(false);
    }
    match mode {
        ColorMode::Auto => None,
        ColorMode::Always => Some(true),
        ColorMode::Never => Some(false),
    }
}
