//! `cpc config` -- show the effective configuration or create a default one.

use anyhow::{Context, Result, bail};
use cpc_config::config::{CONFIG_FILE_NAME, CpcConfig, save_config};
use cpc_config::cpc_dir::ensure_cpc_dir;

use crate::cli::{ConfigArgs, ConfigCommands, ConfigInitArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `cpc config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Init(init_args) => init(ctx, init_args),
    }
}

fn show(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&serde_json::json!({
            "path": ctx.cpc_dir.as_ref().map(|d| d.join(CONFIG_FILE_NAME)),
            "config": &ctx.config,
        }));
        return Ok(());
    }

    if !ctx.quiet {
        match &ctx.cpc_dir {
            Some(dir) => println!("# {}", dir.join(CONFIG_FILE_NAME).display()),
            None => println!("# no .cpc directory found, showing defaults"),
        }
    }
    let yaml = serde_yaml::to_string(&ctx.config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

fn init(ctx: &RuntimeContext, args: &ConfigInitArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let cpc_dir = ensure_cpc_dir(&cwd)?;
    let config_path = cpc_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        bail!(
            "{} already exists\nHint: use --force to overwrite it",
            config_path.display()
        );
    }

    save_config(&cpc_dir, &CpcConfig::default())?;

    if ctx.json {
        output_json(&serde_json::json!({ "created": config_path }));
    } else if !ctx.quiet {
        println!("Created {}", config_path.display());
    }
    Ok(())
}
