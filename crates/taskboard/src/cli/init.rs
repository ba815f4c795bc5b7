/*
[INPUT]:  Output path for the configuration file
[OUTPUT]: Default YAML configuration written to disk
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;

use crate::config::AppConfig;

pub fn run_init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            output.display()
        );
    }
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );
    Ok(())
}
