//! Show or initialize the configuration file.

use std::path::Path;

use anyhow::Context;
use multiwall_common::config::AppConfig;

pub fn run(config: &AppConfig, path: &Path, init: bool) -> anyhow::Result<()> {
    super::validate_config(config)
        .with_context(|| format!("Configuration {} is invalid", path.display()))?;

    if init {
        config.save_to(path)?;
        println!("Configuration written: {}", path.display());
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not present, defaults)" };
    println!("# {}{status}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
