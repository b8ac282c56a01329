//! Compose a wallpaper and set it as the spanned desktop background.

use multiwall_common::config::AppConfig;
use multiwall_platform_core::{ApplyTarget, WallpaperApplier};
use multiwall_platform_linux::GsettingsApplier;

use crate::ComposeArgs;

pub fn run(config: &AppConfig, args: &ComposeArgs, target: Option<&str>) -> anyhow::Result<()> {
    let (_, configured) = super::validate_config(config)?;
    let target: ApplyTarget = match target {
        Some(key) => key.parse()?,
        None => configured,
    };
    let applier = GsettingsApplier::new(target);
    if !applier.is_available() {
        anyhow::bail!("{} is not available; use `multiwall compose` instead", applier.name());
    }

    let path = super::compose::run(config, args)?;
    applier.apply(&path)?;
    println!("Wallpaper applied ({} spanned)", target.as_str());
    Ok(())
}
