//! Fit a single image to a size, for previewing a strategy.

use std::path::PathBuf;

use anyhow::Context;
use multiwall_compose_engine::{decode_image, FitStrategyKind, Size};

pub fn run(
    input: PathBuf,
    output: PathBuf,
    width: u32,
    height: u32,
    fit: FitStrategyKind,
) -> anyhow::Result<()> {
    let target = Size::new(width, height)?;
    let image = decode_image(&input)?;

    println!(
        "Fitting {} ({}x{}) to {target} with {fit}",
        input.display(),
        image.width(),
        image.height()
    );

    let fitted = fit.fit(&image, target);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    fitted
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Written: {}", output.display());
    Ok(())
}
