//! Compose a spanned wallpaper without applying it.

use std::path::PathBuf;

use anyhow::Context;
use multiwall_common::config::AppConfig;
use multiwall_compose_engine::{
    placements_for_screen, render_wallpaper, FitStrategyKind, OutputOptions,
    WallpaperAssignments,
};

use crate::ComposeArgs;

pub fn run(config: &AppConfig, args: &ComposeArgs) -> anyhow::Result<PathBuf> {
    let assignments = build_assignments(config, args)?;
    tracing::debug!(?assignments, "Resolved monitor assignments");
    if let Some(path) = &args.save_assignments {
        assignments
            .save(path)
            .with_context(|| format!("Failed to save assignments to {}", path.display()))?;
        println!("Saved assignments: {}", path.display());
    }

    let layout = super::load_layout(&args.layout)?;
    let screen = layout.screen(args.layout.screen)?;
    let plan = placements_for_screen(screen, &assignments)?;

    println!(
        "Composing {} monitor(s) on screen {} ({})",
        plan.placements.len(),
        screen.screen_number,
        plan.canvas
    );
    for spec in &plan.placements {
        println!(
            "  {} {}x{}+{}+{} [{}] {}",
            spec.label,
            spec.rectangle.width(),
            spec.rectangle.height(),
            spec.rectangle.x(),
            spec.rectangle.y(),
            spec.strategy,
            spec.source_path.display()
        );
    }

    let output = OutputOptions {
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone()),
        name: args.name.clone(),
        jpeg_quality: args.quality.unwrap_or(config.jpeg_quality),
    };

    let path = render_wallpaper(&plan.placements, plan.canvas, &output)
        .context("Failed to compose wallpaper")?;
    println!("Wallpaper written: {}", path.display());
    Ok(path)
}

/// Merge the assignments file, config default, and command-line pairs.
fn build_assignments(
    config: &AppConfig,
    args: &ComposeArgs,
) -> anyhow::Result<WallpaperAssignments> {
    let (default_fit, _) = super::validate_config(config)?;
    let mut assignments = match &args.assignments {
        Some(path) => WallpaperAssignments::load(path)
            .with_context(|| format!("Failed to load assignments {}", path.display()))?,
        None => WallpaperAssignments::new(default_fit),
    };

    if let Some(fit) = args.default_fit {
        assignments.default_fit = fit;
    }
    for (label, path) in &args.images {
        assignments.set_image(label.clone(), path.clone());
    }
    for (label, key) in &args.fits {
        let fit: FitStrategyKind = key
            .parse()
            .with_context(|| format!("Invalid fit for monitor {label}"))?;
        assignments.set_fit(label.clone(), fit);
    }

    Ok(assignments)
}
