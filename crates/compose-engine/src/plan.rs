//! Turning a discovered screen plus per-monitor assignments into placements.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use multiwall_common::error::{MultiwallError, MultiwallResult};
use multiwall_platform_core::Screen;
use serde::{Deserialize, Serialize};

use crate::fit::FitStrategyKind;
use crate::geometry::{Rectangle, Size};
use crate::placement::PlacementSpec;

/// Per-monitor image and fit choices, keyed by device name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperAssignments {
    /// Strategy for monitors without an entry in `fit_overrides`.
    pub default_fit: FitStrategyKind,

    /// Source image per monitor.
    pub images: BTreeMap<String, PathBuf>,

    /// Strategy overrides per monitor.
    pub fit_overrides: BTreeMap<String, FitStrategyKind>,
}

impl WallpaperAssignments {
    pub fn new(default_fit: FitStrategyKind) -> Self {
        Self {
            default_fit,
            ..Self::default()
        }
    }

    /// Assign an image to a monitor, replacing any previous one.
    pub fn set_image(&mut self, label: impl Into<String>, path: impl Into<PathBuf>) {
        self.images.insert(label.into(), path.into());
    }

    /// Override the fit strategy of one monitor.
    pub fn set_fit(&mut self, label: impl Into<String>, fit: FitStrategyKind) {
        self.fit_overrides.insert(label.into(), fit);
    }

    /// Strategy in effect for `label`.
    pub fn fit_for(&self, label: &str) -> FitStrategyKind {
        self.fit_overrides
            .get(label)
            .copied()
            .unwrap_or(self.default_fit)
    }

    /// Load assignments from a JSON file.
    pub fn load(path: &Path) -> MultiwallResult<Self> {
        if !path.is_file() {
            return Err(MultiwallError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save assignments as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> MultiwallResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Everything needed to compose one screen's wallpaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenPlan {
    pub canvas: Size,
    pub placements: Vec<PlacementSpec>,
}

/// Build placements for every active monitor of `screen`, in reported order.
///
/// Disconnected monitors are skipped, as are connected outputs without an
/// active mode. An active monitor without an assigned image is an error.
pub fn placements_for_screen(
    screen: &Screen,
    assignments: &WallpaperAssignments,
) -> MultiwallResult<ScreenPlan> {
    let canvas = Size::new(screen.current_width, screen.current_height)?;
    let mut placements = Vec::new();

    for device in screen.connected_devices() {
        if !device.is_active() {
            tracing::debug!(
                device = %device.device_name,
                "Skipping connected output without an active mode"
            );
            continue;
        }

        let label = device.device_name.clone();
        let source_path = assignments
            .images
            .get(&label)
            .cloned()
            .ok_or_else(|| MultiwallError::MissingImage {
                label: label.clone(),
            })?;

        let rectangle = Rectangle::new(
            device.offset_width,
            device.offset_height,
            device.resolution_width,
            device.resolution_height,
        )?;

        placements.push(PlacementSpec {
            rectangle,
            source_path,
            strategy: assignments.fit_for(&label),
            label,
        });
    }

    let unused: Vec<&str> = assignments
        .images
        .keys()
        .filter(|name| !placements.iter().any(|p| &p.label == *name))
        .map(String::as_str)
        .collect();
    if !unused.is_empty() {
        tracing::warn!(?unused, "Ignoring images assigned to inactive or unknown monitors");
    }

    Ok(ScreenPlan { canvas, placements })
}
