//! Placement records: one source image bound to one monitor rectangle.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fit::FitStrategyKind;
use crate::geometry::Rectangle;
use crate::ImageHandle;

/// A decoded image bound to a rectangle and a fit strategy.
///
/// Built per compose call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Placement {
    rectangle: Rectangle,
    source_image: ImageHandle,
    strategy: FitStrategyKind,
    label: String,
}

impl Placement {
    pub fn new(
        rectangle: Rectangle,
        source_image: ImageHandle,
        strategy: FitStrategyKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            rectangle,
            source_image,
            strategy,
            label: label.into(),
        }
    }

    pub fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    pub fn source_image(&self) -> &ImageHandle {
        &self.source_image
    }

    pub fn strategy(&self) -> FitStrategyKind {
        self.strategy
    }

    /// Monitor name this placement targets.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the strategy, producing an image the size of the rectangle.
    pub fn render(&self) -> ImageHandle {
        self.strategy.fit(&self.source_image, self.rectangle.size())
    }
}

/// Unresolved placement that still refers to its image by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSpec {
    pub rectangle: Rectangle,
    pub source_path: PathBuf,
    #[serde(default)]
    pub strategy: FitStrategyKind,
    pub label: String,
}
