//! Multiwall Compose Engine
//!
//! Builds one spanned wallpaper out of per-monitor source images placed on
//! a virtual multi-monitor canvas.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Screen + assignments ──► plan ──► PlacementSpec[]
//!                                        │
//!                                decode (persist)
//!                                        │
//!                                   Placement[]
//!                                        │
//!                  fit per placement ──► paste in order (compositor)
//!                                        │
//!                                        ▼
//!                           background_<name>.jpg (persist)
//! ```

pub mod compositor;
pub mod fit;
pub mod geometry;
pub mod persist;
pub mod placement;
pub mod plan;

pub use compositor::{compose, Canvas};
pub use fit::FitStrategyKind;
pub use geometry::{Rectangle, Size};
pub use persist::{decode_image, render_wallpaper, resolve_placements, save_canvas, OutputOptions};
pub use placement::{Placement, PlacementSpec};
pub use plan::{placements_for_screen, ScreenPlan, WallpaperAssignments};

/// Decoded raster image handled by the engine.
pub type ImageHandle = image::RgbImage;
