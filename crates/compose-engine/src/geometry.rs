//! Pixel geometry for monitor placements on the wallpaper canvas.

use multiwall_common::error::{MultiwallError, MultiwallResult};
use serde::{Deserialize, Serialize};

/// Axis-aligned region of the canvas covered by one monitor.
///
/// Coordinates are canvas pixels with `(0, 0)` at the top-left. Rectangles
/// may overlap or leave gaps; they are never validated against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Deserialize)]
struct RawRectangle {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = MultiwallError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Rectangle::new(raw.x, raw.y, raw.w, raw.h)
    }
}

impl Rectangle {
    /// Create a rectangle; `w` and `h` must be non-zero.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> MultiwallResult<Self> {
        if w == 0 || h == 0 {
            return Err(MultiwallError::invalid_geometry(format!(
                "rectangle at ({x}, {y}) has zero size {w}x{h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Whether any part of this rectangle falls outside a canvas of `canvas` size.
    pub fn exceeds(&self, canvas: Size) -> bool {
        self.right() > canvas.width as u64 || self.bottom() > canvas.height as u64
    }
}

/// Non-zero width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> MultiwallResult<Self> {
        if width == 0 || height == 0 {
            return Err(MultiwallError::invalid_geometry(format!(
                "size {width}x{height} must be non-zero"
            )));
        }
        Ok(Self { width, height })
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_rectangle_is_rejected() {
        assert!(Rectangle::new(0, 0, 0, 1080).is_err());
        assert!(Rectangle::new(10, 10, 1920, 0).is_err());
        assert!(Rectangle::new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn edges_do_not_overflow() {
        let rect = Rectangle::new(u32::MAX, 0, u32::MAX, 1).unwrap();
        assert_eq!(rect.right(), 2 * u32::MAX as u64);
    }

    #[test]
    fn exceeds_checks_both_axes() {
        let canvas = Size::new(3840, 1080).unwrap();
        assert!(!Rectangle::new(1920, 0, 1920, 1080).unwrap().exceeds(canvas));
        assert!(Rectangle::new(1920, 0, 2560, 1080).unwrap().exceeds(canvas));
        assert!(Rectangle::new(0, 100, 1920, 1080).unwrap().exceeds(canvas));
    }

    #[test]
    fn deserialize_validates_size() {
        let ok: Rectangle = serde_json::from_str(r#"{"x":0,"y":0,"w":10,"h":20}"#).unwrap();
        assert_eq!(ok.size(), Size::new(10, 20).unwrap());
        assert!(serde_json::from_str::<Rectangle>(r#"{"x":0,"y":0,"w":0,"h":20}"#).is_err());
    }
}
