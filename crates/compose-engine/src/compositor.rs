//! Canvas compositor: pastes fitted per-monitor images onto one wallpaper.
//!
//! Placements are applied strictly in input order, so a later placement
//! overwrites an earlier one wherever their rectangles overlap.

use image::{imageops, RgbImage};
use multiwall_common::error::MultiwallResult;

use crate::geometry::Size;
use crate::placement::Placement;
use crate::ImageHandle;

/// The wallpaper being assembled. Starts solid black.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            pixels: RgbImage::new(size.width, size.height),
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    /// Copy `image` onto the canvas with its top-left at `(x, y)`.
    /// Pixels falling outside the canvas are dropped.
    pub fn paste(&mut self, image: &RgbImage, x: u32, y: u32) {
        imageops::replace(&mut self.pixels, image, x as i64, y as i64);
    }

    /// Fit and paste one placement at its rectangle's offset.
    pub fn apply(&mut self, placement: &Placement) {
        let rect = placement.rectangle();
        if rect.exceeds(self.size()) {
            tracing::warn!(
                label = placement.label(),
                x = rect.x(),
                y = rect.y(),
                w = rect.width(),
                h = rect.height(),
                canvas = %self.size(),
                "Placement extends past the canvas and will be clipped"
            );
        }

        let fitted = placement.render();
        self.paste(&fitted, rect.x(), rect.y());
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}

/// Compose `placements` onto a black `bg_w` x `bg_h` canvas.
///
/// Fails only when the canvas size is zero.
pub fn compose(placements: &[Placement], bg_w: u32, bg_h: u32) -> MultiwallResult<ImageHandle> {
    let size = Size::new(bg_w, bg_h)?;
    tracing::info!(
        canvas = %size,
        placements = placements.len(),
        "Composing wallpaper"
    );

    let mut canvas = Canvas::new(size);
    for (index, placement) in placements.iter().enumerate() {
        tracing::debug!(
            index,
            label = placement.label(),
            strategy = %placement.strategy(),
            source = ?placement.source_image().dimensions(),
            rect = ?placement.rectangle(),
            "Applying placement"
        );
        canvas.apply(placement);
    }

    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FitStrategyKind;
    use crate::geometry::Rectangle;
    use image::Rgb;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn solid_placement(x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>, label: &str) -> Placement {
        Placement::new(
            Rectangle::new(x, y, w, h).unwrap(),
            RgbImage::from_pixel(8, 8, color),
            FitStrategyKind::Stretch,
            label,
        )
    }

    #[test]
    fn later_placement_wins_overlap() {
        let a = solid_placement(0, 0, 100, 100, RED, "A");
        let b = solid_placement(0, 0, 50, 50, BLUE, "B");

        let out = compose(&[a.clone(), b.clone()], 100, 100).unwrap();
        assert_eq!(*out.get_pixel(10, 10), BLUE);
        assert_eq!(*out.get_pixel(90, 90), RED);

        let reversed = compose(&[b, a], 100, 100).unwrap();
        assert_eq!(*reversed.get_pixel(10, 10), RED);
    }

    #[test]
    fn gaps_stay_black() {
        let left = solid_placement(0, 0, 40, 100, RED, "left");
        let right = solid_placement(60, 0, 40, 100, BLUE, "right");
        let out = compose(&[left, right], 100, 100).unwrap();
        assert_eq!(*out.get_pixel(50, 50), BLACK);
        assert_eq!(*out.get_pixel(39, 0), RED);
        assert_eq!(*out.get_pixel(60, 99), BLUE);
    }

    #[test]
    fn placement_past_canvas_is_clipped() {
        let wide = solid_placement(80, 80, 100, 100, BLUE, "wide");
        let out = compose(&[wide], 100, 100).unwrap();
        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(*out.get_pixel(99, 99), BLUE);
        assert_eq!(*out.get_pixel(79, 79), BLACK);
    }

    #[test]
    fn empty_placements_give_black_canvas() {
        let out = compose(&[], 16, 9).unwrap();
        assert_eq!(out.dimensions(), (16, 9));
        assert!(out.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let err = compose(&[], 0, 1080).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn side_by_side_monitors_use_their_own_strategy() {
        // 2x1 source centered on the right monitor stays small; the
        // stretched left monitor is fully red.
        let left = solid_placement(0, 0, 30, 20, RED, "left");
        let right = Placement::new(
            Rectangle::new(30, 0, 30, 20).unwrap(),
            RgbImage::from_pixel(2, 1, BLUE),
            FitStrategyKind::Center,
            "right",
        );
        let out = compose(&[left, right], 60, 20).unwrap();
        assert_eq!(*out.get_pixel(29, 19), RED);
        assert_eq!(*out.get_pixel(30 + 14, 9), BLUE);
        assert_eq!(*out.get_pixel(30, 0), BLACK);
    }
}
