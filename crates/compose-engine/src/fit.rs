//! Fit strategies: map a source image onto a fixed-size monitor rectangle.
//!
//! Every strategy returns an image of exactly the requested size. Scaling
//! uses Lanczos3; strategies that only move pixels (tile, center, and the
//! no-op cases of the others) copy them untouched.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::RgbImage;
use multiwall_common::error::MultiwallError;
use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Filter used for every resampling step.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// How a source image is mapped onto a monitor rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStrategyKind {
    /// Cover the whole rectangle, cropping the overflow symmetrically.
    #[default]
    Fill,
    /// Shrink to fit inside the rectangle, anchored top-left on black.
    Fit,
    /// Resize to the rectangle, ignoring aspect ratio.
    Stretch,
    /// Repeat the unscaled image from the top-left corner.
    Tile,
    /// Place the unscaled image in the middle on black.
    Center,
}

impl FitStrategyKind {
    pub const ALL: [FitStrategyKind; 5] = [
        FitStrategyKind::Fill,
        FitStrategyKind::Fit,
        FitStrategyKind::Stretch,
        FitStrategyKind::Tile,
        FitStrategyKind::Center,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FitStrategyKind::Fill => "fill",
            FitStrategyKind::Fit => "fit",
            FitStrategyKind::Stretch => "stretch",
            FitStrategyKind::Tile => "tile",
            FitStrategyKind::Center => "center",
        }
    }

    /// Produce a `target`-sized image from `image` under this strategy.
    pub fn fit(self, image: &RgbImage, target: Size) -> RgbImage {
        let out = match self {
            FitStrategyKind::Fill => fill(image, target),
            FitStrategyKind::Fit => fit_within(image, target),
            FitStrategyKind::Stretch => stretch(image, target),
            FitStrategyKind::Tile => tile(image, target),
            FitStrategyKind::Center => center(image, target),
        };
        debug_assert_eq!(out.dimensions(), (target.width, target.height));
        out
    }
}

impl fmt::Display for FitStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitStrategyKind {
    type Err = MultiwallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FitStrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| MultiwallError::UnknownFitStrategy { key: s.to_string() })
    }
}

/// Scale to cover, then crop the overflowing axis around the center.
fn fill(image: &RgbImage, target: Size) -> RgbImage {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return RgbImage::new(target.width, target.height);
    }
    if (src_w, src_h) == (target.width, target.height) {
        return image.clone();
    }

    let (sw, sh) = (src_w as u64, src_h as u64);
    let (tw, th) = (target.width as u64, target.height as u64);

    // src_w/src_h > tw/th, compared without floating point.
    let (new_w, new_h) = if sw * th > tw * sh {
        ((th * sw / sh).max(tw), th)
    } else {
        (tw, (tw * sh / sw).max(th))
    };

    let scaled = imageops::resize(image, new_w as u32, new_h as u32, RESAMPLE_FILTER);
    let x_crop = ((new_w - tw) / 2) as u32;
    let y_crop = ((new_h - th) / 2) as u32;
    imageops::crop_imm(&scaled, x_crop, y_crop, target.width, target.height).to_image()
}

/// Largest aspect-preserving size that fits inside `target`. Images that
/// already fit keep their size.
pub fn fit_within_size(src_w: u32, src_h: u32, target: Size) -> (u32, u32) {
    if src_w <= target.width && src_h <= target.height {
        return (src_w, src_h);
    }

    let (sw, sh) = (src_w as u64, src_h as u64);
    let (tw, th) = (target.width as u64, target.height as u64);

    if tw * sh >= th * sw {
        // Height limited.
        let w = (2 * th * sw + sh) / (2 * sh);
        (w.clamp(1, tw) as u32, target.height)
    } else {
        let h = (2 * tw * sh + sw) / (2 * sw);
        (target.width, h.clamp(1, th) as u32)
    }
}

fn fit_within(image: &RgbImage, target: Size) -> RgbImage {
    let (src_w, src_h) = image.dimensions();
    let mut background = RgbImage::new(target.width, target.height);
    if src_w == 0 || src_h == 0 {
        return background;
    }

    let (w, h) = fit_within_size(src_w, src_h, target);
    if (w, h) == (src_w, src_h) {
        imageops::replace(&mut background, image, 0, 0);
    } else {
        let thumbnail = imageops::resize(image, w, h, RESAMPLE_FILTER);
        imageops::replace(&mut background, &thumbnail, 0, 0);
    }
    background
}

fn stretch(image: &RgbImage, target: Size) -> RgbImage {
    if image.dimensions() == (target.width, target.height) {
        return image.clone();
    }
    if image.width() == 0 || image.height() == 0 {
        return RgbImage::new(target.width, target.height);
    }
    imageops::resize(image, target.width, target.height, RESAMPLE_FILTER)
}

fn tile(image: &RgbImage, target: Size) -> RgbImage {
    let (tile_w, tile_h) = image.dimensions();
    let mut background = RgbImage::new(target.width, target.height);
    if tile_w == 0 || tile_h == 0 {
        return background;
    }

    for x in (0..target.width).step_by(tile_w as usize) {
        for y in (0..target.height).step_by(tile_h as usize) {
            imageops::replace(&mut background, image, x as i64, y as i64);
        }
    }
    background
}

/// Offset that centers a `src`-sized image in `target`. Negative when the
/// source is larger; floor division keeps odd remainders on the right/bottom.
pub fn center_offset(src_w: u32, src_h: u32, target: Size) -> (i64, i64) {
    (
        (target.width as i64 - src_w as i64).div_euclid(2),
        (target.height as i64 - src_h as i64).div_euclid(2),
    )
}

fn center(image: &RgbImage, target: Size) -> RgbImage {
    let mut background = RgbImage::new(target.width, target.height);
    let (x, y) = center_offset(image.width(), image.height(), target);
    imageops::replace(&mut background, image, x, y);
    background
}
