//! Decoding source images and writing the composed wallpaper.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ImageReader, RgbImage};
use multiwall_common::error::{MultiwallError, MultiwallResult};

use crate::compositor::compose;
use crate::geometry::Size;
use crate::placement::{Placement, PlacementSpec};

/// Where and how the composed wallpaper is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Directory the image is written into (created if missing).
    pub output_dir: PathBuf,

    /// Name embedded in the file name: `background_<name>.jpg`.
    pub name: String,

    /// JPEG quality, clamped to 1-100.
    pub jpeg_quality: u8,
}

impl OutputOptions {
    pub fn new(output_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            name: name.into(),
            jpeg_quality: 75,
        }
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> MultiwallResult<PathBuf> {
        let name = self.name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(MultiwallError::config(format!(
                "invalid wallpaper name {:?}",
                self.name
            )));
        }
        Ok(self.output_dir.join(format!("background_{name}.jpg")))
    }
}

/// Decode an image file into 8-bit RGB. The format is sniffed from the
/// file contents, not the extension.
pub fn decode_image(path: &Path) -> MultiwallResult<RgbImage> {
    if !path.is_file() {
        return Err(MultiwallError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let image = reader.decode().map_err(|source| MultiwallError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded source image"
    );
    Ok(image.to_rgb8())
}

/// Decode every spec's image. The first failure aborts the whole batch so a
/// wallpaper is never composed with a monitor missing.
pub fn resolve_placements(specs: &[PlacementSpec]) -> MultiwallResult<Vec<Placement>> {
    specs
        .iter()
        .map(|spec| {
            let image = decode_image(&spec.source_path).map_err(|e| {
                tracing::error!(
                    label = %spec.label,
                    path = %spec.source_path.display(),
                    error = %e,
                    "Failed to resolve placement image"
                );
                e
            })?;
            Ok(Placement::new(
                spec.rectangle,
                image,
                spec.strategy,
                spec.label.clone(),
            ))
        })
        .collect()
}

/// Encode `canvas` as JPEG at `path`, creating parent directories.
///
/// The image is written to a sibling `.tmp` file and renamed over `path`, so
/// a failed save leaves any previous wallpaper untouched.
pub fn save_canvas(canvas: &RgbImage, path: &Path, jpeg_quality: u8) -> MultiwallResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(e) = write_jpeg(canvas, &tmp_path, path, jpeg_quality) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e);
    }
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e.into());
    }

    tracing::info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "Wrote wallpaper"
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_jpeg(
    canvas: &RgbImage,
    tmp_path: &Path,
    path: &Path,
    jpeg_quality: u8,
) -> MultiwallResult<()> {
    let file = File::create(tmp_path)?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality.clamp(1, 100));
        encoder
            .encode_image(canvas)
            .map_err(|source| MultiwallError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

/// Resolve, compose, and write a wallpaper. Returns the written path.
///
/// Nothing is written unless every image decodes.
pub fn render_wallpaper(
    specs: &[PlacementSpec],
    canvas: Size,
    output: &OutputOptions,
) -> MultiwallResult<PathBuf> {
    let path = output.output_path()?;
    let placements = resolve_placements(specs)?;
    let image = compose(&placements, canvas.width, canvas.height)?;
    save_canvas(&image, &path, output.jpeg_quality)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_name() {
        let opts = OutputOptions::new("/tmp/walls", "default");
        assert_eq!(
            opts.output_path().unwrap(),
            PathBuf::from("/tmp/walls/background_default.jpg")
        );
    }

    #[test]
    fn output_path_rejects_separators() {
        for bad in ["", "  ", "../evil", "a/b", "..", "a\\b"] {
            let opts = OutputOptions::new("/tmp/walls", bad);
            assert!(opts.output_path().unwrap_err().is_config(), "{bad:?}");
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = decode_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, MultiwallError::FileNotFound { .. }));
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let dir = std::env::temp_dir().join("multiwall_test_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, MultiwallError::Decode { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failed_save_keeps_previous_wallpaper() {
        let dir = std::env::temp_dir().join("multiwall_test_failed_save");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("background_default.jpg");

        save_canvas(&RgbImage::from_pixel(16, 16, image::Rgb([9, 9, 9])), &path, 75).unwrap();
        let before = std::fs::read(&path).unwrap();
        assert!(!before.is_empty());

        // Wider than the JPEG dimension limit, so encoding fails.
        let err = save_canvas(&RgbImage::new(70_000, 1), &path, 75).unwrap_err();
        assert!(matches!(err, MultiwallError::Encode { .. }));

        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert!(!temp_path_for(&path).exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = std::env::temp_dir().join("multiwall_test_replace_save");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("background_default.jpg");
        std::fs::write(&path, b"old").unwrap();

        save_canvas(&RgbImage::new(8, 8), &path, 75).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..2], &[0xFF, 0xD8]);
        assert!(!temp_path_for(&path).exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
