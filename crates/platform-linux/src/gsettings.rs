//! GNOME wallpaper application through `gsettings`.
//!
//! Sets the background `picture-uri` and `picture-uri-dark` to the composed
//! image and switches the target schema's `picture-options` to `spanned`, so
//! one image stretches across every monitor.

use std::path::{Path, PathBuf};

use multiwall_common::error::{MultiwallError, MultiwallResult};
use multiwall_platform_core::{ApplyTarget, WallpaperApplier};

use crate::display::{command_exists, run_command};

const BACKGROUND_SCHEMA: &str = "org.gnome.desktop.background";

/// [`WallpaperApplier`] for GNOME-based desktops.
#[derive(Debug, Clone)]
pub struct GsettingsApplier {
    target: ApplyTarget,
}

impl GsettingsApplier {
    pub fn new(target: ApplyTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ApplyTarget {
        self.target
    }

    /// Schema whose `picture-options` is switched to spanned:
    /// `org.gnome.desktop.background` or `org.gnome.desktop.screensaver`.
    pub fn schema(&self) -> String {
        format!("org.gnome.desktop.{}", self.target.as_str())
    }

    /// The `gsettings set` argument lists, in the order they are run.
    ///
    /// The picture URIs always go to the background schema, the only one
    /// with a `picture-uri-dark` key.
    pub fn commands(&self, image_path: &Path) -> Vec<[String; 4]> {
        let uri = file_uri(image_path);
        let set = |schema: &str, key: &str, value: &str| {
            [
                "set".to_string(),
                schema.to_string(),
                key.to_string(),
                value.to_string(),
            ]
        };
        vec![
            set(BACKGROUND_SCHEMA, "picture-uri", &uri),
            set(BACKGROUND_SCHEMA, "picture-uri-dark", &uri),
            set(&self.schema(), "picture-options", "spanned"),
        ]
    }
}

impl Default for GsettingsApplier {
    fn default() -> Self {
        Self::new(ApplyTarget::Background)
    }
}

impl WallpaperApplier for GsettingsApplier {
    fn apply(&self, image_path: &Path) -> MultiwallResult<()> {
        if !self.is_available() {
            return Err(MultiwallError::platform("gsettings not found in $PATH"));
        }
        if !image_path.is_file() {
            return Err(MultiwallError::FileNotFound {
                path: image_path.to_path_buf(),
            });
        }

        let absolute = absolute_path(image_path)?;
        for args in self.commands(&absolute) {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            run_command("gsettings", &args)?;
        }

        tracing::info!(
            path = %absolute.display(),
            schema = %self.schema(),
            "Applied spanned wallpaper"
        );
        Ok(())
    }

    fn is_available(&self) -> bool {
        command_exists("gsettings")
    }

    fn name(&self) -> &str {
        "gsettings"
    }
}

fn absolute_path(path: &Path) -> MultiwallResult<PathBuf> {
    Ok(std::fs::canonicalize(path)?)
}

/// `file://` URI for an absolute path, percent-encoding every byte outside
/// the unreserved set (and `/`).
pub fn file_uri(path: &Path) -> String {
    let mut uri = String::from("file://");
    for &byte in path.as_os_str().as_encoded_bytes() {
        if byte.is_ascii_alphanumeric() || b"/-._~".contains(&byte) {
            uri.push(byte as char);
        } else {
            uri.push_str(&format!("%{byte:02X}"));
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_target_background_schema() {
        let applier = GsettingsApplier::default();
        let cmds = applier.commands(Path::new("/home/me/.cache/multiwall/background_default.jpg"));
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0][1], "org.gnome.desktop.background");
        assert_eq!(cmds[0][2], "picture-uri");
        assert_eq!(
            cmds[0][3],
            "file:///home/me/.cache/multiwall/background_default.jpg"
        );
        assert_eq!(cmds[1][2], "picture-uri-dark");
        assert_eq!(cmds[2][2..], ["picture-options".to_string(), "spanned".to_string()]);
    }

    #[test]
    fn screensaver_target_only_changes_picture_options() {
        let applier = GsettingsApplier::new(ApplyTarget::Screensaver);
        assert_eq!(applier.schema(), "org.gnome.desktop.screensaver");
        let cmds = applier.commands(Path::new("/tmp/a.jpg"));
        assert_eq!(cmds[0][1..3], ["org.gnome.desktop.background", "picture-uri"]);
        assert_eq!(cmds[1][1..3], ["org.gnome.desktop.background", "picture-uri-dark"]);
        assert_eq!(
            cmds[2][1..],
            ["org.gnome.desktop.screensaver", "picture-options", "spanned"]
        );
    }

    #[test]
    fn file_uri_escapes_reserved_characters() {
        assert_eq!(
            file_uri(Path::new("/home/me/50%/a#b?c d.jpg")),
            "file:///home/me/50%25/a%23b%3Fc%20d.jpg"
        );
        assert_eq!(file_uri(Path::new("/tmp/é.jpg")), "file:///tmp/%C3%A9.jpg");
    }

    #[test]
    fn apply_rejects_missing_image() {
        let applier = GsettingsApplier::default();
        if !applier.is_available() {
            return;
        }
        let err = applier
            .apply(Path::new("/definitely/not/here.jpg"))
            .unwrap_err();
        assert!(matches!(err, MultiwallError::FileNotFound { .. }));
    }
}
