//! Multiwall platform core contracts.
//!
//! This crate contains the display-layout data structures and the
//! collaborator traits (layout discovery, wallpaper application) used by
//! the compose engine and CLI without coupling to a concrete OS backend.

use std::path::Path;
use std::str::FromStr;

use multiwall_common::error::{MultiwallError, MultiwallResult};
use serde::{Deserialize, Serialize};

/// One output device reported by the display server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayDevice {
    /// Output name (e.g. `DP-1`, `HDMI-1`).
    pub device_name: String,
    pub is_connected: bool,
    #[serde(default)]
    pub is_primary: bool,
    /// Active mode in physical pixels; zero when the output has no mode set.
    #[serde(default)]
    pub resolution_width: u32,
    #[serde(default)]
    pub resolution_height: u32,
    /// Position in the screen (pixels).
    #[serde(default)]
    pub offset_width: u32,
    #[serde(default)]
    pub offset_height: u32,
}

impl DisplayDevice {
    /// Whether the device is connected and currently driving a mode.
    pub fn is_active(&self) -> bool {
        self.is_connected && self.resolution_width > 0 && self.resolution_height > 0
    }
}

/// A display group (X screen) whose current size is the wallpaper canvas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Screen {
    pub screen_number: u32,
    pub current_width: u32,
    pub current_height: u32,
    pub devices: Vec<DisplayDevice>,
}

impl Screen {
    /// Devices that are connected, in reported order.
    pub fn connected_devices(&self) -> impl Iterator<Item = &DisplayDevice> {
        self.devices.iter().filter(|d| d.is_connected)
    }

    /// Look up a device by output name.
    pub fn device(&self, name: &str) -> Option<&DisplayDevice> {
        self.devices.iter().find(|d| d.device_name == name)
    }
}

/// Full layout as reported by a [`LayoutSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayLayout {
    pub screens: Vec<Screen>,
}

impl DisplayLayout {
    /// Find a screen by its number.
    pub fn screen(&self, screen_number: u32) -> MultiwallResult<&Screen> {
        self.screens
            .iter()
            .find(|s| s.screen_number == screen_number)
            .ok_or(MultiwallError::ScreenNotFound {
                screen: screen_number,
            })
    }
}

/// Display server / platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayServer {
    Wayland,
    X11,
    #[default]
    Unknown,
}

/// Settings schema a wallpaper is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplyTarget {
    #[default]
    Background,
    Screensaver,
}

impl ApplyTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplyTarget::Background => "background",
            ApplyTarget::Screensaver => "screensaver",
        }
    }
}

impl FromStr for ApplyTarget {
    type Err = MultiwallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(ApplyTarget::Background),
            "screensaver" => Ok(ApplyTarget::Screensaver),
            other => Err(MultiwallError::config(format!(
                "apply target should be either 'background' or 'screensaver', got {other:?}"
            ))),
        }
    }
}

/// Supplies the monitor layout (display-server specific).
pub trait LayoutSource {
    /// Query the current layout. Failures are returned unchanged, without retry.
    fn discover(&self) -> MultiwallResult<DisplayLayout>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Sets an already-composed image as the desktop background.
pub trait WallpaperApplier {
    /// Apply `image_path` spanned across all monitors.
    fn apply(&self, image_path: &Path) -> MultiwallResult<()>;

    /// Check if this applier can run on the current system.
    fn is_available(&self) -> bool;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Compute the bounds covering all active devices of a screen.
/// Returns `(min_x, min_y, width, height)` in physical pixels, or `None`
/// when no device is active.
pub fn active_device_bounds(screen: &Screen) -> Option<(u32, u32, u32, u32)> {
    let active: Vec<&DisplayDevice> = screen.devices.iter().filter(|d| d.is_active()).collect();
    if active.is_empty() {
        return None;
    }

    let min_x = active.iter().map(|d| d.offset_width).min()?;
    let min_y = active.iter().map(|d| d.offset_height).min()?;
    let max_x = active
        .iter()
        .map(|d| d.offset_width + d.resolution_width)
        .max()?;
    let max_y = active
        .iter()
        .map(|d| d.offset_height + d.resolution_height)
        .max()?;

    Some((min_x, min_y, max_x - min_x, max_y - min_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, connected: bool, w: u32, h: u32, x: u32, y: u32) -> DisplayDevice {
        DisplayDevice {
            device_name: name.to_string(),
            is_connected: connected,
            is_primary: false,
            resolution_width: w,
            resolution_height: h,
            offset_width: x,
            offset_height: y,
        }
    }

    fn side_by_side() -> Screen {
        Screen {
            screen_number: 0,
            current_width: 4480,
            current_height: 1440,
            devices: vec![
                device("HDMI-1", true, 1920, 1080, 0, 360),
                device("DP-1", false, 0, 0, 0, 0),
                device("DP-2", true, 2560, 1440, 1920, 0),
            ],
        }
    }

    #[test]
    fn bounds_cover_active_devices_only() {
        let (x, y, w, h) = active_device_bounds(&side_by_side()).unwrap();
        assert_eq!((x, y), (0, 0));
        assert_eq!(w, 4480);
        assert_eq!(h, 1440);
    }

    #[test]
    fn bounds_none_without_active_devices() {
        let screen = Screen {
            screen_number: 0,
            current_width: 1920,
            current_height: 1080,
            devices: vec![device("DP-1", false, 0, 0, 0, 0)],
        };
        assert!(active_device_bounds(&screen).is_none());
    }

    #[test]
    fn connected_devices_skip_disconnected() {
        let screen = side_by_side();
        let names: Vec<&str> = screen
            .connected_devices()
            .map(|d| d.device_name.as_str())
            .collect();
        assert_eq!(names, vec!["HDMI-1", "DP-2"]);
    }

    #[test]
    fn missing_screen_is_reported() {
        let layout = DisplayLayout {
            screens: vec![side_by_side()],
        };
        assert!(layout.screen(0).is_ok());
        assert!(matches!(
            layout.screen(3),
            Err(MultiwallError::ScreenNotFound { screen: 3 })
        ));
    }

    #[test]
    fn apply_target_parses_case_insensitively() {
        assert_eq!(
            "Screensaver".parse::<ApplyTarget>().unwrap(),
            ApplyTarget::Screensaver
        );
        assert!("lockscreen".parse::<ApplyTarget>().is_err());
    }

    #[test]
    fn device_defaults_when_geometry_absent() {
        let json = r#"{"device_name":"VGA-1","is_connected":false}"#;
        let device: DisplayDevice = serde_json::from_str(json).unwrap();
        assert!(!device.is_active());
        assert_eq!(device.resolution_width, 0);
    }
}
