//! Multiwall Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Layout Discovery:** `xrandr` output parsing into screens and devices
//! - **Wallpaper Application:** GNOME `gsettings` background in spanned mode
//! - **Display Detection:** display server sniffing and command helpers
//! - **Permissions:** Capability detection and user guidance

pub mod display;
pub mod gsettings;
pub mod permissions;
pub mod xrandr;

pub use display::*;
pub use gsettings::GsettingsApplier;
pub use xrandr::{parse_xrandr, XrandrLayoutSource};
