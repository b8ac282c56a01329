//! Monitor layout discovery from `xrandr` output.
//!
//! Only the lines needed to place monitors are interpreted:
//!
//! ```text
//! Screen 0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384
//! eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
//!    1920x1080     60.02*+  59.97
//! HDMI-1 disconnected (normal left inverted right x axis y axis)
//! ```
//!
//! Indented mode lines and property blocks are skipped.

use multiwall_common::error::{MultiwallError, MultiwallResult};
use multiwall_platform_core::{DisplayDevice, DisplayLayout, LayoutSource, Screen};

use crate::display::run_command;

/// [`LayoutSource`] that shells out to `xrandr`.
#[derive(Debug, Clone)]
pub struct XrandrLayoutSource {
    binary: String,
}

impl XrandrLayoutSource {
    pub fn new() -> Self {
        Self {
            binary: "xrandr".to_string(),
        }
    }

    /// Use a different executable (e.g. a wrapper script).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for XrandrLayoutSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSource for XrandrLayoutSource {
    fn discover(&self) -> MultiwallResult<DisplayLayout> {
        let stdout = run_command(&self.binary, &[])?;
        if stdout.trim().is_empty() {
            return Err(MultiwallError::platform("xrandr produced no output"));
        }
        let layout = parse_xrandr(&stdout)?;
        tracing::info!(
            screens = layout.screens.len(),
            devices = layout.screens.iter().map(|s| s.devices.len()).sum::<usize>(),
            "Discovered display layout"
        );
        Ok(layout)
    }

    fn name(&self) -> &str {
        "xrandr"
    }
}

/// Parse the text printed by a bare `xrandr` invocation.
pub fn parse_xrandr(output: &str) -> MultiwallResult<DisplayLayout> {
    let mut screens: Vec<Screen> = Vec::new();

    for (line_no, line) in output.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }

        if let Some(rest) = line.strip_prefix("Screen ") {
            screens.push(parse_screen_header(rest).ok_or_else(|| {
                MultiwallError::platform(format!(
                    "Malformed xrandr screen header on line {}: {line}",
                    line_no + 1
                ))
            })?);
            continue;
        }

        let Some(device) = parse_device_line(line) else {
            tracing::trace!(line, "Ignoring unrecognized xrandr line");
            continue;
        };

        let screen = screens.last_mut().ok_or_else(|| {
            MultiwallError::platform(format!(
                "xrandr output {} listed before any screen header",
                device.device_name
            ))
        })?;
        screen.devices.push(device);
    }

    if screens.is_empty() {
        return Err(MultiwallError::platform(
            "xrandr output contains no screens",
        ));
    }

    Ok(DisplayLayout { screens })
}

/// `0: minimum 320 x 200, current 3840 x 1080, maximum 16384 x 16384`
fn parse_screen_header(rest: &str) -> Option<Screen> {
    let (number, fields) = rest.split_once(':')?;
    let screen_number = number.trim().parse().ok()?;

    let current = fields
        .split(',')
        .map(str::trim)
        .find_map(|field| field.strip_prefix("current "))?;
    let (w, h) = current.split_once('x')?;

    Some(Screen {
        screen_number,
        current_width: w.trim().parse().ok()?,
        current_height: h.trim().parse().ok()?,
        devices: Vec::new(),
    })
}

fn parse_device_line(line: &str) -> Option<DisplayDevice> {
    let mut tokens = line.split_whitespace();
    let device_name = tokens.next()?.to_string();

    let is_connected = match tokens.next()? {
        "connected" => true,
        "disconnected" => false,
        "unknown" if tokens.next() == Some("connection") => false,
        _ => return None,
    };

    let mut device = DisplayDevice {
        device_name,
        is_connected,
        is_primary: false,
        resolution_width: 0,
        resolution_height: 0,
        offset_width: 0,
        offset_height: 0,
    };

    for token in tokens.take_while(|t| !t.starts_with('(')) {
        if token == "primary" {
            device.is_primary = true;
        } else if let Some((w, h, x, y)) = parse_geometry(token) {
            device.resolution_width = w;
            device.resolution_height = h;
            device.offset_width = x;
            device.offset_height = y;
        }
    }

    Some(device)
}

/// `1920x1080+1920+0` -> `(1920, 1080, 1920, 0)`
fn parse_geometry(token: &str) -> Option<(u32, u32, u32, u32)> {
    let (size, offsets) = token.split_once('+')?;
    let (w, h) = size.split_once('x')?;
    let (x, y) = offsets.split_once('+')?;
    Some((w.parse().ok()?, h.parse().ok()?, x.parse().ok()?, y.parse().ok()?))
}
