//! Capability detection and guidance for Linux.
//!
//! Multiwall needs a graphical session, `xrandr` to read the monitor
//! layout, and `gsettings` to apply the composed wallpaper.

use crate::display::{command_exists, detect_display_server, DisplayServer};

/// A system capability that Multiwall may need.
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub required: bool,
    pub fix_instructions: Option<String>,
}

/// Check all capabilities and report status.
pub fn check_capabilities() -> Vec<Capability> {
    vec![
        check_display_session(),
        check_xrandr(),
        check_gsettings(),
    ]
}

/// Check that a graphical session is running.
fn check_display_session() -> Capability {
    let server = detect_display_server();
    let available = server != DisplayServer::Unknown;

    Capability {
        name: "Display Session".to_string(),
        description: format!("Graphical desktop session ({server:?})"),
        available,
        required: true,
        fix_instructions: if !available {
            Some(
                "Run from a graphical desktop session (DISPLAY or WAYLAND_DISPLAY must be set)"
                    .to_string(),
            )
        } else {
            None
        },
    }
}

/// Check that `xrandr` is installed.
fn check_xrandr() -> Capability {
    let available = command_exists("xrandr");

    Capability {
        name: "xrandr".to_string(),
        description: "Monitor layout discovery".to_string(),
        available,
        required: true,
        fix_instructions: if !available {
            Some("Install xrandr: sudo apt install x11-xserver-utils".to_string())
        } else {
            None
        },
    }
}

/// Check that `gsettings` is installed.
fn check_gsettings() -> Capability {
    let available = command_exists("gsettings");

    Capability {
        name: "gsettings".to_string(),
        description: "Apply the wallpaper to the GNOME desktop".to_string(),
        available,
        required: false, // `compose` still works without it
        fix_instructions: if !available {
            Some("Install gsettings: sudo apt install libglib2.0-bin".to_string())
        } else {
            None
        },
    }
}

/// Print a user-friendly capability report.
pub fn print_capability_report(capabilities: &[Capability]) {
    println!("Multiwall System Capabilities:");
    println!("{}", "-".repeat(60));

    for cap in capabilities {
        let status = if cap.available {
            "[OK]"
        } else if cap.required {
            "[MISSING - REQUIRED]"
        } else {
            "[MISSING - OPTIONAL]"
        };

        println!("  {} {}: {}", status, cap.name, cap.description);

        if let Some(ref fix) = cap.fix_instructions {
            println!("    Fix: {fix}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_capability() {
        let caps = check_capabilities();
        let names: Vec<&str> = caps.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Display Session", "xrandr", "gsettings"]);
        for cap in &caps {
            assert_eq!(cap.available, cap.fix_instructions.is_none(), "{}", cap.name);
        }
    }
}
